#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use climbers::simulation::creature::Creature;
use climbers::simulation::genetic::GeneticAlgorithm;
use climbers::simulation::params::{MutationStrategy, Params};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn population_with_scores(scores: &[f32], rng: &mut StdRng) -> Vec<Creature> {
    scores
        .iter()
        .map(|&score| {
            let mut creature = Creature::new_random(100.0, 500.0, rng);
            creature.score = score;
            creature
        })
        .collect()
}

fn small_ga(population_size: usize) -> GeneticAlgorithm {
    GeneticAlgorithm::from_params(&Params {
        population_size,
        elite_count: 2,
        tournament_size: 3,
        spawn_spacing: 30.0,
        ..Params::default()
    })
}

#[test]
fn test_new_uses_defaults() {
    let ga = GeneticAlgorithm::new(10);
    assert_eq!(ga.population_size, 10);
    assert_eq!(ga.generation, 1);
    assert!(ga.best_fitness_history.is_empty());
    assert_eq!(ga.mutation_rate, 0.05);
    assert_eq!(ga.mutation_strategy, MutationStrategy::CrossGene);
    assert_eq!(ga.elite_count, 2);
    assert_eq!(ga.tournament_size, 3);
}

#[test]
fn test_create_population_layout() {
    let mut rng = StdRng::seed_from_u64(1);
    let ga = small_ga(4);

    let population = ga.create_population(500.0, 580.0, &mut rng);

    assert_eq!(population.len(), 4);
    let xs: Vec<f32> = population.iter().map(|c| c.pos[0]).collect();
    assert_eq!(xs, vec![440.0, 470.0, 500.0, 530.0]);
    for creature in &population {
        assert_eq!(creature.pos[1], 580.0);
        assert!(creature.alive);
        assert!(creature.vel[0] >= -0.5 && creature.vel[0] < 0.5);
        assert_eq!(creature.vel[1], 0.0);
    }
}

#[test]
fn test_evaluate_fitness_normalises() {
    let mut rng = StdRng::seed_from_u64(2);
    let population = population_with_scores(&[10.0, 30.0, 60.0], &mut rng);

    let fitness = GeneticAlgorithm::evaluate_fitness(&population);

    let expected = [0.1, 0.3, 0.6];
    for (f, e) in fitness.iter().zip(expected) {
        assert!((f - e).abs() < 1e-6, "{f} != {e}");
    }
}

#[test]
fn test_evaluate_fitness_zero_total_is_uniform() {
    let mut rng = StdRng::seed_from_u64(3);
    let population = population_with_scores(&[0.0, 0.0, 0.0, 0.0], &mut rng);
    assert_eq!(
        GeneticAlgorithm::evaluate_fitness(&population),
        vec![0.25; 4]
    );

    // negative and positive scores cancelling out are treated the same way
    let population = population_with_scores(&[-5.0, 5.0], &mut rng);
    assert_eq!(GeneticAlgorithm::evaluate_fitness(&population), vec![0.5; 2]);
}

#[test]
fn test_evaluate_fitness_sums_to_one() {
    let mut rng = StdRng::seed_from_u64(4);
    let population = population_with_scores(&[1.5, 200.0, 0.3, 57.0, 12.0, 3.0], &mut rng);

    let total: f32 = GeneticAlgorithm::evaluate_fitness(&population).iter().sum();

    assert!((total - 1.0).abs() < 1e-5);
}

#[test]
fn test_selection_pool_size() {
    let mut rng = StdRng::seed_from_u64(5);
    let ga = small_ga(8);
    let population = population_with_scores(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], &mut rng);
    let fitness = GeneticAlgorithm::evaluate_fitness(&population);

    let parents = ga.selection(&population, &fitness, &mut rng);

    assert_eq!(parents.len(), 8);
}

#[test]
fn test_selection_full_tournament_always_picks_best() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut ga = small_ga(5);
    ga.tournament_size = 5;
    let population = population_with_scores(&[4.0, 9.0, 1.0, 3.0, 2.0], &mut rng);
    let fitness = GeneticAlgorithm::evaluate_fitness(&population);

    let parents = ga.selection(&population, &fitness, &mut rng);

    assert!(parents.iter().all(|p| std::ptr::eq(*p, &population[1])));
}

#[test]
fn test_selection_never_picks_worst_with_pairs() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut ga = small_ga(4);
    ga.tournament_size = 2;
    let population = population_with_scores(&[5.0, 1.0, 8.0, 3.0], &mut rng);
    let fitness = GeneticAlgorithm::evaluate_fitness(&population);

    for _ in 0..50 {
        let parents = ga.selection(&population, &fitness, &mut rng);
        assert!(parents.iter().all(|p| !std::ptr::eq(*p, &population[1])));
    }
}

#[test]
fn test_evolve_keeps_elites_and_size() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut ga = small_ga(6);
    let population = population_with_scores(&[5.0, 50.0, 1.0, 20.0, 50.0, 3.0], &mut rng);

    let next = ga.evolve(&population, 500.0, 580.0, &mut rng);

    assert_eq!(next.len(), 6);
    assert_eq!(ga.generation, 2);
    assert_eq!(ga.best_fitness_history, vec![50.0]);

    // equal fitness keeps population order
    assert_eq!(next[0].dna, population[1].dna);
    assert_eq!(next[1].dna, population[4].dna);
    assert_eq!(next[0].pos[0], 470.0);
    assert_eq!(next[1].pos[0], 500.0);

    for (i, creature) in next.iter().enumerate() {
        assert!(creature.alive);
        assert_eq!(creature.score, 0.0);
        assert!(!creature.has_jumped);
        assert_eq!(creature.pos[1], 580.0);
        if i >= 2 {
            assert_eq!(creature.pos[0], 500.0 + (i as f32 - 3.0) * 30.0);
        }
    }
}

#[test]
fn test_evolve_without_elites() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut ga = small_ga(5);
    ga.elite_count = 0;
    let population = population_with_scores(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut rng);

    let next = ga.evolve(&population, 200.0, 400.0, &mut rng);

    assert_eq!(next.len(), 5);
    assert_eq!(next[0].pos[0], 200.0 - 60.0);
}

#[test]
fn test_evolve_history_accumulates() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut ga = small_ga(5);
    let mut population = population_with_scores(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut rng);

    for round in 0..4 {
        for (i, creature) in population.iter_mut().enumerate() {
            creature.score = (round * 10 + i) as f32;
        }
        population = ga.evolve(&population, 300.0, 500.0, &mut rng);
        assert_eq!(population.len(), 5);
    }

    assert_eq!(ga.generation, 5);
    assert_eq!(ga.best_fitness_history, vec![4.0, 14.0, 24.0, 34.0]);
}

#[test]
#[should_panic]
fn test_evolve_empty_population_panics() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut ga = small_ga(5);
    ga.evolve(&[], 0.0, 0.0, &mut rng);
}

#[test]
#[should_panic]
fn test_evolve_population_below_tournament_size_panics() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut ga = small_ga(5);
    let population = population_with_scores(&[1.0, 2.0], &mut rng);
    ga.evolve(&population, 0.0, 0.0, &mut rng);
}

#[test]
fn test_best_creature_first_of_ties() {
    let mut rng = StdRng::seed_from_u64(13);
    let population = population_with_scores(&[3.0, 7.0, 7.0, 1.0], &mut rng);

    assert_eq!(GeneticAlgorithm::best_index(&population), 1);
    assert!(std::ptr::eq(
        GeneticAlgorithm::best_creature(&population),
        &population[1]
    ));
}

#[test]
fn test_statistics() {
    let mut rng = StdRng::seed_from_u64(14);
    let population = population_with_scores(&[4.0, 1.0, 3.0, 2.0], &mut rng);

    let stats = GeneticAlgorithm::statistics(&population);

    assert_eq!(stats.best, 4.0);
    assert_eq!(stats.worst, 1.0);
    assert_eq!(stats.average, 2.5);
    assert_eq!(stats.median, 3.0);
    assert_eq!(
        stats.to_string(),
        "best=4.0 worst=1.0 average=2.5 median=3.0"
    );
}

#[test]
fn test_statistics_single_creature() {
    let mut rng = StdRng::seed_from_u64(15);
    let population = population_with_scores(&[-2.0], &mut rng);

    let stats = GeneticAlgorithm::statistics(&population);

    assert_eq!(stats.best, -2.0);
    assert_eq!(stats.worst, -2.0);
    assert_eq!(stats.median, -2.0);
}

#[test]
#[should_panic]
fn test_statistics_empty_population_panics() {
    GeneticAlgorithm::statistics(&[]);
}
