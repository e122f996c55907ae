//! Generational genetic algorithm.
//!
//! Each generation is evaluated as a whole: scores are normalised into fitness shares,
//! the best creatures are copied unchanged (elitism), a parent pool is filled by
//! tournament selection, and the remaining slots are filled with mutated crossover
//! children. The previous population is discarded.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::creature::Creature;
use super::dna::{self, Dna};
use super::params::{MutationStrategy, Params};

/// Score summary of one population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Highest score.
    pub best: f32,
    /// Lowest score.
    pub worst: f32,
    /// Mean score.
    pub average: f32,
    /// Element at index `n / 2` of the ascending scores.
    pub median: f32,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "best={:.1} worst={:.1} average={:.1} median={:.1}",
            self.best, self.worst, self.average, self.median
        )
    }
}

/// Owns the population lifecycle across generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneticAlgorithm {
    /// Number of creatures per generation.
    pub population_size: usize,
    /// Current generation, starting at 1.
    pub generation: u32,
    /// Best raw score of every finished generation, oldest first.
    pub best_fitness_history: Vec<f32>,
    /// Per-gene mutation probability.
    pub mutation_rate: f32,
    /// Numeric gene mutation operator.
    pub mutation_strategy: MutationStrategy,
    /// Creatures copied unchanged into the next generation.
    pub elite_count: usize,
    /// Contestants per tournament.
    pub tournament_size: usize,
    /// Horizontal distance between spawn points.
    pub spawn_spacing: f32,
}

impl GeneticAlgorithm {
    /// Creates an algorithm with the default operators for `population_size` creatures.
    pub fn new(population_size: usize) -> Self {
        Self::from_params(&Params {
            population_size,
            ..Params::default()
        })
    }

    /// Creates an algorithm configured from the simulation parameters.
    pub fn from_params(params: &Params) -> Self {
        Self {
            population_size: params.population_size,
            generation: 1,
            best_fitness_history: Vec::new(),
            mutation_rate: params.mutation_rate,
            mutation_strategy: params.mutation_strategy,
            elite_count: params.elite_count,
            tournament_size: params.tournament_size,
            spawn_spacing: params.spawn_spacing,
        }
    }

    /// Creates the first generation with random DNA, spread horizontally around `spawn_x`.
    pub fn create_population<R: Rng + ?Sized>(
        &self,
        spawn_x: f32,
        spawn_y: f32,
        rng: &mut R,
    ) -> Vec<Creature> {
        (0..self.population_size)
            .map(|i| Creature::new_random(self.spawn_x(spawn_x, i), spawn_y, rng))
            .collect()
    }

    /// Normalises scores into shares of the total.
    ///
    /// A total of exactly zero yields the uniform distribution `1 / n`.
    pub fn evaluate_fitness(population: &[Creature]) -> Vec<f32> {
        let total: f32 = population.iter().map(|c| c.score).sum();
        if total == 0.0 {
            return vec![1.0 / population.len() as f32; population.len()];
        }
        population.iter().map(|c| c.score / total).collect()
    }

    /// Fills a parent pool of `population_size` entries by tournament selection.
    ///
    /// Each tournament draws `tournament_size` distinct creatures; the first one with
    /// the highest fitness wins. Creatures may win several tournaments.
    pub fn selection<'a, R: Rng + ?Sized>(
        &self,
        population: &'a [Creature],
        fitness_scores: &[f32],
        rng: &mut R,
    ) -> Vec<&'a Creature> {
        (0..self.population_size)
            .map(|_| {
                let contestants =
                    rand::seq::index::sample(rng, population.len(), self.tournament_size);
                let mut winner = contestants.index(0);
                for idx in contestants.iter().skip(1) {
                    if fitness_scores[idx] > fitness_scores[winner] {
                        winner = idx;
                    }
                }
                &population[winner]
            })
            .collect()
    }

    /// Combines the DNA of two parents into a child.
    pub fn crossover<R: Rng + ?Sized>(
        parent_a: &Creature,
        parent_b: &Creature,
        rng: &mut R,
    ) -> Dna {
        dna::crossover(&parent_a.dna, &parent_b.dna, rng)
    }

    /// Returns a mutated copy of `dna` using the configured rate and operator.
    pub fn mutate<R: Rng + ?Sized>(&self, dna: &Dna, rng: &mut R) -> Dna {
        dna::mutate(dna, self.mutation_rate, self.mutation_strategy, rng)
    }

    /// Breeds the next generation from `population` and advances the generation counter.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty or smaller than the tournament size.
    pub fn evolve<R: Rng + ?Sized>(
        &mut self,
        population: &[Creature],
        spawn_x: f32,
        spawn_y: f32,
        rng: &mut R,
    ) -> Vec<Creature> {
        assert!(!population.is_empty(), "cannot evolve an empty population");
        assert!(
            population.len() >= self.tournament_size,
            "population of {} is smaller than the tournament size {}",
            population.len(),
            self.tournament_size
        );

        let fitness_scores = Self::evaluate_fitness(population);
        self.best_fitness_history.push(Self::best_creature(population).score);

        // Stable sort: creatures with equal fitness keep their relative order.
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| fitness_scores[b].total_cmp(&fitness_scores[a]));
        let ranked: Vec<Creature> = order.iter().map(|&i| population[i].clone()).collect();
        let ranked_scores: Vec<f32> = order.iter().map(|&i| fitness_scores[i]).collect();

        let mut next = Vec::with_capacity(self.population_size);

        let elite_count = self.elite_count.min(ranked.len());
        for (i, elite) in ranked.iter().take(elite_count).enumerate() {
            let offset = (i as f32 - (elite_count / 2) as f32) * self.spawn_spacing;
            next.push(Creature::new(spawn_x + offset, spawn_y, elite.dna, rng));
        }

        let parents = self.selection(&ranked, &ranked_scores, rng);
        for i in next.len()..self.population_size {
            let (Some(parent_a), Some(parent_b)) = (parents.choose(rng), parents.choose(rng))
            else {
                break;
            };
            let child = Self::crossover(parent_a, parent_b, rng);
            let child = self.mutate(&child, rng);
            next.push(Creature::new(self.spawn_x(spawn_x, i), spawn_y, child, rng));
        }

        log::debug!(
            "generation {} bred {} creatures ({} elites)",
            self.generation,
            next.len(),
            elite_count
        );

        self.generation += 1;
        next
    }

    /// First creature with the highest score.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn best_creature(population: &[Creature]) -> &Creature {
        &population[Self::best_index(population)]
    }

    /// Index of the first creature with the highest score.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn best_index(population: &[Creature]) -> usize {
        assert!(!population.is_empty(), "population is empty");
        let mut best = 0;
        for (i, creature) in population.iter().enumerate().skip(1) {
            if creature.score > population[best].score {
                best = i;
            }
        }
        best
    }

    /// Best, worst, average and median of the current raw scores.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn statistics(population: &[Creature]) -> Statistics {
        assert!(!population.is_empty(), "population is empty");
        let mut scores: Vec<f32> = population.iter().map(|c| c.score).collect();
        scores.sort_by(f32::total_cmp);

        Statistics {
            best: scores[scores.len() - 1],
            worst: scores[0],
            average: scores.iter().sum::<f32>() / scores.len() as f32,
            median: scores[scores.len() / 2],
        }
    }

    fn spawn_x(&self, spawn_x: f32, index: usize) -> f32 {
        spawn_x + (index as f32 - (self.population_size / 2) as f32) * self.spawn_spacing
    }
}
