//! The simulation driver: ticks the population, moves the target and decides when a
//! generation ends.
//!
//! Every tick runs strictly in sequence: creatures are updated in population order
//! against the population being mutated in place, the best creature is marked, and
//! the generation is replaced as a whole once every creature is dead or the
//! generation timer has expired.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::creature::{Arena, Creature, step_population};
use super::event_log::{EventKind, EventLog};
use super::genetic::{GeneticAlgorithm, Statistics};
use super::params::{Params, ParamsError};

/// The complete simulation state.
#[derive(Debug, Clone)]
pub struct World {
    /// Current generation, in spawn order.
    pub population: Vec<Creature>,
    /// Genetic algorithm state (generation counter, fitness history).
    pub ga: GeneticAlgorithm,
    /// Point every creature is trying to reach with its head.
    pub target: Array1<f32>,
    /// Arena bounds.
    pub arena: Arena,
    /// Seconds spent in the current generation.
    pub generation_timer: f32,
    /// Total unpaused simulation time.
    pub time: f32,
    /// Recent events for display.
    pub event_log: EventLog,
    params: Params,
    paused: bool,
    rng: StdRng,
}

impl World {
    /// Creates a world with a random first generation and a random target.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let ga = GeneticAlgorithm::from_params(&params);
        let (spawn_x, spawn_y) = params.spawn_point();
        let population = ga.create_population(spawn_x, spawn_y, &mut rng);

        let mut world = Self {
            population,
            ga,
            target: Array1::zeros(2),
            arena: Arena::from_params(&params),
            generation_timer: 0.0,
            time: 0.0,
            event_log: EventLog::default(),
            params,
            paused: false,
            rng,
        };
        world.relocate_target();

        log::info!(
            "created world with {} creatures, target at ({:.0}, {:.0})",
            world.population.len(),
            world.target[0],
            world.target[1]
        );

        Ok(world)
    }

    /// Advances the simulation by one tick of `dt` seconds.
    ///
    /// Returns the statistics of the generation that just ended, if this tick ended
    /// one. Does nothing while paused.
    pub fn step(&mut self, dt: f32) -> Option<Statistics> {
        if self.paused {
            return None;
        }

        self.generation_timer += dt;
        self.time += dt;

        let all_dead = self.population.iter().all(|c| !c.alive);

        step_population(&mut self.population, &self.target, &self.arena, dt);
        self.mark_best();

        if !all_dead && self.generation_timer < self.params.generation_time {
            return None;
        }

        let stats = GeneticAlgorithm::statistics(&self.population);
        let generation = self.ga.generation;
        let (reason, kind) = if all_dead {
            ("all creatures died", EventKind::Extinction)
        } else {
            ("time ran out", EventKind::Timeout)
        };

        log::info!("generation {} ended, {}: {}", generation, reason, stats);
        self.event_log.record(
            generation,
            self.time,
            kind,
            format!("Gen {generation}: {reason}, {stats}"),
        );

        self.next_generation();
        Some(stats)
    }

    /// Replaces the population with its offspring and moves the target.
    pub fn next_generation(&mut self) {
        let (spawn_x, spawn_y) = self.params.spawn_point();
        self.population = self
            .ga
            .evolve(&self.population, spawn_x, spawn_y, &mut self.rng);
        self.relocate_target();
        self.generation_timer = 0.0;

        self.event_log.record(
            self.ga.generation,
            self.time,
            EventKind::Generation,
            format!(
                "Gen {} spawned, target at x={:.0}",
                self.ga.generation, self.target[0]
            ),
        );
    }

    /// Moves the target to a random x inside the margins, at the fixed target height.
    pub fn relocate_target(&mut self) {
        let margin = self.params.target_margin;
        let x = self
            .rng
            .random_range(margin..=self.params.world_width - margin);
        self.target = Array1::from_vec(vec![x, self.params.target_y]);
    }

    /// Makes every living creature attempt a jump.
    pub fn force_jump(&mut self) {
        for creature in self.population.iter_mut().filter(|c| c.alive) {
            creature.jump();
        }
        self.event_log
            .record(self.ga.generation, self.time, EventKind::Jump, "Jump!");
    }

    /// Pauses or resumes the simulation.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        let description = if self.paused { "Paused" } else { "Resumed" };
        self.event_log
            .record(self.ga.generation, self.time, EventKind::Pause, description);
    }

    /// Whether `step` is currently skipped.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds until the current generation is forcibly ended.
    pub fn time_left(&self) -> f32 {
        (self.params.generation_time - self.generation_timer).max(0.0)
    }

    /// Number of creatures still alive.
    pub fn alive_count(&self) -> usize {
        self.population.iter().filter(|c| c.alive).count()
    }

    /// Score statistics of the current population.
    pub fn statistics(&self) -> Statistics {
        GeneticAlgorithm::statistics(&self.population)
    }

    /// Parameters the world was created with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    fn mark_best(&mut self) {
        let best = GeneticAlgorithm::best_index(&self.population);
        for (i, creature) in self.population.iter_mut().enumerate() {
            creature.is_best = i == best;
        }
    }
}
