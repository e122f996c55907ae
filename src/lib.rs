//! # Climbers - Evolving Jumping Creatures
//!
//! A population of simple articulated creatures evolves, through a genetic algorithm,
//! to reach a target point in a 2D world with gravity, ground collision and
//! creature-on-creature stacking.
//!
//! ## Features
//!
//! - Fixed-shape DNA (leg, neck and body lengths, jump strength and timing, colour)
//! - Per-tick creature physics: walking, timed jumps, gravity, landing and stacking
//! - Proximity scoring against the target, recomputed every tick
//! - Generational evolution: tournament selection, crossover, mutation and elitism
//! - Seedable, explicitly passed random number generation
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::creature`] - Creature physics, behaviour and scoring
//! - [`simulation::dna`] - Heritable traits and gene-level operators
//! - [`simulation::genetic`] - The generational genetic algorithm
//! - [`simulation::world`] - Tick driver and generation boundaries
//! - [`simulation::params`] - Configuration

/// Core simulation logic and data structures.
pub mod simulation {
    /// Creature physics, behaviour, scoring and drawing geometry.
    pub mod creature;
    /// DNA record and gene-level crossover and mutation.
    pub mod dna;
    /// Recent events for display.
    pub mod event_log;
    /// Generational genetic algorithm and population statistics.
    pub mod genetic;
    /// Geometric utility functions for distances, directions and overlap.
    pub mod geometric_utils;
    /// Simulation parameters.
    pub mod params;
    /// Simulation driver that owns the population and the target.
    pub mod world;
}
