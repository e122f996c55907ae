//! Simulation parameters and their JSON configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How `GeneticAlgorithm::mutate` rewrites a numeric gene once it is picked for mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MutationStrategy {
    /// Overwrite the gene with a clamped formula of a *different* gene
    /// (e.g. `leg_length = max(20, 60 - body_size)`).
    #[default]
    CrossGene,
    /// Add a bounded uniform offset to the gene's own value and clamp it to its range.
    Perturb,
}

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for [`Params`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Simulation parameters that control the world and the genetic algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// World width; creatures leaving `[0, world_width]` die.
    pub world_width: f32,
    /// World height (used for rendering only).
    pub world_height: f32,
    /// Y coordinate of the ground surface (y grows downwards).
    pub ground_y: f32,
    /// Number of creatures per generation.
    pub population_size: usize,
    /// Per-gene mutation probability.
    pub mutation_rate: f32,
    /// Operator used for numeric gene mutation.
    pub mutation_strategy: MutationStrategy,
    /// Number of top creatures whose DNA is copied unchanged into the next generation.
    pub elite_count: usize,
    /// Number of distinct contestants per selection tournament.
    pub tournament_size: usize,
    /// Horizontal distance between neighbouring spawn points.
    pub spawn_spacing: f32,
    /// Seconds before a generation is forcibly ended.
    pub generation_time: f32,
    /// Minimum distance between a relocated target and either world edge.
    pub target_margin: f32,
    /// Fixed height of the target.
    pub target_y: f32,
    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_width: 1020.0,
            world_height: 680.0,
            ground_y: 580.0,
            population_size: 100,
            mutation_rate: 0.05,
            mutation_strategy: MutationStrategy::CrossGene,
            elite_count: 2,
            tournament_size: 3,
            spawn_spacing: 30.0,
            generation_time: 15.0,
            target_margin: 50.0,
            target_y: 50.0,
            seed: None,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file. Missing fields fall back to their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Writes the parameters as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Checks that every value is usable by [`crate::simulation::world::World`].
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(ParamsError::Invalid("world dimensions must be positive"));
        }
        if self.ground_y <= 0.0 {
            return Err(ParamsError::Invalid("ground_y must be positive"));
        }
        if self.tournament_size == 0 {
            return Err(ParamsError::Invalid("tournament_size must be at least 1"));
        }
        if self.population_size < self.tournament_size {
            return Err(ParamsError::Invalid(
                "population_size must be at least tournament_size",
            ));
        }
        if self.elite_count > self.population_size {
            return Err(ParamsError::Invalid(
                "elite_count must not exceed population_size",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ParamsError::Invalid("mutation_rate must be within [0, 1]"));
        }
        if self.generation_time <= 0.0 {
            return Err(ParamsError::Invalid("generation_time must be positive"));
        }
        if self.target_margin < 0.0 || self.target_margin * 2.0 >= self.world_width {
            return Err(ParamsError::Invalid(
                "target_margin must leave room for the target inside the world",
            ));
        }
        Ok(())
    }

    /// Spawn point shared by every generation: horizontally centred, feet on the ground.
    pub fn spawn_point(&self) -> (f32, f32) {
        (self.world_width / 2.0, self.ground_y)
    }
}
