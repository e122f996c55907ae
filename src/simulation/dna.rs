//! Heritable traits of a creature and the gene-level genetic operators.
//!
//! DNA is a fixed record of five numeric genes plus a colour. It is randomised once,
//! when the first generation is created; afterwards it is only copied, blended or
//! mutated.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::params::MutationStrategy;

/// Probability that crossover replaces an inherited numeric gene with the parents' mean.
pub const BLEND_PROBABILITY: f64 = 0.3;

/// Largest step applied to a colour channel by mutation.
pub const COLOR_STEP: i32 = 30;

/// An RGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Red channel.
    pub fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// Random colour with every channel in `[100, 255]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self([
            rng.random_range(100..=255),
            rng.random_range(100..=255),
            rng.random_range(100..=255),
        ])
    }

    /// Shifts every channel by an independent step in `[-COLOR_STEP, COLOR_STEP]`,
    /// clamped to `[0, 255]`.
    pub fn jitter<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self(self.0.map(|channel| {
            let shifted = i32::from(channel) + rng.random_range(-COLOR_STEP..=COLOR_STEP);
            shifted.clamp(0, 255) as u8
        }))
    }
}

/// The heritable traits of a creature.
///
/// All lengths are in world units, `jump_timing` is in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dna {
    /// Length of both legs.
    pub leg_length: f32,
    /// Length of the neck between body and head.
    pub neck_length: f32,
    /// Diameter of the body.
    pub body_size: f32,
    /// Upward impulse of a jump before the mass penalty.
    pub jump_strength: f32,
    /// Seconds after spawning at which the creature jumps on its own.
    pub jump_timing: f32,
    /// Body colour.
    pub color: Color,
}

impl Dna {
    /// Creates DNA with every trait drawn uniformly from its initial range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            leg_length: rng.random_range(10.0..30.0),
            neck_length: rng.random_range(7.5..40.0),
            body_size: rng.random_range(7.5..17.5),
            jump_strength: rng.random_range(2.0..15.0),
            jump_timing: rng.random_range(1.0..3.0),
            color: Color::random(rng),
        }
    }

    /// Sum of the three length genes.
    pub fn total_height(&self) -> f32 {
        self.leg_length + self.body_size + self.neck_length
    }

    /// Mass derived from body size; heavier creatures jump lower.
    pub fn mass(&self) -> f32 {
        self.total_height() / 15.0
    }
}

/// Builds a child gene by gene.
///
/// Each gene is first taken from one parent with equal probability. Numeric genes are
/// then replaced by the mean of both parents with probability [`BLEND_PROBABILITY`].
/// Colour is always inherited whole from one parent.
pub fn crossover<R: Rng + ?Sized>(parent_a: &Dna, parent_b: &Dna, rng: &mut R) -> Dna {
    let mut gene = |a: f32, b: f32| {
        let inherited = if rng.random_bool(0.5) { a } else { b };
        if rng.random_bool(BLEND_PROBABILITY) {
            (a + b) / 2.0
        } else {
            inherited
        }
    };

    let leg_length = gene(parent_a.leg_length, parent_b.leg_length);
    let neck_length = gene(parent_a.neck_length, parent_b.neck_length);
    let body_size = gene(parent_a.body_size, parent_b.body_size);
    let jump_strength = gene(parent_a.jump_strength, parent_b.jump_strength);
    let jump_timing = gene(parent_a.jump_timing, parent_b.jump_timing);

    let color = if rng.random_bool(0.5) {
        parent_a.color
    } else {
        parent_b.color
    };

    Dna {
        leg_length,
        neck_length,
        body_size,
        jump_strength,
        jump_timing,
        color,
    }
}

/// Returns a mutated copy of `dna`.
///
/// Every numeric gene and the colour are considered independently, in declaration
/// order, each with probability `mutation_rate`. Later genes see the already mutated
/// values of earlier ones.
pub fn mutate<R: Rng + ?Sized>(
    dna: &Dna,
    mutation_rate: f32,
    strategy: MutationStrategy,
    rng: &mut R,
) -> Dna {
    let rate = f64::from(mutation_rate);
    let mut mutated = *dna;

    match strategy {
        MutationStrategy::CrossGene => {
            if rng.random_bool(rate) {
                mutated.leg_length = (60.0 - mutated.body_size).max(20.0);
            }
            if rng.random_bool(rate) {
                mutated.neck_length = (80.0 - mutated.leg_length).max(15.0);
            }
            if rng.random_bool(rate) {
                mutated.body_size = (35.0 - mutated.leg_length).max(15.0);
            }
            if rng.random_bool(rate) {
                mutated.jump_strength = (18.0 - mutated.body_size).max(8.0);
            }
            if rng.random_bool(rate) {
                mutated.jump_timing = (3.0 - mutated.body_size).max(0.5);
            }
        }
        MutationStrategy::Perturb => {
            if rng.random_bool(rate) {
                mutated.leg_length = perturb(mutated.leg_length, 10.0, 20.0, 60.0, rng);
            }
            if rng.random_bool(rate) {
                mutated.neck_length = perturb(mutated.neck_length, 15.0, 15.0, 80.0, rng);
            }
            if rng.random_bool(rate) {
                mutated.body_size = perturb(mutated.body_size, 5.0, 15.0, 35.0, rng);
            }
            if rng.random_bool(rate) {
                mutated.jump_strength = perturb(mutated.jump_strength, 3.0, 8.0, 18.0, rng);
            }
            if rng.random_bool(rate) {
                mutated.jump_timing = perturb(mutated.jump_timing, 0.5, 0.5, 3.0, rng);
            }
        }
    }

    if rng.random_bool(rate) {
        mutated.color = mutated.color.jitter(rng);
    }

    mutated
}

fn perturb<R: Rng + ?Sized>(value: f32, step: f32, min: f32, max: f32, rng: &mut R) -> f32 {
    (value + rng.random_range(-step..=step)).clamp(min, max)
}
