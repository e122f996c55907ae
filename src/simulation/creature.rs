//! Creature physics, behaviour and scoring.
//!
//! A creature walks towards the target, jumps once when its DNA timer fires, falls
//! under gravity, lands on the ground or on top of another creature, and dies when it
//! leaves the arena. Its score is recomputed from scratch every tick from the distance
//! between its head and the target.

use geo::{Line, Point, Rect, coord};
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::dna::{Color, Dna};
use super::geometric_utils::{boxes_overlap, direction, distance};
use super::params::Params;

/// Downward velocity added per tick while airborne.
pub const GRAVITY: f32 = 0.5;
/// Maximum downward velocity.
pub const TERMINAL_VELOCITY: f32 = 20.0;
/// Horizontal speed towards the target.
pub const WALK_SPEED: f32 = 2.0;
/// Gap left between a stacked creature's feet and the head of its support.
pub const STACK_CLEARANCE: f32 = 5.0;
/// How far below the ground a creature may sink before it is considered lost.
pub const FALL_THROUGH_DEPTH: f32 = 100.0;
/// Stroke width of legs and neck.
pub const LIMB_WIDTH: f32 = 4.0;
/// Radius of the head circle.
pub const HEAD_RADIUS: f32 = 8.0;
/// Radius of each eye.
pub const EYE_RADIUS: f32 = 2.0;

/// Static bounds a creature moves in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Creatures with `x < 0` or `x > width` die.
    pub width: f32,
    /// Height of the visible world.
    pub height: f32,
    /// Y coordinate of the ground surface.
    pub ground_y: f32,
}

impl Arena {
    /// Extracts the arena bounds from the simulation parameters.
    pub fn from_params(params: &Params) -> Self {
        Self {
            width: params.world_width,
            height: params.world_height,
            ground_y: params.ground_y,
        }
    }
}

/// Drawing geometry of a creature, derived from its DNA and position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton {
    /// Left leg, from foot to hip.
    pub left_leg: Line<f32>,
    /// Right leg, from foot to hip.
    pub right_leg: Line<f32>,
    /// Centre of the round body.
    pub body_center: Point<f32>,
    /// Radius of the body.
    pub body_radius: f32,
    /// Neck, from the top of the body to the head.
    pub neck: Line<f32>,
    /// Centre of the head.
    pub head: Point<f32>,
    /// Left and right eye centres.
    pub eyes: [Point<f32>; 2],
    /// Fill colour.
    pub color: Color,
}

/// A simulated creature.
///
/// Positions are the creature's feet; y grows downwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Position of the feet in 2D space.
    pub pos: Array1<f32>,
    /// Velocity in world units per tick.
    pub vel: Array1<f32>,
    /// Dead creatures keep their slot but never change again.
    pub alive: bool,
    /// Fitness proxy, recomputed every tick.
    pub score: f32,
    /// Resting on the ground this tick.
    pub on_ground: bool,
    /// A jump is available once the creature has landed.
    pub can_jump: bool,
    /// Index of the peer this creature landed on this tick.
    pub standing_on: Option<usize>,
    /// Seconds since spawning.
    pub jump_timer: f32,
    /// The DNA-timed jump has fired.
    pub has_jumped: bool,
    /// Marked by the driver for the best creature of the population.
    pub is_best: bool,
    /// Heritable traits.
    pub dna: Dna,
}

impl Creature {
    /// Creates a creature at `(x, y)` with a small random horizontal drift.
    pub fn new<R: Rng + ?Sized>(x: f32, y: f32, dna: Dna, rng: &mut R) -> Self {
        Self {
            pos: Array1::from_vec(vec![x, y]),
            vel: Array1::from_vec(vec![rng.random_range(-0.5..0.5), 0.0]),
            alive: true,
            score: 0.0,
            on_ground: false,
            can_jump: true,
            standing_on: None,
            jump_timer: 0.0,
            has_jumped: false,
            is_best: false,
            dna,
        }
    }

    /// Creates a creature with freshly randomised DNA.
    pub fn new_random<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let dna = Dna::random(rng);
        Self::new(x, y, dna, rng)
    }

    /// Mass derived from DNA.
    pub fn mass(&self) -> f32 {
        self.dna.mass()
    }

    /// Distance from the feet to the head.
    pub fn total_height(&self) -> f32 {
        self.dna.total_height()
    }

    /// Position of the head.
    pub fn head_pos(&self) -> Array1<f32> {
        Array1::from_vec(vec![self.pos[0], self.pos[1] - self.total_height()])
    }

    /// Collision box used for stacking, anchored at the feet.
    pub fn footprint(&self) -> Rect<f32> {
        let half_width = self.dna.body_size * 1.5 / 2.0;
        Rect::new(
            coord! { x: self.pos[0] - half_width, y: self.pos[1] - self.total_height() },
            coord! { x: self.pos[0] + half_width, y: self.pos[1] },
        )
    }

    /// Computes the drawing geometry.
    pub fn skeleton(&self) -> Skeleton {
        let (x, y) = (self.pos[0], self.pos[1]);
        let dna = &self.dna;

        let leg_spacing = dna.body_size * 0.6;
        let hip_y = y - dna.leg_length;
        let left_x = x - leg_spacing / 2.0;
        let right_x = x + leg_spacing / 2.0;

        let body_radius = dna.body_size / 2.0;
        let body_y = hip_y - body_radius;
        let neck_bottom = body_y - body_radius;
        let head_y = neck_bottom - dna.neck_length;

        Skeleton {
            left_leg: Line::new(coord! { x: left_x, y: y }, coord! { x: left_x, y: hip_y }),
            right_leg: Line::new(coord! { x: right_x, y: y }, coord! { x: right_x, y: hip_y }),
            body_center: Point::new(x, body_y),
            body_radius,
            neck: Line::new(coord! { x: x, y: neck_bottom }, coord! { x: x, y: head_y }),
            head: Point::new(x, head_y),
            eyes: [Point::new(x - 3.0, head_y - 1.0), Point::new(x + 3.0, head_y - 1.0)],
            color: dna.color,
        }
    }

    /// Jumps if a jump is available and the creature stands on something.
    ///
    /// Heavier creatures jump lower: the impulse is `jump_strength / sqrt(mass)`.
    pub fn jump(&mut self) {
        if !(self.can_jump && (self.on_ground || self.standing_on.is_some())) {
            return;
        }
        self.vel[1] = -(self.dna.jump_strength / self.mass().sqrt());
        self.on_ground = false;
        self.standing_on = None;
        self.can_jump = false;
        self.has_jumped = true;
    }

    /// Advances the creature by one tick.
    ///
    /// `index` is this creature's slot in `peers`; that slot is skipped during the
    /// stacking scan. `peers` is scanned in order and the first valid support wins.
    pub fn update(
        &mut self,
        index: usize,
        target: &Array1<f32>,
        arena: &Arena,
        dt: f32,
        peers: &[Creature],
    ) {
        if !self.alive {
            return;
        }

        self.vel[0] = direction(&self.pos, target)[0] * WALK_SPEED;

        self.jump_timer += dt;
        if !self.has_jumped && self.jump_timer >= self.dna.jump_timing {
            self.jump();
        }

        if !self.on_ground && self.standing_on.is_none() {
            self.vel[1] += GRAVITY;
        }
        self.vel[1] = self.vel[1].min(TERMINAL_VELOCITY);

        self.pos += &self.vel;

        if self.pos[1] >= arena.ground_y {
            self.pos[1] = arena.ground_y;
            self.vel[1] = 0.0;
            self.on_ground = true;
            self.can_jump = true;
        } else {
            self.on_ground = false;
        }

        self.standing_on = None;
        if self.vel[1] > 0.0 {
            if let Some(support) = self.find_support(index, peers) {
                let other = &peers[support];
                self.pos[1] = other.pos[1] - other.total_height() - STACK_CLEARANCE;
                self.vel[1] = 0.0;
                self.standing_on = Some(support);
                self.can_jump = true;
            }
        }

        if self.pos[0] < 0.0 || self.pos[0] > arena.width {
            log::debug!("creature {} hit a wall at x={:.1}", index, self.pos[0]);
            self.alive = false;
        }

        if self.pos[1] > arena.ground_y + FALL_THROUGH_DEPTH {
            log::debug!("creature {} fell through at y={:.1}", index, self.pos[1]);
            self.alive = false;
        }

        self.score = proximity_score(&self.head_pos(), target);
    }

    /// First alive peer, in slice order, this creature is falling onto.
    fn find_support(&self, index: usize, peers: &[Creature]) -> Option<usize> {
        let footprint = self.footprint();
        peers
            .iter()
            .enumerate()
            .find(|(i, other)| {
                *i != index
                    && other.alive
                    && boxes_overlap(&footprint, &other.footprint())
                    && self.pos[1] < other.pos[1]
                    && (self.pos[0] - other.pos[0]).abs() < self.dna.body_size
            })
            .map(|(i, _)| i)
    }
}

/// Score of a head position relative to the target.
///
/// `200 / (d + 1)`, plus 50 within 50 units, a further 100 within 20 units, minus 10
/// beyond 300 units, plus 10 when the target lies steeply above the head.
pub fn proximity_score(head: &Array1<f32>, target: &Array1<f32>) -> f32 {
    let dist = distance(head, target);
    let mut score = (200.0 / (dist + 1.0)).max(0.0);

    if dist < 50.0 {
        score += 50.0;
    }
    if dist < 20.0 {
        score += 100.0;
    }
    if dist > 300.0 {
        score -= 10.0;
    }
    if direction(head, target)[1] < -0.5 {
        score += 10.0;
    }

    score
}

/// Updates every creature in population order, mutating the population in place.
///
/// A creature's stacking check sees the peers before it in their post-update state and
/// the peers after it in their pre-update state.
pub fn step_population(population: &mut [Creature], target: &Array1<f32>, arena: &Arena, dt: f32) {
    for index in 0..population.len() {
        if !population[index].alive {
            continue;
        }
        let mut creature = population[index].clone();
        creature.update(index, target, arena, dt, population);
        population[index] = creature;
    }
}
