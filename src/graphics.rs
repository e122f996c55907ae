use climbers::simulation::creature::{Creature, EYE_RADIUS, HEAD_RADIUS, LIMB_WIDTH};
use climbers::simulation::params::Params;
use climbers::simulation::world::World;
use geo::{Line, Point};
use macroquad::prelude::*;

const SKY: Color = Color::new(0.53, 0.75, 0.92, 1.0);
const GROUND: Color = Color::new(0.09, 0.26, 0.15, 1.0);
const APPLE_RADIUS: f32 = 25.0;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Point<f32> {
    type Output = Vec2;
    fn to_screen(&self, params: &Params) -> Vec2 {
        let scale_x = screen_width() / params.world_width;
        let scale_y = screen_height() / params.world_height;
        vec2(self.x() * scale_x, self.y() * scale_y)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let scale_x = screen_width() / params.world_width;
        let scale_y = screen_height() / params.world_height;
        self * scale_x.min(scale_y)
    }
}

pub fn draw_world(world: &World) {
    let params = world.params();

    clear_background(SKY);

    let ground = Point::new(0.0, params.ground_y).to_screen(params);
    draw_rectangle(0.0, ground.y, screen_width(), screen_height() - ground.y, GROUND);

    draw_target(world, params);

    // dead creatures stay in their slot but are not drawn
    world
        .population
        .iter()
        .filter(|c| c.alive)
        .for_each(|creature| draw_creature(creature, params));
}

fn draw_target(world: &World, params: &Params) {
    let center = Point::new(world.target[0], world.target[1]).to_screen(params);
    let radius = APPLE_RADIUS.to_screen(params);
    draw_circle(center.x, center.y, radius, Color::from_rgba(220, 30, 40, 255));
    draw_line(
        center.x,
        center.y - radius,
        center.x + radius * 0.3,
        center.y - radius * 1.4,
        3.0,
        Color::from_rgba(60, 140, 40, 255),
    );
}

fn draw_creature(creature: &Creature, params: &Params) {
    let skeleton = creature.skeleton();
    let dna_color = skeleton.color;
    let color = Color::from_rgba(dna_color.r(), dna_color.g(), dna_color.b(), 255);
    let width = LIMB_WIDTH.to_screen(params);

    draw_segment(&skeleton.left_leg, width, color, params);
    draw_segment(&skeleton.right_leg, width, color, params);

    let body = skeleton.body_center.to_screen(params);
    draw_circle(body.x, body.y, skeleton.body_radius.to_screen(params), color);

    draw_segment(&skeleton.neck, width, color, params);

    let head = skeleton.head.to_screen(params);
    draw_circle(head.x, head.y, HEAD_RADIUS.to_screen(params), color);
    for eye in &skeleton.eyes {
        let eye = eye.to_screen(params);
        draw_circle(eye.x, eye.y, EYE_RADIUS.to_screen(params), BLACK);
    }

    if creature.is_best {
        draw_crown(head, params);
    }
}

fn draw_segment(line: &Line<f32>, width: f32, color: Color, params: &Params) {
    let start = line.start_point().to_screen(params);
    let end = line.end_point().to_screen(params);
    draw_line(start.x, start.y, end.x, end.y, width, color);
}

/// Three-pointed crown floating above the head.
fn draw_crown(head: Vec2, params: &Params) {
    let half = 15.0_f32.to_screen(params);
    let base_y = head.y - 10.0_f32.to_screen(params);
    let band = 8.0_f32.to_screen(params);
    let peak = 22.0_f32.to_screen(params);
    let gold = Color::from_rgba(255, 200, 0, 255);

    draw_rectangle(head.x - half, base_y - band, half * 2.0, band, gold);
    for dx in [-half, 0.0, half] {
        let x = (head.x + dx).clamp(head.x - half + band / 2.0, head.x + half - band / 2.0);
        draw_triangle(
            vec2(x - band / 2.0, base_y - band),
            vec2(x + band / 2.0, base_y - band),
            vec2(x, base_y - peak),
            gold,
        );
    }
}
