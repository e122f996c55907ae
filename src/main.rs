use std::path::PathBuf;

use clap::Parser;
use climbers::simulation::params::Params;
use climbers::simulation::world::World;
use macroquad::prelude::*;

mod graphics;
mod ui;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with simulation parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the configuration screen
    #[arg(long)]
    start: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Climbers - Evolving Creatures".to_owned(),
        window_width: 1020,
        window_height: 680,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_params(args: &Args) -> Params {
    let mut params = match &args.config {
        Some(path) => Params::load_from_file(path).unwrap_or_else(|e| {
            log::warn!("{}: {e}, using default parameters", path.display());
            Params::default()
        }),
        None => Params::default(),
    };
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    params
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut params = load_params(&args);
    let mut genesis = !args.start;
    let mut world: Option<World> = None;
    let mut ui_state = ui::UIState::new();

    log::info!("starting climbers simulation");

    loop {
        if world.is_none() && !genesis {
            match World::new(params.clone()) {
                Ok(new_world) => {
                    world = Some(new_world);
                    ui_state.status_message = None;
                }
                Err(e) => {
                    log::error!("cannot start simulation: {e}");
                    ui_state.status_message = Some(e.to_string());
                    genesis = true;
                }
            }
        }

        if genesis {
            genesis = !ui::draw_genesis_screen(&mut params, ui_state.status_message.as_deref());
            next_frame().await;
            continue;
        }

        if let Some(ref mut world) = world {
            if is_key_pressed(KeyCode::Space) {
                world.force_jump();
            }
            if is_key_pressed(KeyCode::P) {
                world.toggle_pause();
            }

            let dt = get_frame_time();
            for _ in 0..ui_state.steps_per_frame {
                world.step(dt);
            }

            if ui_state.rendering_enabled {
                graphics::draw_world(world);
            } else {
                clear_background(DARKGRAY);
            }

            ui::draw_ui(&mut ui_state, world);
            ui::process_egui();
        }

        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            world = None;
            genesis = true;
        }

        next_frame().await
    }
}
