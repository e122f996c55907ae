use climbers::simulation::world::World;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};

use super::ui::{HISTORY_WINDOW, UIState};

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, world: &World) {
    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
                let button_text = if state.rendering_enabled {
                    "🎨 Rendering: ON"
                } else {
                    "🎨 Rendering: OFF"
                };
                if ui.button(button_text).clicked() {
                    state.rendering_enabled = !state.rendering_enabled;
                }
            });
            ui.checkbox(&mut state.show_events, "Show recent events");

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            ui.label("Ticks per frame");
            ui.add(egui::Slider::new(&mut state.steps_per_frame, 1..=20));

            ui.separator();

            let params = world.params();
            ui.label(format!("Generation: {}", world.ga.generation));
            ui.label(format!("Time left: {:.1}s", world.time_left()));
            ui.label(format!(
                "Alive: {}/{}",
                world.alive_count(),
                world.population.len()
            ));
            ui.label(format!(
                "Target: ({:.0}, {:.0})",
                world.target[0], world.target[1]
            ));

            ui.separator();

            let stats = world.statistics();
            ui.heading("Scores");
            ui.label(format!("Best: {:.1}", stats.best));
            ui.label(format!("Average: {:.1}", stats.average));
            ui.label(format!("Median: {:.1}", stats.median));
            ui.label(format!("Worst: {:.1}", stats.worst));

            ui.separator();

            ui.heading("Best Fitness History");
            draw_fitness_plot(ui, &world.ga.best_fitness_history);

            ui.separator();

            ui.collapsing("⚙ Parameters", |ui| {
                ui.label(format!("Population: {}", params.population_size));
                ui.label(format!("Mutation rate: {:.3}", params.mutation_rate));
                ui.label(format!("Mutation: {:?}", params.mutation_strategy));
                ui.label(format!("Elites: {}", params.elite_count));
                ui.label(format!("Tournament size: {}", params.tournament_size));
                ui.label(format!("Generation time: {:.0}s", params.generation_time));
                if let Some(seed) = params.seed {
                    ui.label(format!("Seed: {}", seed));
                }
            });

            ui.separator();
            ui.label("SPACE: make creatures jump");
            ui.label("P: pause / resume");
        });
}

fn draw_fitness_plot(ui: &mut egui::Ui, history: &[f32]) {
    if history.len() < 2 {
        ui.label("Collecting data...");
        return;
    }

    let first = history.len().saturating_sub(HISTORY_WINDOW);
    let points: PlotPoints = history[first..]
        .iter()
        .enumerate()
        .map(|(i, &best)| [(first + i + 1) as f64, f64::from(best)])
        .collect();
    let line = Line::new(points)
        .color(egui::Color32::from_rgb(100, 220, 100))
        .name("Best");

    Plot::new("fitness_plot")
        .height(150.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| {
            format!("Generation: {:.0}\nBest: {:.1}", value.x, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
