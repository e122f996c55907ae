use climbers::simulation::params::{MutationStrategy, Params};
use egui_macroquad::egui;
use macroquad::prelude::*;

pub fn draw_genesis_screen(params: &mut Params, status: Option<&str>) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_simulation = false;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Climbers - Configuration");
                ui.add_space(10.0);

                ui.collapsing("Population", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.population_size, 3..=400)
                            .text("Population Size"),
                    );
                    ui.add(egui::Slider::new(&mut params.elite_count, 0..=10).text("Elites"));
                    ui.add(
                        egui::Slider::new(&mut params.tournament_size, 1..=10)
                            .text("Tournament Size"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.spawn_spacing, 5.0..=60.0)
                            .text("Spawn Spacing"),
                    );
                });

                ui.collapsing("Mutation", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.mutation_rate, 0.0..=1.0)
                            .text("Mutation Rate"),
                    );
                    ui.horizontal(|ui| {
                        ui.label("Operator:");
                        ui.radio_value(
                            &mut params.mutation_strategy,
                            MutationStrategy::CrossGene,
                            "Cross-gene formula",
                        );
                        ui.radio_value(
                            &mut params.mutation_strategy,
                            MutationStrategy::Perturb,
                            "Clamped random walk",
                        );
                    });
                });

                ui.collapsing("World", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.world_width, 300.0..=3000.0)
                            .text("World Width"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.world_height, 300.0..=2000.0)
                            .text("World Height"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.ground_y, 100.0..=2000.0).text("Ground Y"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.generation_time, 1.0..=60.0)
                            .text("Generation Time (s)"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.target_margin, 0.0..=200.0)
                            .text("Target Margin"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.target_y, 0.0..=500.0).text("Target Height"),
                    );
                });

                ui.collapsing("Random Seed", |ui| {
                    let mut fixed = params.seed.is_some();
                    ui.checkbox(&mut fixed, "Reproducible run");
                    if fixed {
                        let mut seed = params.seed.unwrap_or(0);
                        ui.add(egui::DragValue::new(&mut seed));
                        params.seed = Some(seed);
                    } else {
                        params.seed = None;
                    }
                });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(10.0);

                if let Some(msg) = status {
                    ui.colored_label(egui::Color32::from_rgb(200, 40, 40), msg);
                }

                ui.horizontal(|ui| {
                    if ui.button("Start Simulation").clicked() {
                        start_simulation = true;
                    }
                    ui.label("Configure parameters above, then click to start");
                });
            });
        });
    });

    egui_macroquad::draw();

    start_simulation
}
