use climbers::simulation::event_log::EventKind;
use climbers::simulation::world::World;
use egui_macroquad::egui::{self, Color32, RichText};

fn kind_color(kind: EventKind) -> Color32 {
    match kind {
        EventKind::Extinction => Color32::from_rgb(255, 100, 100),
        EventKind::Timeout => Color32::from_rgb(255, 200, 100),
        EventKind::Generation => Color32::from_rgb(100, 255, 100),
        EventKind::Jump => Color32::from_rgb(100, 200, 255),
        EventKind::Pause => Color32::from_rgb(150, 150, 150),
    }
}

/// Bottom strip with the generation outcome totals and the latest events.
pub(super) fn draw_events_panel(egui_ctx: &egui::Context, world: &World) {
    let log = &world.event_log;

    egui::TopBottomPanel::bottom("events_panel")
        .resizable(true)
        .default_height(160.0)
        .frame(
            egui::Frame::side_top_panel(&egui_ctx.style())
                .fill(Color32::from_rgba_premultiplied(20, 20, 30, 220)),
        )
        .show(egui_ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Recent Events");
                ui.separator();
                ui.label(
                    RichText::new(format!("extinctions: {}", log.extinctions()))
                        .color(kind_color(EventKind::Extinction)),
                );
                ui.label(
                    RichText::new(format!("timeouts: {}", log.timeouts()))
                        .color(kind_color(EventKind::Timeout)),
                );
            });
            ui.separator();

            if log.is_empty() {
                ui.label(RichText::new("No events yet...").color(Color32::GRAY));
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("events_grid")
                    .striped(true)
                    .num_columns(3)
                    .show(ui, |ui| {
                        for event in log.iter() {
                            ui.monospace(format!("gen {}", event.generation));
                            ui.monospace(format!("{:>7.1}s", event.time));
                            ui.label(
                                RichText::new(&event.message)
                                    .color(kind_color(event.kind))
                                    .size(12.0),
                            );
                            ui.end_row();
                        }
                    });
            });
        });
}
