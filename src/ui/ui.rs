use climbers::simulation::world::World;
use egui_macroquad::egui;

/// Number of generations shown in the fitness plot.
pub const HISTORY_WINDOW: usize = 50;

pub struct UIState {
    pub stats_panel_width: f32,
    pub reset_requested: bool,
    pub status_message: Option<String>,
    pub steps_per_frame: usize,
    pub rendering_enabled: bool,
    pub show_events: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 280.0,
            reset_requested: false,
            status_message: None,
            steps_per_frame: 1,
            rendering_enabled: true,
            show_events: true,
        }
    }
}

pub fn draw_ui(state: &mut UIState, world: &World) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, world);

        if state.show_events {
            super::events::draw_events_panel(egui_ctx, world);
        }

        if world.is_paused() {
            egui::Area::new(egui::Id::new("pause_banner"))
                .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 40.0))
                .show(egui_ctx, |ui| {
                    ui.label(
                        egui::RichText::new("PAUSED")
                            .size(32.0)
                            .color(egui::Color32::from_rgb(255, 60, 60)),
                    );
                });
        }
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
