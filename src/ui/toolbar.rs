//! Toolbar: Kategorie-Palette, Zoom-Buttons und "Alle Marker löschen".

use super::canvas::swatch_color;
use crate::app::{AnnotatorState, MapIntent, MapViewState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Zoom-Buttons wirken direkt auf die View.
pub fn render_toolbar(
    ctx: &egui::Context,
    state: &AnnotatorState,
    view: &mut MapViewState,
) -> Vec<MapIntent> {
    let mut events = Vec::new();
    let current = state.palette.current();
    let blocked = state.interaction.is_confirm_pending();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Kategorie:");
            ui.separator();

            for (index, &category) in state.palette.entries().iter().enumerate() {
                let swatch = egui::RichText::new("⏺").color(swatch_color(category.decoration()));
                ui.label(swatch);
                let label = format!("{} ({})", category.label(), index + 1);
                let button = egui::Button::new(label).selected(category == current);
                if ui.add_enabled(!blocked, button).clicked() {
                    events.push(MapIntent::CategorySelected { category });
                }
            }

            ui.separator();

            if ui.button("➕").on_hover_text("Hineinzoomen").clicked() {
                view.zoom_step(state.options.camera_zoom_step, &state.options);
            }
            if ui.button("➖").on_hover_text("Herauszoomen").clicked() {
                view.zoom_step(1.0 / state.options.camera_zoom_step, &state.options);
            }
            if ui.button("Ansicht zurücksetzen").clicked() {
                view.reset_camera();
            }

            let count = state.marker_count();
            if count > 0 {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clear = ui.add_enabled(
                        !blocked,
                        egui::Button::new(format!("Clear All Markers ({count})")),
                    );
                    if clear.clicked() {
                        events.push(MapIntent::ClearAllRequested);
                    }
                });
            }
        });
    });

    events
}
