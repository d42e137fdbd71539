//! Status-Bar am unteren Bildschirmrand.

use glam::DVec2;

use crate::app::{AnnotatorState, MapViewState};
use crate::core::CategoryScheme;

/// Rendert die Status-Bar.
///
/// Gibt `true` zurück, wenn der Nutzer die Benachrichtigung geschlossen hat.
pub fn render_status_bar(
    ctx: &egui::Context,
    state: &AnnotatorState,
    view: &MapViewState,
    hover_world: Option<DVec2>,
) -> bool {
    let mut dismissed = false;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let scheme = match state.palette.scheme() {
                CategoryScheme::Color => "Farben",
                CategoryScheme::Icon => "Icons",
            };
            ui.label(format!(
                "Marker: {} | Schema: {} | Kategorie: {}",
                state.marker_count(),
                scheme,
                state.palette.current().label()
            ));

            ui.separator();

            ui.label(format!("Zoom: {:.3}x", view.camera.zoom));
            if let Some(world) = hover_world {
                ui.label(format!("[{:.0}, {:.0}]", world.y, world.x));
            }

            ui.separator();

            ui.label(format!(
                "{}+Klick: Marker setzen | Klick auf Marker: löschen",
                state.options.place_modifier.label()
            ));

            if state.registry.is_dirty() {
                ui.separator();
                ui.label(
                    egui::RichText::new("Nicht gespeichert").color(egui::Color32::LIGHT_RED),
                );
            }

            if let Some(msg) = view.notice() {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            }
        });
    });

    dismissed
}
