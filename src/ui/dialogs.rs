//! Modaler Bestätigungsdialog für das Löschen eines Markers.

use crate::app::{AnnotatorState, MapIntent};

/// Zeigt die Löschbestätigung, solange eine aussteht.
pub fn show_delete_confirmation(ctx: &egui::Context, state: &AnnotatorState) -> Vec<MapIntent> {
    let mut events = Vec::new();

    let Some(marker_id) = state.interaction.pending_marker() else {
        return events;
    };

    egui::Window::new("Marker löschen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                match state.registry.get(marker_id) {
                    Some(marker) => {
                        let [y, x] = marker.position_yx();
                        ui.label(format!(
                            "Marker {} ({}) bei [{:.0}, {:.0}] löschen?",
                            marker.id,
                            marker.category.label(),
                            y,
                            x
                        ));
                    }
                    None => {
                        ui.label(format!("Marker {} löschen?", marker_id));
                    }
                }
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Löschen (Enter)").clicked() {
                        events.push(MapIntent::DeletionConfirmed);
                    }

                    if ui.button("Abbrechen (Esc)").clicked() {
                        events.push(MapIntent::DeletionCancelled);
                    }
                });
            });
        });

    events
}
