//! Klick-Events: Treffer auf Marker oder Hintergrund.

use super::{local_pos, InputState};
use crate::app::{MapIntent, MapViewState, Modifiers};

impl InputState {
    /// Erzeugt für einen primären Klick einen `PointerClicked`-Intent.
    ///
    /// Der Treffer-Test läuft hier, damit der Controller Marker-Treffer
    /// vor dem Setzen neuer Marker behandeln kann.
    pub(crate) fn handle_clicks(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        view: &mut MapViewState,
        events: &mut Vec<MapIntent>,
    ) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = response.interact_pointer_pos() else {
            return;
        };

        let screen_pos = local_pos(pointer_pos, response);
        let modifiers = ui.input(|i| Modifiers {
            ctrl: i.modifiers.ctrl || i.modifiers.mac_cmd,
            shift: i.modifiers.shift,
            alt: i.modifiers.alt,
        });

        events.push(MapIntent::PointerClicked {
            screen_pos,
            modifiers,
            hit: view.hit_test(screen_pos),
        });
    }
}
