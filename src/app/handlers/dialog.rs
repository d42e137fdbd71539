//! Handler für die Löschbestätigung.

use crate::app::{AnnotatorState, InteractionState};
use crate::core::MarkerId;

/// Öffnet die Löschbestätigung für einen Marker.
///
/// Nur aus `Idle` heraus; unbekannte Marker öffnen keinen Dialog.
pub fn open_delete_confirmation(state: &mut AnnotatorState, marker_id: MarkerId) {
    if let Some(pending) = state.interaction.pending_marker() {
        log::debug!(
            "Bestätigung für Marker {} offen, Anfrage für {} ignoriert",
            pending,
            marker_id
        );
        return;
    }
    if !state.registry.contains(marker_id) {
        log::debug!("Marker {} existiert nicht (mehr), keine Bestätigung", marker_id);
        return;
    }
    state.interaction = InteractionState::ConfirmPending { marker_id };
}

/// Schließt die Löschbestätigung (Rückkehr nach `Idle`).
pub fn close_delete_confirmation(state: &mut AnnotatorState) {
    state.interaction = InteractionState::Idle;
}
