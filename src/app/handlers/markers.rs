//! Handler für Marker-Operationen (Laden, Anlegen, Entfernen, Leeren).

use glam::DVec2;

use crate::app::{AnnotatorState, InteractionState};
use crate::core::{Category, MapView, MarkerId};

/// Lädt alle gespeicherten Marker und rendert sie neu.
pub fn load(state: &mut AnnotatorState, view: &mut dyn MapView) {
    state.interaction = InteractionState::Idle;
    state.registry.initialize(view);
}

/// Legt einen Marker an der Weltposition an.
pub fn add(state: &mut AnnotatorState, view: &mut dyn MapView, position: DVec2, category: Category) {
    state.registry.add(position, category, view);
}

/// Entfernt einen Marker; veraltete IDs sind ein No-op.
pub fn remove(state: &mut AnnotatorState, view: &mut dyn MapView, marker_id: MarkerId) {
    state.registry.remove(marker_id, view);
}

/// Entfernt alle Marker und den gespeicherten Datensatz.
pub fn clear(state: &mut AnnotatorState, view: &mut dyn MapView) {
    state.registry.clear(view);
}
