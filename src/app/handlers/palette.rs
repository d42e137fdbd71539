//! Handler für die Kategorie-Palette.

use crate::app::AnnotatorState;
use crate::core::Category;

/// Setzt die Kategorie für neue Marker.
pub fn select_category(state: &mut AnnotatorState, category: Category) {
    state.palette.select(category);
}
