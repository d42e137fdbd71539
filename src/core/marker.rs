//! Persistenter Punkt-Marker auf der Weltkarte.

use super::Category;
use glam::DVec2;
use std::fmt;

/// Stabile, eindeutige Marker-Identität (bleibt über Speichern/Laden erhalten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repräsentiert einen Marker auf dem Kartenbild.
///
/// `position` liegt im Bild-/Weltraum: `x` = Bildspalte, `y` = Bildzeile.
/// Die persistierten Felder `lat`/`lng` entsprechen `y`/`x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Eindeutige ID
    pub id: MarkerId,
    /// Position in Weltkoordinaten
    pub position: DVec2,
    /// Dekorations-Kategorie
    pub category: Category,
}

impl Marker {
    /// Erstellt einen neuen Marker
    pub fn new(id: MarkerId, position: DVec2, category: Category) -> Self {
        Self {
            id,
            position,
            category,
        }
    }

    /// Position als `[y, x]`-Paar (Zeile, Spalte), wie sie gespeichert wird.
    pub fn position_yx(&self) -> [f64; 2] {
        [self.position.y, self.position.x]
    }
}

/// Baut eine Weltposition aus Zeile (`y`) und Spalte (`x`).
pub fn world_from_yx(y: f64, x: f64) -> DVec2 {
    DVec2::new(x, y)
}
