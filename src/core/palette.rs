//! Aktuell gewählte Marker-Kategorie für neue Marker.

use super::{Category, CategoryScheme};

/// Hält die aktuell gewählte Kategorie. Nicht persistent: nach Neustart
/// steht die Palette wieder auf dem ersten Eintrag des Schemas.
#[derive(Debug, Clone)]
pub struct CategoryPalette {
    scheme: CategoryScheme,
    current: Category,
}

impl CategoryPalette {
    /// Erstellt eine Palette für das Schema (Auswahl = erster Eintrag).
    pub fn new(scheme: CategoryScheme) -> Self {
        Self {
            scheme,
            current: scheme.default_category(),
        }
    }

    /// Wählt eine Kategorie. Gibt `false` zurück, wenn sie nicht zum
    /// aktiven Schema gehört; die bisherige Auswahl bleibt dann bestehen.
    pub fn select(&mut self, category: Category) -> bool {
        if !self.scheme.contains(category) {
            log::warn!(
                "Kategorie {} gehört nicht zum Schema {:?}, Auswahl unverändert",
                category,
                self.scheme
            );
            return false;
        }
        self.current = category;
        log::debug!("Kategorie gewählt: {}", category);
        true
    }

    /// Wählt den n-ten Paletten-Eintrag (0-basiert).
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.entries().get(index) {
            Some(&category) => self.select(category),
            None => false,
        }
    }

    /// Aktuell gewählte Kategorie.
    pub fn current(&self) -> Category {
        self.current
    }

    /// Aktives Schema.
    pub fn scheme(&self) -> CategoryScheme {
        self.scheme
    }

    /// Alle wählbaren Einträge.
    pub fn entries(&self) -> &'static [Category] {
        self.scheme.palette()
    }
}
