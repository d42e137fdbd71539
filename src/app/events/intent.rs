use glam::Vec2;

use crate::core::{Category, MarkerId};

/// Zustand der Modifier-Tasten zum Zeitpunkt einer Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Keine Modifier gedrückt.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Nur Ctrl gedrückt.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// Map-Intents: Eingaben aus der Karten-View ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum MapIntent {
    /// Zeiger-Klick auf die Kartenfläche.
    ///
    /// `hit` trägt die ID der getroffenen Marker-Dekoration, falls der Klick
    /// direkt auf einem Marker lag; sonst traf er den Hintergrund.
    PointerClicked {
        screen_pos: Vec2,
        modifiers: Modifiers,
        hit: Option<MarkerId>,
    },
    /// Löschbestätigung mit "Ja" beantwortet
    DeletionConfirmed,
    /// Löschbestätigung abgebrochen
    DeletionCancelled,
    /// "Alle Marker löschen" gedrückt
    ClearAllRequested,
    /// Kategorie in der Palette gewählt
    CategorySelected { category: Category },
    /// Paletten-Eintrag per Zifferntaste gewählt (0-basiert)
    PaletteIndexSelected { index: usize },
    /// Marker aus dem Speicher (neu) laden
    MarkersLoadRequested,
}
