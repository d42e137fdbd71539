use glam::DVec2;

use crate::core::{Category, MarkerId};

/// Map-Commands: mutierende Operationen auf dem AnnotatorState.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// Marker aus dem Speicher laden und rendern
    LoadMarkers,
    /// Neuen Marker an einer Weltposition anlegen
    AddMarker { position: DVec2, category: Category },
    /// Löschbestätigung für einen Marker öffnen
    OpenDeleteConfirmation { marker_id: MarkerId },
    /// Marker entfernen
    RemoveMarker { marker_id: MarkerId },
    /// Löschbestätigung schließen
    CloseDeleteConfirmation,
    /// Alle Marker und den gespeicherten Datensatz entfernen
    ClearMarkers,
    /// Aktuelle Kategorie der Palette setzen
    SelectCategory { category: Category },
}
