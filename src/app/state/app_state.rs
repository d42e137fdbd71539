use crate::app::CommandLog;
use crate::core::{CategoryPalette, MarkerId, MarkerRegistry};
use crate::shared::AnnotatorOptions;
use crate::storage::{FileStore, KeyValueStore, MarkerStore};

/// Grober Zustand der Interaktion mit der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Keine Geste offen
    #[default]
    Idle,
    /// Löschbestätigung für genau einen Marker offen (modal)
    ConfirmPending { marker_id: MarkerId },
}

impl InteractionState {
    /// Marker, dessen Löschung gerade bestätigt werden soll.
    pub fn pending_marker(&self) -> Option<MarkerId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::ConfirmPending { marker_id } => Some(*marker_id),
        }
    }

    /// Gibt `true` zurück, wenn eine Bestätigung aussteht.
    pub fn is_confirm_pending(&self) -> bool {
        matches!(self, InteractionState::ConfirmPending { .. })
    }
}

/// Hauptzustand des Annotators
pub struct AnnotatorState {
    /// Maßgebliche Marker-Sammlung inkl. Speicher
    pub registry: MarkerRegistry,
    /// Aktuell gewählte Kategorie für neue Marker
    pub palette: CategoryPalette,
    /// Idle / Löschbestätigung offen
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AnnotatorOptions,
}

impl AnnotatorState {
    /// Erstellt den Zustand über einem beliebigen Key-Value-Backend.
    /// Die Marker sind danach noch nicht geladen (`MapCommand::LoadMarkers`).
    pub fn new(options: AnnotatorOptions, backend: impl KeyValueStore + 'static) -> Self {
        let store = MarkerStore::new(backend, options.storage_key.clone(), options.scheme);
        Self {
            registry: MarkerRegistry::new(store),
            palette: CategoryPalette::new(options.scheme),
            interaction: InteractionState::Idle,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Erstellt den Zustand mit Datei-Speicher im konfigurierten Verzeichnis.
    pub fn with_file_store(options: AnnotatorOptions) -> Self {
        let dir = options.resolved_storage_dir();
        log::info!("Marker-Speicher: {}", dir.display());
        Self::new(options, FileStore::new(dir))
    }

    /// Anzahl der Marker (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.registry.len()
    }
}
