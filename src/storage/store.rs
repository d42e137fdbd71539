//! Marker-Speicher: liest und schreibt die Sammlung unter einem festen Key.

use super::{decode_record, encode_record, KeyValueStore, StoreError};
use crate::core::{CategoryScheme, Marker};

/// Standard-Key des Marker-Datensatzes.
pub const DEFAULT_STORAGE_KEY: &str = "bitcraftMarkers";

/// Persistiert die Marker-Sammlung als einen einzigen Datensatz.
pub struct MarkerStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
    scheme: CategoryScheme,
}

impl MarkerStore {
    /// Erstellt einen Speicher über dem Backend.
    pub fn new(
        backend: impl KeyValueStore + 'static,
        key: impl Into<String>,
        scheme: CategoryScheme,
    ) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
            scheme,
        }
    }

    /// Lädt alle Marker. Fehlt der Datensatz, ist er unlesbar oder das
    /// Backend nicht verfügbar, ergibt das eine leere Sammlung (geloggt).
    pub fn load(&self) -> Vec<Marker> {
        let payload = match self.backend.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                log::info!("Kein Marker-Datensatz unter '{}' vorhanden", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::error!("Marker-Datensatz nicht lesbar: {}", e);
                return Vec::new();
            }
        };

        match decode_record(&payload, self.scheme) {
            Ok(markers) => {
                log::info!(
                    "{} Marker aus '{}' geladen",
                    markers.len(),
                    self.key
                );
                markers
            }
            Err(e) => {
                log::error!("{}; Datensatz wird als leer behandelt", e);
                Vec::new()
            }
        }
    }

    /// Überschreibt den Datensatz mit der vollständigen Sammlung (ein Schreibvorgang).
    pub fn save(&mut self, markers: &[Marker]) -> Result<(), StoreError> {
        let payload = encode_record(markers, self.scheme)?;
        self.backend.set(&self.key, &payload)?;
        log::debug!("{} Marker gespeichert unter '{}'", markers.len(), self.key);
        Ok(())
    }

    /// Entfernt den Datensatz vollständig.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)?;
        log::debug!("Marker-Datensatz '{}' entfernt", self.key);
        Ok(())
    }

    /// Roher Inhalt des Datensatzes.
    pub fn raw_record(&self) -> Result<Option<String>, StoreError> {
        self.backend.get(&self.key)
    }

    /// Key des Datensatzes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Aktives Kategorisierungs-Schema.
    pub fn scheme(&self) -> CategoryScheme {
        self.scheme
    }
}
