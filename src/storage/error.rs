//! Fehler der Persistenzschicht.

/// Fehler beim Lesen oder Schreiben des Marker-Datensatzes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Speicher nicht verfügbar (Rechte, Quota, I/O).
    #[error("Speicher für '{key}' nicht verfügbar: {source}")]
    Unavailable {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// Datensatz nicht lesbar oder unbekannte Form.
    #[error("Marker-Datensatz beschädigt: {0}")]
    Corrupt(String),
    /// Serialisierung fehlgeschlagen.
    #[error("Marker-Datensatz konnte nicht serialisiert werden: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn unavailable(key: &str, source: std::io::Error) -> Self {
        Self::Unavailable {
            key: key.to_string(),
            source,
        }
    }
}
