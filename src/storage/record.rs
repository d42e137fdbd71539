//! Versioniertes Datensatzformat des Marker-Speichers.
//!
//! Geschrieben wird immer der versionierte Umschlag:
//!
//! ```json
//! { "version": 1, "scheme": "icon",
//!   "markers": [ { "id": 1, "lat": 100.0, "lng": 200.0, "type": "cave" } ] }
//! ```
//!
//! Im Farb-Schema tragen die Einträge `position: [y, x]` und `color`.
//! Unversionierte Datensätze (bare JSON-Arrays) werden nur gelesen.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::migrate::{decode_entry, detect_shape, migrate_unversioned, RawEntry};
use super::StoreError;
use crate::core::{Category, CategoryScheme, Marker, MarkerId};

/// Aktuelle Formatversion.
pub const RECORD_VERSION: u32 = 1;

#[derive(Serialize)]
struct ColorEntryOut<'a> {
    id: u64,
    position: [f64; 2],
    color: &'a str,
}

#[derive(Serialize)]
struct IconEntryOut<'a> {
    id: u64,
    lat: f64,
    lng: f64,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EntryOut<'a> {
    Color(ColorEntryOut<'a>),
    Icon(IconEntryOut<'a>),
}

#[derive(Serialize)]
struct RecordOut<'a> {
    version: u32,
    scheme: CategoryScheme,
    markers: Vec<EntryOut<'a>>,
}

#[derive(Deserialize)]
struct RecordIn {
    version: u32,
    #[serde(default)]
    scheme: Option<CategoryScheme>,
    #[serde(default)]
    markers: Vec<Value>,
}

/// Serialisiert die vollständige Marker-Sammlung im aktuellen Format.
pub fn encode_record(markers: &[Marker], scheme: CategoryScheme) -> Result<String, StoreError> {
    let entries = markers
        .iter()
        .map(|marker| {
            let category = scheme.coerce(marker.category);
            let [y, x] = marker.position_yx();
            match category {
                Category::Color(color) => EntryOut::Color(ColorEntryOut {
                    id: marker.id.0,
                    position: [y, x],
                    color: color.hex(),
                }),
                Category::Icon(icon) => EntryOut::Icon(IconEntryOut {
                    id: marker.id.0,
                    lat: y,
                    lng: x,
                    kind: icon.as_str(),
                }),
            }
        })
        .collect();

    let record = RecordOut {
        version: RECORD_VERSION,
        scheme,
        markers: entries,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Dekodiert einen gespeicherten Datensatz (versioniert oder historisch).
///
/// Leerer Inhalt und `null` ergeben eine leere Sammlung. Nicht parsebare
/// Inhalte, unbekannte Versionen und unbekannte Formen ergeben
/// `StoreError::Corrupt`.
pub fn decode_record(payload: &str, scheme: CategoryScheme) -> Result<Vec<Marker>, StoreError> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(payload).map_err(|e| StoreError::Corrupt(e.to_string()))?;

    let entries = match value {
        Value::Null => Vec::new(),
        Value::Array(items) => migrate_unversioned(&items, scheme)?,
        Value::Object(map) if map.contains_key("version") => {
            decode_versioned(Value::Object(map), scheme)?
        }
        other => {
            return Err(StoreError::Corrupt(format!(
                "unerwartete Wurzel des Datensatzes: {other}"
            )))
        }
    };

    Ok(assign_ids(entries))
}

fn decode_versioned(value: Value, scheme: CategoryScheme) -> Result<Vec<RawEntry>, StoreError> {
    let record =
        RecordIn::deserialize(value).map_err(|e| StoreError::Corrupt(e.to_string()))?;

    if record.version != RECORD_VERSION {
        return Err(StoreError::Corrupt(format!(
            "unbekannte Formatversion {} (unterstützt: {})",
            record.version, RECORD_VERSION
        )));
    }

    if let Some(stored) = record.scheme.filter(|stored| *stored != scheme) {
        log::warn!(
            "Datensatz im Schema {:?} gespeichert, aktiv ist {:?}: Kategorien fallen auf {} zurück",
            stored,
            scheme,
            scheme.default_category()
        );
    }

    Ok(record
        .markers
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let entry = detect_shape(item).and_then(|shape| decode_entry(item, shape, scheme));
            if entry.is_none() {
                log::warn!("Marker-Eintrag {} unlesbar, verworfen: {}", index, item);
            }
            entry
        })
        .collect())
}

/// Vergibt fehlende und doppelte IDs.
///
/// Die erste Vorkommnis einer ID behält sie; spätere Duplikate und Einträge
/// ohne ID erhalten fortlaufend die kleinste freie ID ab 1.
fn assign_ids(entries: Vec<RawEntry>) -> Vec<Marker> {
    let mut seen = HashSet::new();
    let keeps_id: Vec<bool> = entries
        .iter()
        .map(|entry| entry.id.is_some_and(|id| seen.insert(id)))
        .collect();

    let mut next_id = 1;
    entries
        .into_iter()
        .zip(keeps_id)
        .map(|(entry, keep)| {
            let id = match entry.id {
                Some(id) if keep => id,
                _ => {
                    while seen.contains(&next_id) {
                        next_id += 1;
                    }
                    seen.insert(next_id);
                    next_id
                }
            };
            Marker::new(MarkerId(id), entry.position, entry.category)
        })
        .collect()
}
