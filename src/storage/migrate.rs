//! Erkennung und Migration historischer Datensatz-Formen.
//!
//! Unversionierte Datensätze tragen keine Formatangabe. Die Form wird aus
//! dem ersten Element abgeleitet und auf alle Elemente angewendet:
//! - `[y, x]`-Paare (ältestes Format, ohne Kategorie)
//! - `{ "position": [y, x], "color": "#RRGGBB" }`
//! - `{ "lat": y, "lng": x, "type": "cave" }`

use glam::DVec2;
use serde::Deserialize;
use serde_json::Value;

use super::StoreError;
use crate::core::{world_from_yx, Category, CategoryScheme};

/// Erkannte Form eines gespeicherten Marker-Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// Rohes `[y, x]`-Koordinatenpaar
    LegacyPair,
    /// Objekt mit `position` und optionaler `color`
    ColorEntry,
    /// Objekt mit `lat`/`lng` und optionalem `type`
    IconEntry,
}

/// Bestimmt die Form eines einzelnen Elements.
pub fn detect_shape(value: &Value) -> Option<RecordShape> {
    match value {
        Value::Array(items) if items.len() == 2 && items.iter().all(Value::is_number) => {
            Some(RecordShape::LegacyPair)
        }
        Value::Object(map) if map.contains_key("position") => Some(RecordShape::ColorEntry),
        Value::Object(map) if map.contains_key("lat") && map.contains_key("lng") => {
            Some(RecordShape::IconEntry)
        }
        _ => None,
    }
}

/// Dekodiertes Element vor der ID-Vergabe.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawEntry {
    pub id: Option<u64>,
    pub position: DVec2,
    pub category: Category,
}

#[derive(Debug, Deserialize)]
struct ColorFields {
    #[serde(default)]
    id: Option<Value>,
    position: [f64; 2],
    #[serde(default)]
    color: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct IconFields {
    #[serde(default)]
    id: Option<Value>,
    lat: f64,
    lng: f64,
    #[serde(default, rename = "type")]
    kind: Option<Value>,
}

/// Migriert einen unversionierten Datensatz (JSON-Array).
///
/// Leeres Array → leere Sammlung. Unbekannte Form des ersten Elements →
/// `StoreError::Corrupt`. Einzelne Elemente, die nicht zur erkannten Form
/// passen, werden verworfen und geloggt.
pub(crate) fn migrate_unversioned(
    items: &[Value],
    scheme: CategoryScheme,
) -> Result<Vec<RawEntry>, StoreError> {
    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };

    let shape = detect_shape(first).ok_or_else(|| {
        StoreError::Corrupt(format!("unbekannte Form des ersten Elements: {first}"))
    })?;

    log::warn!(
        "Unversionierter Marker-Datensatz ({:?}, {} Elemente) wird migriert",
        shape,
        items.len()
    );

    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let entry = decode_entry(item, shape, scheme);
            if entry.is_none() {
                log::warn!(
                    "Element {} passt nicht zur Form {:?}, verworfen: {}",
                    index,
                    shape,
                    item
                );
            }
            entry
        })
        .collect())
}

/// Dekodiert ein Element einer bekannten Form.
pub(crate) fn decode_entry(
    value: &Value,
    shape: RecordShape,
    scheme: CategoryScheme,
) -> Option<RawEntry> {
    match shape {
        RecordShape::LegacyPair => {
            let pair = value.as_array()?;
            if pair.len() != 2 {
                return None;
            }
            let y = pair[0].as_f64()?;
            let x = pair[1].as_f64()?;
            Some(RawEntry {
                id: None,
                position: world_from_yx(y, x),
                category: scheme.default_category(),
            })
        }
        RecordShape::ColorEntry => {
            let fields = ColorFields::deserialize(value).ok()?;
            let [y, x] = fields.position;
            Some(RawEntry {
                id: fields.id.as_ref().and_then(Value::as_u64),
                position: world_from_yx(y, x),
                category: resolve_category(
                    fields.color.as_ref().and_then(Value::as_str),
                    CategoryScheme::Color,
                    scheme,
                ),
            })
        }
        RecordShape::IconEntry => {
            let fields = IconFields::deserialize(value).ok()?;
            Some(RawEntry {
                id: fields.id.as_ref().and_then(Value::as_u64),
                position: world_from_yx(fields.lat, fields.lng),
                category: resolve_category(
                    fields.kind.as_ref().and_then(Value::as_str),
                    CategoryScheme::Icon,
                    scheme,
                ),
            })
        }
    }
}

/// Löst die gespeicherte Kategorie auf; alles Unbekannte wird zum Default des Schemas.
fn resolve_category(
    raw: Option<&str>,
    stored_scheme: CategoryScheme,
    scheme: CategoryScheme,
) -> Category {
    let fallback = scheme.default_category();
    let Some(raw) = raw else {
        return fallback;
    };

    if stored_scheme != scheme {
        log::debug!(
            "Kategorie '{}' aus Schema {:?} im Schema {:?} nicht darstellbar, verwende {}",
            raw,
            stored_scheme,
            scheme,
            fallback
        );
        return fallback;
    }

    scheme.resolve(raw).unwrap_or_else(|| {
        log::warn!("Unbekannte Kategorie '{}', verwende {}", raw, fallback);
        fallback
    })
}
