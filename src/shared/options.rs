//! Zentrale Konfiguration für den BitCraft Map Editor.
//!
//! `AnnotatorOptions` enthält alle beim Start gelesenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::CategoryScheme;

// ── Kartenbild ──────────────────────────────────────────────────────

/// Standardpfad des Kartenbilds (relativ zum Arbeitsverzeichnis).
pub const MAP_IMAGE_PATH: &str = "assets/map.png";
/// Breite des Kartenbilds in Welteinheiten (Pixel).
pub const IMAGE_WIDTH: u32 = 7676;
/// Höhe des Kartenbilds in Welteinheiten (Pixel).
pub const IMAGE_HEIGHT: u32 = 7676;
/// Hintergrundfarbe außerhalb des Kartenbilds (RGBA: #222D44).
pub const BACKGROUND_COLOR: [f32; 4] = [0.133, 0.176, 0.267, 1.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor (Screen-Pixel pro Welteinheit).
pub const CAMERA_ZOOM_MIN: f64 = 0.125;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 32.0;
/// Zoom-Schritt der Zoom-Buttons (eine Zoomstufe).
pub const CAMERA_ZOOM_STEP: f64 = 2.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Marker ──────────────────────────────────────────────────────────

/// Marker-Radius in Welteinheiten.
pub const MARKER_RADIUS_WORLD: f32 = 7.0;
/// Outline-Farbe der Marker (RGBA: Schwarz).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Deckkraft der Marker-Füllung.
pub const MARKER_FILL_OPACITY: f32 = 0.5;
/// Minimaler Klick-Radius in Screen-Pixeln (kleine Zoomstufen).
pub const MARKER_PICK_RADIUS_PX: f32 = 6.0;

// ── Speicher ────────────────────────────────────────────────────────

/// Standardverzeichnis des Marker-Speichers (neben der Binary).
pub const STORAGE_DIR: &str = "bitcraft_markers";

/// Modifier-Taste, die beim Klick einen neuen Marker setzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceModifier {
    #[default]
    Ctrl,
    Shift,
    Alt,
}

impl PlaceModifier {
    /// Anzeigename für Status-Bar und Hinweise.
    pub fn label(self) -> &'static str {
        match self {
            PlaceModifier::Ctrl => "Ctrl",
            PlaceModifier::Shift => "Shift",
            PlaceModifier::Alt => "Alt",
        }
    }
}

/// Alle Laufzeit-Optionen des Editors.
/// Wird als `bitcraft_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorOptions {
    // ── Marker-Kategorien ───────────────────────────────────────
    /// Aktives Kategorisierungs-Schema (`color` oder `icon`)
    pub scheme: CategoryScheme,
    /// Modifier zum Setzen neuer Marker
    pub place_modifier: PlaceModifier,

    // ── Speicher ────────────────────────────────────────────────
    /// Verzeichnis des Datei-Speichers (relativ = neben der Binary)
    pub storage_dir: PathBuf,
    /// Key des Marker-Datensatzes
    pub storage_key: String,

    // ── Kartenbild ──────────────────────────────────────────────
    pub map_image_path: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    pub background_color: [f32; 4],

    // ── Marker-Darstellung ──────────────────────────────────────
    pub marker_radius_world: f32,
    pub marker_outline_color: [f32; 4],
    pub marker_fill_opacity: f32,
    pub marker_pick_radius_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    pub camera_zoom_min: f64,
    pub camera_zoom_max: f64,
    pub camera_zoom_step: f64,
    pub camera_scroll_zoom_step: f64,
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        Self {
            scheme: CategoryScheme::default(),
            place_modifier: PlaceModifier::default(),

            storage_dir: PathBuf::from(STORAGE_DIR),
            storage_key: crate::storage::DEFAULT_STORAGE_KEY.to_string(),

            map_image_path: PathBuf::from(MAP_IMAGE_PATH),
            image_width: IMAGE_WIDTH,
            image_height: IMAGE_HEIGHT,
            background_color: BACKGROUND_COLOR,

            marker_radius_world: MARKER_RADIUS_WORLD,
            marker_outline_color: MARKER_OUTLINE_COLOR,
            marker_fill_opacity: MARKER_FILL_OPACITY,
            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl AnnotatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt die Datei oder ist sie
    /// fehlerhaft, werden die Standardwerte verwendet.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Konfigurationsdatei neben der Binary.
    pub fn config_path() -> PathBuf {
        binary_dir().join("bitcraft_map_editor.toml")
    }

    /// Speicherverzeichnis; relative Pfade liegen neben der Binary.
    pub fn resolved_storage_dir(&self) -> PathBuf {
        if self.storage_dir.is_absolute() {
            self.storage_dir.clone()
        } else {
            binary_dir().join(&self.storage_dir)
        }
    }

    /// Weltgröße des Kartenbilds (`x` = Breite, `y` = Höhe).
    pub fn world_size(&self) -> glam::DVec2 {
        glam::DVec2::new(self.image_width as f64, self.image_height as f64)
    }
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let opts: AnnotatorOptions =
            toml::from_str("scheme = \"icon\"\nplace_modifier = \"shift\"\n")
                .expect("TOML sollte parsebar sein");

        assert_eq!(opts.scheme, CategoryScheme::Icon);
        assert_eq!(opts.place_modifier, PlaceModifier::Shift);
        assert_eq!(opts.storage_key, "bitcraftMarkers");
        assert_eq!(opts.image_width, IMAGE_WIDTH);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let opts: AnnotatorOptions =
            toml::from_str("legacy_flag = true\n").expect("unbekannte Keys ignorieren");
        assert_eq!(opts, AnnotatorOptions::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("bitcraft_options_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let path = dir.join("options.toml");

        let opts = AnnotatorOptions {
            scheme: CategoryScheme::Icon,
            marker_radius_world: 12.0,
            ..AnnotatorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern");

        assert_eq!(AnnotatorOptions::load_from_file(&path), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = std::env::temp_dir().join(format!("bitcraft_options_bad_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let path = dir.join("options.toml");
        std::fs::write(&path, "scheme = [").expect("Schreiben");

        assert_eq!(AnnotatorOptions::load_from_file(&path), AnnotatorOptions::default());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
