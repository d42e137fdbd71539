//! Kartenbild-Loader für das Overlay hinter den Markern.

use anyhow::{Context, Result};
use glam::DVec2;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::BufReader;
use std::path::Path;

/// Kartenbild, gestreckt auf die Weltgrenzen `[0, 0]..[width, height]`.
pub struct BackgroundMap {
    /// Bilddaten
    image_data: DynamicImage,
    /// Ausdehnung in Welteinheiten (x = Spalten, y = Zeilen)
    world_size: DVec2,
}

impl BackgroundMap {
    /// Lädt ein Kartenbild aus einer Datei.
    ///
    /// Unterstützte Formate: PNG, JPG, JPEG. Schlägt die Erkennung über die
    /// Dateiendung fehl, wird das Format über den Dateiinhalt bestimmt.
    pub fn load_from_file(path: &Path, world_size: DVec2) -> Result<Self> {
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    path.display(),
                    ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Datei nicht gefunden: {}", path.display()))?;
                ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| {
                        format!("Format-Erkennung fehlgeschlagen für: {}", path.display())
                    })?
                    .decode()
                    .with_context(|| {
                        format!("Fehler beim Dekodieren des Kartenbilds: {}", path.display())
                    })?
            }
        };

        Ok(Self::from_image(image, world_size))
    }

    /// Erstellt ein Kartenbild aus einem bereits dekodierten Bild.
    pub fn from_image(image: DynamicImage, world_size: DVec2) -> Self {
        let (width, height) = image.dimensions();
        log::info!(
            "Kartenbild geladen: {}x{} Pixel, Welt {:.0}x{:.0}",
            width,
            height,
            world_size.x,
            world_size.y
        );
        Self {
            image_data: image,
            world_size,
        }
    }

    /// Verkleinert das Bild, falls eine Seite `max_side` überschreitet
    /// (GPU-Texturlimit). Die Weltgrenzen bleiben unverändert.
    pub fn fit_to_texture_limit(self, max_side: u32) -> Self {
        let (width, height) = self.image_data.dimensions();
        if width <= max_side && height <= max_side {
            return self;
        }
        log::warn!(
            "Kartenbild {}x{} überschreitet Texturlimit {}, wird verkleinert",
            width,
            height,
            max_side
        );
        let image_data =
            self.image_data
                .resize(max_side, max_side, image::imageops::FilterType::Triangle);
        Self {
            image_data,
            world_size: self.world_size,
        }
    }

    /// Pixelgröße `[width, height]` und RGBA8-Daten (für den Textur-Upload).
    pub fn to_rgba8(&self) -> ([usize; 2], Vec<u8>) {
        let rgba = self.image_data.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        (size, rgba.into_raw())
    }

    /// Gibt die Dimensionen des Bildes zurück
    pub fn dimensions(&self) -> (u32, u32) {
        self.image_data.dimensions()
    }

    /// Ausdehnung in Welteinheiten.
    pub fn world_size(&self) -> DVec2 {
        self.world_size
    }
}
