//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die `app`, `ui` und `main` teilen.

pub mod options;

pub use options::{AnnotatorOptions, PlaceModifier};
