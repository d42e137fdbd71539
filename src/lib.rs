//! BitCraft Map Editor Library.
//! Marker-Kern, Speicher und Application-Layer als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod storage;
pub mod ui;

pub use app::{
    AnnotatorState, InteractionController, InteractionState, MapCommand, MapIntent, MapViewState,
    Modifiers,
};
pub use core::{
    world_from_yx, Category, CategoryPalette, CategoryScheme, Decoration, IconType, MapView,
    Marker, MarkerColor, MarkerId, MarkerRegistry,
};
pub use core::{BackgroundMap, Camera2D, MarkerHitIndex};
pub use shared::{AnnotatorOptions, PlaceModifier};
pub use storage::{FileStore, KeyValueStore, MarkerStore, MemoryStore, StoreError};
