//! Core-Domänentypen: Marker, Kategorien, Registry, Kamera, Hit-Index.

pub mod background_map;
pub mod camera;
pub mod category;
pub mod hit_index;
pub mod marker;
pub mod palette;
pub mod registry;
pub mod view;

pub use background_map::BackgroundMap;
pub use camera::Camera2D;
pub use category::{Category, CategoryScheme, Decoration, IconType, MarkerColor};
pub use hit_index::MarkerHitIndex;
pub use marker::{world_from_yx, Marker, MarkerId};
pub use palette::CategoryPalette;
pub use registry::MarkerRegistry;
pub use view::MapView;
