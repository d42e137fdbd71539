//! Application State: Marker-Zustand, Interaktion und Karten-View.

mod app_state;
mod view;

pub use app_state::{AnnotatorState, InteractionState};
pub use view::{MapViewState, MarkerVisual};
