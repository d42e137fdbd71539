//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Marker-Zustand, Interaktionszustand und die headless Karten-View.
pub mod state;

pub use command_log::CommandLog;
pub use controller::InteractionController;
pub use events::{MapCommand, MapIntent, Modifiers};
pub use state::{AnnotatorState, InteractionState, MapViewState, MarkerVisual};
