//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → MapIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks`: Klicks auf Hintergrund oder Marker
//! - `camera`: Drag-Pan und Scroll-Zoom (wirken direkt auf die View)

mod camera;
mod clicks;

use glam::DVec2;

use super::keyboard;
use crate::app::{AnnotatorState, MapIntent, MapViewState};
use crate::core::MapView;

/// Verwaltet den Input-Zustand für den Viewport.
#[derive(Default)]
pub struct InputState {
    hover_world: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { hover_world: None }
    }

    /// Weltposition unter dem Zeiger (für die Status-Bar).
    pub fn hover_world(&self) -> Option<DVec2> {
        self.hover_world
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt MapIntents zurück.
    ///
    /// Kamera-Gesten (Pan, Zoom) gehören der View und werden direkt
    /// angewendet; alles, was Marker betrifft, wird als Intent geliefert.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        view: &mut MapViewState,
        state: &AnnotatorState,
    ) -> Vec<MapIntent> {
        let mut events = Vec::new();
        view.viewport_size = glam::Vec2::new(response.rect.width(), response.rect.height());

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            state.interaction.is_confirm_pending(),
            state.palette.entries().len(),
        ));

        self.handle_pan(response, view);
        self.handle_scroll_zoom(ui, response, view, &state.options);
        self.handle_clicks(ui, response, view, &mut events);

        self.hover_world = response
            .hover_pos()
            .map(|pos| view.screen_to_world(local_pos(pos, response)));

        events
    }
}

/// Zeigerposition relativ zur linken oberen Viewport-Ecke.
pub(crate) fn local_pos(pointer_pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
