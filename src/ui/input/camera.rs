//! Drag-Pan und Scroll-Zoom auf die Zeigerposition.

use super::{local_pos, InputState};
use crate::app::MapViewState;
use crate::shared::AnnotatorOptions;

impl InputState {
    /// Verschiebt die Karte beim Ziehen (beliebige Maustaste).
    pub(crate) fn handle_pan(&self, response: &egui::Response, view: &mut MapViewState) {
        if !response.dragged() {
            return;
        }
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            view.pan_pixels(glam::Vec2::new(delta.x, delta.y));
        }
    }

    /// Zoomt per Mausrad auf die aktuelle Zeigerposition.
    pub(crate) fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        view: &mut MapViewState,
        options: &AnnotatorOptions,
    ) {
        let Some(hover_pos) = response.hover_pos() else {
            return;
        };
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        view.zoom_at(factor, local_pos(hover_pos, response), options);
    }
}
