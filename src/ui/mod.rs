//! UI-Komponenten: Karten-Canvas, Toolbar, Status-Bar, Input-Handling, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod status;
pub mod toolbar;

pub use canvas::paint_map;
pub use dialogs::show_delete_confirmation;
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Konvertiert eine RGBA-Farbe (0.0..1.0) in eine egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
