//! Schnittstelle zur Karten-View (Kollaborateur des Marker-Kerns).
//!
//! Die View besitzt Kamera, Kartenbild und die gerenderten Dekorationen.
//! Sie wird vom Host explizit an Registry und Controller übergeben.

use glam::{DVec2, Vec2};

use super::{Decoration, Marker, MarkerId};

/// Karten-Widget, das Marker darstellt und Screen↔Welt umrechnet.
pub trait MapView {
    /// Rechnet eine Viewport-Position (Pixel relativ zur Viewport-Ecke) in Weltkoordinaten um.
    fn screen_to_world(&self, screen_pos: Vec2) -> DVec2;

    /// Rendert (oder ersetzt) die Dekoration eines Markers inklusive Lösch-Geste.
    fn render_marker(&mut self, marker: &Marker, decoration: Decoration);

    /// Entfernt die Dekoration eines Markers. Unbekannte IDs sind ein No-op.
    fn remove_marker(&mut self, id: MarkerId);

    /// Zeigt eine nicht-fatale Benachrichtigung (z.B. Speicherfehler).
    fn notify(&mut self, message: &str);
}
