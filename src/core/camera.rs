//! 2D-Kamera für Pan und Zoom über dem Kartenbild.

use glam::{DVec2, Vec2};

/// 2D-Kamera mit Pan und Zoom
///
/// `position` ist der Weltpunkt in der Viewport-Mitte, `zoom` die Anzahl
/// Screen-Pixel pro Welteinheit (1.0 = Bild in Originalgröße).
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
}

impl Camera2D {
    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan) um ein Delta in Welteinheiten
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Verschiebt die Kamera um ein Delta in Screen-Pixeln (Drag).
    pub fn pan_screen(&mut self, delta_px: Vec2) {
        self.position -= delta_px.as_dvec2() / self.zoom;
    }

    /// Ändert den Zoom-Level innerhalb der Grenzen
    pub fn zoom_by(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Zoomt so, dass `focus_world` an derselben Bildschirmstelle bleibt.
    pub fn zoom_towards(&mut self, factor: f64, focus_world: DVec2, min: f64, max: f64) {
        let old_zoom = self.zoom;
        self.zoom_by(factor, min, max);
        let ratio = old_zoom / self.zoom;
        self.position = focus_world + (self.position - focus_world) * ratio;
    }

    /// Konvertiert Screen-Koordinaten (relativ zur Viewport-Ecke) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> DVec2 {
        let centered = (screen_pos - screen_size * 0.5).as_dvec2();
        self.position + centered / self.zoom
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zur Viewport-Ecke).
    pub fn world_to_screen(&self, world_pos: DVec2, screen_size: Vec2) -> Vec2 {
        let offset = (world_pos - self.position) * self.zoom;
        offset.as_vec2() + screen_size * 0.5
    }

    /// Berechnet den Pick-Radius in Welt-Einheiten für einen Pixel-Radius.
    pub fn pick_radius_world(&self, pick_radius_px: f32) -> f64 {
        pick_radius_px as f64 / self.zoom.max(f64::EPSILON)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::shared::options::{CAMERA_ZOOM_MAX, CAMERA_ZOOM_MIN};

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(DVec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_is_clamped() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0, CAMERA_ZOOM_MIN, CAMERA_ZOOM_MAX);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(1000.0, CAMERA_ZOOM_MIN, CAMERA_ZOOM_MAX);
        assert_relative_eq!(camera.zoom, CAMERA_ZOOM_MAX);
    }

    #[test]
    fn test_screen_to_world_center() {
        let mut camera = Camera2D::new();
        camera.look_at(DVec2::new(3838.0, 3838.0));
        let screen_size = Vec2::new(800.0, 600.0);
        let world = camera.screen_to_world(Vec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, 3838.0);
        assert_relative_eq!(world.y, 3838.0);
    }

    #[test]
    fn test_world_to_screen_inverts_screen_to_world() {
        let mut camera = Camera2D::new();
        camera.position = DVec2::new(100.0, 50.0);
        camera.zoom = 4.0;
        let screen_size = Vec2::new(1280.0, 720.0);
        let screen = Vec2::new(17.0, 654.0);
        let world = camera.screen_to_world(screen, screen_size);
        let back = camera.world_to_screen(world, screen_size);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_fixed() {
        let mut camera = Camera2D::new();
        let screen_size = Vec2::new(800.0, 600.0);
        let cursor = Vec2::new(100.0, 100.0);
        let focus = camera.screen_to_world(cursor, screen_size);

        camera.zoom_towards(2.0, focus, CAMERA_ZOOM_MIN, CAMERA_ZOOM_MAX);

        let after = camera.screen_to_world(cursor, screen_size);
        assert_relative_eq!(after.x, focus.x, epsilon = 1e-6);
        assert_relative_eq!(after.y, focus.y, epsilon = 1e-6);
    }

    #[test]
    fn test_pan_screen_moves_opposite_to_drag() {
        let mut camera = Camera2D::new();
        camera.zoom = 2.0;
        camera.pan_screen(Vec2::new(20.0, -10.0));
        assert_relative_eq!(camera.position.x, -10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }
}
