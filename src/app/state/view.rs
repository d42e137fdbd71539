use glam::{DVec2, Vec2};
use indexmap::IndexMap;
use std::path::Path;
use std::sync::Arc;

use crate::core::{
    BackgroundMap, Camera2D, Category, Decoration, MapView, Marker, MarkerHitIndex, MarkerId,
};
use crate::shared::AnnotatorOptions;

/// Gerenderte Dekoration eines Markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerVisual {
    /// Weltposition
    pub position: DVec2,
    /// Aufgelöste Darstellung (Kreisfarbe oder Icon)
    pub decoration: Decoration,
    /// Kategorie hinter der Dekoration (Rückwärts-Zuordnung)
    pub category: Category,
}

/// View-bezogener Zustand der Karte: Kamera, Kartenbild, Marker-Dekorationen.
///
/// Implementiert [`MapView`] ohne GUI-Abhängigkeit; die egui-Schicht liest
/// nur daraus und zeichnet.
pub struct MapViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: Vec2,
    /// Kartenbild (optional; fehlt es, wird nur die Hintergrundfarbe gezeichnet)
    pub background_map: Option<Arc<BackgroundMap>>,
    /// Signalisiert, dass das Kartenbild neu als Textur hochgeladen werden muss
    pub background_dirty: bool,
    world_size: DVec2,
    visuals: IndexMap<MarkerId, MarkerVisual>,
    hit_index: MarkerHitIndex,
    hit_index_dirty: bool,
    marker_radius_world: f64,
    pick_radius_px: f32,
    notice: Option<String>,
}

impl MapViewState {
    /// Erstellt die View für ein Kartenbild der konfigurierten Weltgröße,
    /// zentriert auf die Bildmitte.
    pub fn new(options: &AnnotatorOptions) -> Self {
        let mut view = Self {
            camera: Camera2D::new(),
            viewport_size: Vec2::ZERO,
            background_map: None,
            background_dirty: false,
            world_size: options.world_size(),
            visuals: IndexMap::new(),
            hit_index: MarkerHitIndex::empty(),
            hit_index_dirty: false,
            marker_radius_world: options.marker_radius_world as f64,
            pick_radius_px: options.marker_pick_radius_px,
            notice: None,
        };
        view.reset_camera();
        view
    }

    /// Kamera auf die Bildmitte `[h/2, w/2]` mit Zoom 1.0 setzen.
    pub fn reset_camera(&mut self) {
        self.camera = Camera2D::new();
        self.camera.look_at(self.world_size * 0.5);
    }

    /// Weltgröße des Kartenbilds.
    pub fn world_size(&self) -> DVec2 {
        self.world_size
    }

    /// Lädt das Kartenbild; Fehler werden an den Aufrufer gereicht.
    pub fn load_background(&mut self, path: &Path, max_texture_side: u32) -> anyhow::Result<()> {
        let map = BackgroundMap::load_from_file(path, self.world_size)?
            .fit_to_texture_limit(max_texture_side);
        self.background_map = Some(Arc::new(map));
        self.background_dirty = true;
        Ok(())
    }

    /// Welt → Viewport-Pixel.
    pub fn world_to_screen(&self, world_pos: DVec2) -> Vec2 {
        self.camera.world_to_screen(world_pos, self.viewport_size)
    }

    /// Stufenweise zoomen um die Viewport-Mitte.
    pub fn zoom_step(&mut self, factor: f64, options: &AnnotatorOptions) {
        self.camera
            .zoom_by(factor, options.camera_zoom_min, options.camera_zoom_max);
    }

    /// Zoomen, sodass der Punkt unter dem Zeiger stehen bleibt.
    pub fn zoom_at(&mut self, factor: f64, screen_pos: Vec2, options: &AnnotatorOptions) {
        let focus = self.screen_to_world(screen_pos);
        self.camera.zoom_towards(
            factor,
            focus,
            options.camera_zoom_min,
            options.camera_zoom_max,
        );
    }

    /// Verschiebt die Ansicht um ein Pixel-Delta (Drag).
    pub fn pan_pixels(&mut self, delta_px: Vec2) {
        self.camera.pan_screen(delta_px);
    }

    /// Findet den Marker unter einer Viewport-Position.
    ///
    /// Getroffen wird innerhalb des Marker-Radius; bei kleinen Zoomstufen
    /// gilt mindestens der Pick-Radius in Pixeln.
    pub fn hit_test(&mut self, screen_pos: Vec2) -> Option<MarkerId> {
        if self.hit_index_dirty {
            self.hit_index = MarkerHitIndex::from_positions(
                self.visuals.iter().map(|(id, visual)| (*id, visual.position)),
            );
            self.hit_index_dirty = false;
        }
        let radius = self
            .marker_radius_world
            .max(self.camera.pick_radius_world(self.pick_radius_px));
        self.hit_index.hit(self.screen_to_world(screen_pos), radius)
    }

    /// Alle Dekorationen in Zeichenreihenfolge.
    pub fn visuals(&self) -> impl Iterator<Item = (MarkerId, &MarkerVisual)> {
        self.visuals.iter().map(|(id, visual)| (*id, visual))
    }

    /// Dekoration eines Markers.
    pub fn visual(&self, id: MarkerId) -> Option<&MarkerVisual> {
        self.visuals.get(&id)
    }

    /// Kategorie hinter einer Dekoration.
    pub fn category_of(&self, id: MarkerId) -> Option<Category> {
        self.visuals.get(&id).map(|visual| visual.category)
    }

    /// Anzahl gerenderter Dekorationen.
    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    /// Marker-Radius in Welteinheiten.
    pub fn marker_radius_world(&self) -> f64 {
        self.marker_radius_world
    }

    /// Letzte Benachrichtigung (Status-Bar).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Entfernt die Benachrichtigung.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl MapView for MapViewState {
    fn screen_to_world(&self, screen_pos: Vec2) -> DVec2 {
        self.camera.screen_to_world(screen_pos, self.viewport_size)
    }

    fn render_marker(&mut self, marker: &Marker, decoration: Decoration) {
        self.visuals.insert(
            marker.id,
            MarkerVisual {
                position: marker.position,
                decoration,
                category: marker.category,
            },
        );
        self.hit_index_dirty = true;
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if self.visuals.shift_remove(&id).is_some() {
            self.hit_index_dirty = true;
        }
    }

    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}
