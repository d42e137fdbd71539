//! Zeichnet Kartenbild und Marker-Dekorationen in den Viewport.

use glam::DVec2;

use super::color32;
use crate::app::MapViewState;
use crate::core::{Decoration, IconType};
use crate::shared::AnnotatorOptions;

/// Kleinster gezeichneter Marker-Radius in Pixeln.
const MIN_MARKER_RADIUS_PX: f32 = 3.0;

/// Zeichnet Hintergrund, Kartenbild und alle Marker in `rect`.
pub fn paint_map(
    ui: &egui::Ui,
    rect: egui::Rect,
    view: &MapViewState,
    texture: Option<&egui::TextureHandle>,
    options: &AnnotatorOptions,
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, color32(options.background_color));

    let to_screen = |world: DVec2| {
        let local = view.world_to_screen(world);
        rect.min + egui::vec2(local.x, local.y)
    };

    if let Some(texture) = texture {
        let image_rect = egui::Rect::from_min_max(
            to_screen(DVec2::ZERO),
            to_screen(view.world_size()),
        );
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    let radius =
        ((view.marker_radius_world() * view.camera.zoom) as f32).max(MIN_MARKER_RADIUS_PX);
    let outline = egui::Stroke::new(1.5, color32(options.marker_outline_color));
    let visible = rect.expand(radius);

    for (_, visual) in view.visuals() {
        let center = to_screen(visual.position);
        if !visible.contains(center) {
            continue;
        }
        match visual.decoration {
            Decoration::Circle { fill: [r, g, b] } => {
                let alpha = (options.marker_fill_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
                painter.circle(
                    center,
                    radius,
                    egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
                    outline,
                );
            }
            Decoration::Icon(icon) => paint_icon(&painter, center, radius, icon, outline),
        }
    }
}

fn paint_icon(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    icon: IconType,
    outline: egui::Stroke,
) {
    let r = radius;
    let points = match icon {
        // Höhleneingang: Dreieck
        IconType::Cave => vec![
            center + egui::vec2(0.0, -r),
            center + egui::vec2(r, r * 0.8),
            center + egui::vec2(-r, r * 0.8),
        ],
        // Claim: Quadrat
        IconType::Claim => vec![
            center + egui::vec2(-r * 0.8, -r * 0.8),
            center + egui::vec2(r * 0.8, -r * 0.8),
            center + egui::vec2(r * 0.8, r * 0.8),
            center + egui::vec2(-r * 0.8, r * 0.8),
        ],
        // Ressource: Raute
        IconType::Resource => vec![
            center + egui::vec2(0.0, -r),
            center + egui::vec2(r, 0.0),
            center + egui::vec2(0.0, r),
            center + egui::vec2(-r, 0.0),
        ],
    };
    painter.add(egui::Shape::convex_polygon(points, icon_fill(icon), outline));
}

fn icon_fill(icon: IconType) -> egui::Color32 {
    match icon {
        IconType::Cave => egui::Color32::from_rgb(0x8B, 0x5A, 0x2B),
        IconType::Claim => egui::Color32::from_rgb(0xE0, 0xB0, 0x20),
        IconType::Resource => egui::Color32::from_rgb(0x2E, 0xA0, 0x4A),
    }
}

/// Füllfarbe eines Paletten-Eintrags für Toolbar-Vorschauen.
pub(crate) fn swatch_color(decoration: Decoration) -> egui::Color32 {
    match decoration {
        Decoration::Circle { fill: [r, g, b] } => egui::Color32::from_rgb(r, g, b),
        Decoration::Icon(icon) => icon_fill(icon),
    }
}
