//! Spatial-Index (KD-Tree) für den Klick-Test auf Marker-Dekorationen.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::MarkerId;

/// Read-only Index über allen gerenderten Marker-Positionen.
///
/// Die Reihenfolge der Einträge entspricht der Zeichenreihenfolge; bei
/// gleich weit entfernten Treffern gewinnt der zuletzt gezeichnete Marker.
/// Deckungsgleiche Marker teilen sich einen Baumpunkt, der dem obersten gehört.
#[derive(Debug, Clone)]
pub struct MarkerHitIndex {
    tree: KdTree<f64, 2>,
    /// Pro Baumpunkt: oberster Marker und dessen Zeichenposition.
    topmost: Vec<(MarkerId, usize)>,
}

impl MarkerHitIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            topmost: Vec::new(),
        }
    }

    /// Baut einen Index aus `(id, position)`-Paaren in Zeichenreihenfolge.
    ///
    /// Der KD-Tree verträgt nur eine begrenzte Anzahl Einträge auf exakt
    /// demselben Punkt, daher wird pro Position nur ein Eintrag angelegt.
    pub fn from_positions(entries: impl IntoIterator<Item = (MarkerId, DVec2)>) -> Self {
        let mut slots: HashMap<[u64; 2], usize> = HashMap::new();
        let mut points: Vec<[f64; 2]> = Vec::new();
        let mut topmost: Vec<(MarkerId, usize)> = Vec::new();

        for (draw_order, (id, pos)) in entries.into_iter().enumerate() {
            // -0.0 und 0.0 auf denselben Schlüssel abbilden
            let point = [pos.x + 0.0, pos.y + 0.0];
            match slots.entry([point[0].to_bits(), point[1].to_bits()]) {
                Entry::Occupied(slot) => topmost[*slot.get()] = (id, draw_order),
                Entry::Vacant(slot) => {
                    slot.insert(points.len());
                    points.push(point);
                    topmost.push((id, draw_order));
                }
            }
        }

        Self {
            tree: (&points).into(),
            topmost,
        }
    }

    /// Anzahl unterschiedlicher Positionen im Index.
    pub fn len(&self) -> usize {
        self.topmost.len()
    }

    /// Gibt `true` zurück, wenn keine Marker im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.topmost.is_empty()
    }

    /// Findet den Marker, der an `query` innerhalb von `radius` getroffen wird.
    pub fn hit(&self, query: DVec2, radius: f64) -> Option<MarkerId> {
        if self.is_empty() || radius.is_sign_negative() {
            return None;
        }

        self.tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                self.topmost
                    .get(entry.item as usize)
                    .map(|&(id, order)| (entry.distance, order, id))
            })
            .max_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)))
            .map(|(_, _, id)| id)
    }
}

impl Default for MarkerHitIndex {
    fn default() -> Self {
        Self::empty()
    }
}
