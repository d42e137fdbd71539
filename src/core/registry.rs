//! In-Memory-Registry aller Marker, synchron gehalten mit dem Speicher.
//!
//! Jede mutierende Operation schreibt genau einmal den vollständigen
//! Zustand nach der Mutation. Schlägt das Schreiben fehl, bleibt der
//! In-Memory-Zustand maßgeblich; der nächste erfolgreiche Save gleicht ab.

use glam::DVec2;
use indexmap::IndexMap;

use super::{Category, MapView, Marker, MarkerId};
use crate::storage::{MarkerStore, StoreError};

/// Maßgebliche Marker-Sammlung (Einfügereihenfolge bleibt erhalten).
pub struct MarkerRegistry {
    markers: IndexMap<MarkerId, Marker>,
    next_id: u64,
    store: MarkerStore,
    /// Letzter Schreibvorgang fehlgeschlagen, Speicher hinkt hinterher
    dirty: bool,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry über dem Speicher (noch nicht geladen).
    pub fn new(store: MarkerStore) -> Self {
        Self {
            markers: IndexMap::new(),
            next_id: 1,
            store,
            dirty: false,
        }
    }

    /// Lädt alle gespeicherten Marker und rendert sie in der View.
    ///
    /// Ersetzt einen bereits geladenen Bestand. Löst keinen Schreibvorgang aus.
    pub fn initialize(&mut self, view: &mut dyn MapView) -> usize {
        for id in self.markers.keys() {
            view.remove_marker(*id);
        }
        self.markers.clear();
        self.next_id = 1;

        // IDs sind nach dem Dekodieren eindeutig
        for marker in self.store.load() {
            self.next_id = self.next_id.max(marker.id.0.saturating_add(1));
            view.render_marker(&marker, marker.category.decoration());
            self.markers.insert(marker.id, marker);
        }

        self.dirty = false;
        log::info!("{} Marker initialisiert", self.markers.len());
        self.markers.len()
    }

    /// Legt einen neuen Marker an, rendert ihn und speichert die Sammlung.
    pub fn add(&mut self, position: DVec2, category: Category, view: &mut dyn MapView) -> Marker {
        let category = self.store.scheme().coerce(category);
        let marker = Marker::new(self.allocate_id(), position, category);
        self.markers.insert(marker.id, marker);
        view.render_marker(&marker, category.decoration());

        log::info!(
            "Marker {} erstellt bei ({:.1}, {:.1}) [{}]",
            marker.id,
            position.y,
            position.x,
            category
        );

        self.persist(view);
        marker
    }

    /// Entfernt einen Marker. Gibt `false` zurück, wenn die ID nicht
    /// (mehr) existiert; dann passiert nichts, auch kein Schreibvorgang.
    pub fn remove(&mut self, id: MarkerId, view: &mut dyn MapView) -> bool {
        if self.markers.shift_remove(&id).is_none() {
            log::debug!("Marker {} existiert nicht (mehr), nichts zu entfernen", id);
            return false;
        }

        view.remove_marker(id);
        log::info!("Marker {} entfernt", id);
        self.persist(view);
        true
    }

    /// Entfernt alle Marker und den gespeicherten Datensatz.
    pub fn clear(&mut self, view: &mut dyn MapView) {
        for id in self.markers.keys() {
            view.remove_marker(*id);
        }
        let count = self.markers.len();
        self.markers.clear();

        match self.store.clear() {
            Ok(()) => {
                self.dirty = false;
                log::info!("{} Marker gelöscht, Datensatz entfernt", count);
            }
            Err(e) => self.report_write_failure(&e, view),
        }
    }

    /// Momentaufnahme aller Marker in Einfügereihenfolge.
    pub fn list(&self) -> Vec<Marker> {
        self.markers.values().copied().collect()
    }

    /// Iteriert über alle Marker in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Sucht einen Marker über seine ID.
    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    /// Gibt `true` zurück, wenn ein Marker mit dieser ID existiert.
    pub fn contains(&self, id: MarkerId) -> bool {
        self.markers.contains_key(&id)
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Gibt `true` zurück, wenn der letzte Schreibvorgang fehlgeschlagen ist.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Zugriff auf den Speicher.
    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    /// Vergibt die nächste freie ID; am Ende des Wertebereichs wird ab 1
    /// nach der kleinsten freien ID gesucht.
    fn allocate_id(&mut self) -> MarkerId {
        let start = self.next_id.max(1);
        let id = (start..=u64::MAX)
            .chain(1..start)
            .find(|candidate| !self.markers.contains_key(&MarkerId(*candidate)))
            .unwrap_or(start);
        self.next_id = id.checked_add(1).unwrap_or(1);
        MarkerId(id)
    }

    fn persist(&mut self, view: &mut dyn MapView) {
        let snapshot = self.list();
        match self.store.save(&snapshot) {
            Ok(()) => {
                if self.dirty {
                    log::info!("Marker-Speicher wieder synchron");
                }
                self.dirty = false;
            }
            Err(e) => self.report_write_failure(&e, view),
        }
    }

    fn report_write_failure(&mut self, error: &StoreError, view: &mut dyn MapView) {
        self.dirty = true;
        log::warn!("Marker konnten nicht gespeichert werden: {}", error);
        view.notify(&format!(
            "Marker konnten nicht gespeichert werden ({error}). Änderungen gelten nur für diese Sitzung."
        ));
    }
}
