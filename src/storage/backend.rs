//! Key-Value-Backends für den Marker-Datensatz.

use super::StoreError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Dauerhafter Key-Value-Speicher mit genau einem Schreiber (dieser Prozess).
pub trait KeyValueStore {
    /// Liest den Wert unter `key`. `Ok(None)` wenn kein Eintrag existiert.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Überschreibt den Wert unter `key` vollständig (ein einziger Schreibvorgang).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Entfernt den Eintrag unter `key`. Ein fehlender Eintrag ist kein Fehler.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-Memory-Backend.
///
/// Klone teilen sich denselben Inhalt, damit ein Host (oder Test) den
/// Datensatz nach Übergabe an den `MarkerStore` weiter beobachten kann.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
    write_count: Rc<Cell<usize>>,
}

impl MemoryStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Speicher mit einem vorhandenen Eintrag.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Simuliert einen nicht beschreibbaren Speicher (Quota/Rechte).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Rohwert unter `key` (ohne Fehlerpfad).
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Anzahl erfolgreicher Schreibvorgänge (`set` und `remove`).
    pub fn write_count(&self) -> usize {
        self.write_count.get()
    }

    fn check_writable(&self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::unavailable(
                key,
                std::io::Error::new(ErrorKind::PermissionDenied, "Speicher schreibgeschützt"),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.write_count.set(self.write_count.get() + 1);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        self.write_count.set(self.write_count.get() + 1);
        Ok(())
    }
}

/// Datei-Backend: ein JSON-Dokument pro Key in einem Verzeichnis.
///
/// Schreibt atomar über eine temporäre Datei und anschließendes Umbenennen.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Erstellt ein Datei-Backend im angegebenen Verzeichnis.
    /// Das Verzeichnis wird beim ersten Schreiben angelegt.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Verzeichnis des Backends.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Pfad der Datei für `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::unavailable(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::unavailable(key, e))?;

        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value).map_err(|e| StoreError::unavailable(key, e))?;
        std::fs::rename(&tmp, &target).map_err(|e| StoreError::unavailable(key, e))?;

        log::debug!("Datensatz '{}' geschrieben nach {}", key, target.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::unavailable(key, e)),
        }
    }
}
