//! Persistenz der Marker-Sammlung: Key-Value-Backends, Datensatzformat und
//! Migration historischer Formate.

mod backend;
mod error;
mod migrate;
mod record;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::StoreError;
pub use migrate::{detect_shape, RecordShape};
pub use record::{decode_record, encode_record, RECORD_VERSION};
pub use store::{MarkerStore, DEFAULT_STORAGE_KEY};
