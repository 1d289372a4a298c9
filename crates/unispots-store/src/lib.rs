//! Local persistence for UniSpots.
//!
//! A small string key-value store (file-backed or in-memory) and the saved
//! places list kept under one of its keys.

pub mod error;
pub mod kv;
pub mod saved;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use saved::{SavedPlaces, SAVED_PLACES_KEY};
