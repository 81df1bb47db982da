//! # Adapters Module
//!
//! Implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: `KeyValueStore` backends (in-memory and single-file)

pub mod storage;

pub use storage::{FileBackedKVStore, InMemoryKVStore};
