//! # Domain Layer
//!
//! Pure domain logic for the block matrix. Nothing here touches the store.
//!
//! ## Modules
//!
//! - `indexing` - Block number ↔ grid position bijection
//! - `digest` - Row/column digest engine
//! - `block` - Block entity and the empty sentinel
//! - `metadata` - The singleton `info` record
//! - `redaction` - Locality self-check for redactions
//! - `audit` - Integrity scan report
//! - `snapshot` - Dense grid view
//! - `value_objects` - Configuration and record keys
//! - `errors` - Domain error types

pub mod audit;
pub mod block;
pub mod digest;
pub mod errors;
pub mod indexing;
pub mod metadata;
pub mod redaction;
pub mod snapshot;
pub mod value_objects;
