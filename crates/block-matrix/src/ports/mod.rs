//! # Ports
//!
//! - `inbound` - `BlockMatrixApi`, what the crate offers
//! - `outbound` - `KeyValueStore`, what the host must provide

pub mod inbound;
pub mod outbound;
