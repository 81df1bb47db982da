//! # Block Matrix Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks
//! └── src/integration/  # End-to-end scenarios through the public API
//!     ├── lifecycle.rs
//!     ├── tamper.rs
//!     ├── persistence.rs
//!     └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bm-tests
//!
//! # By category
//! cargo test -p bm-tests integration::tamper::
//!
//! # Benchmarks
//! cargo bench -p bm-tests
//! ```

pub mod integration;
