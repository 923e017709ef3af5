//! # Phaseloom Test Suite
//!
//! Unified test crate for cross-crate flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Compose -> sample -> evaluate choreography
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pl-tests
//!
//! # Benchmarks
//! cargo bench -p pl-tests
//! ```

#![allow(unused_imports)]

pub mod integration;
