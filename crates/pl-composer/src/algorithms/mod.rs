//! # Algorithms Module
//!
//! Pure composition logic. No I/O, no sampling, no shared state.

pub mod compose;

pub use compose::compose;
