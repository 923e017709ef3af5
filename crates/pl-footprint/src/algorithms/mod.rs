//! # Algorithms Module
//!
//! Pure evaluation logic over frequency tables.

pub mod evaluate;

pub use evaluate::evaluate_footprint;
