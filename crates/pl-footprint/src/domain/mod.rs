//! # Domain Module
//!
//! Core domain types for footprint accountability.

pub mod errors;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;
