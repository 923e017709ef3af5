//! # Domain Module
//!
//! Core domain types for the Register State Composer.

pub mod constants;
pub mod errors;
pub mod layout;
pub mod operations;

pub use constants::*;
pub use errors::*;
pub use layout::*;
pub use operations::*;
