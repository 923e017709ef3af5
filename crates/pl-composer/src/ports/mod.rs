//! # Ports Module
//!
//! Hexagonal architecture ports (outbound sampling backend).

pub mod outbound;

pub use outbound::*;
