//! # Domain Module
//!
//! Core domain types for the Service Registry.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
