//! # Domain Module
//!
//! Constants bounding the penalty formula.

pub mod value_objects;

pub use value_objects::*;
