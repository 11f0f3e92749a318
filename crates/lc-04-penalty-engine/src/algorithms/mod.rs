//! # Algorithms Module
//!
//! The penalty formula, independent of any stored state.

pub mod penalty;

pub use penalty::compute_penalty;
