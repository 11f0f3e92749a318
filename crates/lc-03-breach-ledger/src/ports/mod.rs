//! # Ports Module
//!
//! Hexagonal architecture ports (inbound API and outbound dependencies).

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
