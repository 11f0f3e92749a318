//! Cross-subsystem scenarios driven through the runtime.

pub mod atomicity;
pub mod enforcement;
pub mod events;
pub mod marketplace;
