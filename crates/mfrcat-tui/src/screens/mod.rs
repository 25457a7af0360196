//! Screen components.

pub mod manufacturers;
