//! Command implementations

pub mod render;
