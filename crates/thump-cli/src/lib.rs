//! Thump CLI library.
//!
//! This crate provides the command behind the `thump` binary, which renders
//! the reference haptic thump to a WAV asset.

pub mod commands;
