//! Larderctl library - exposes modules for testing

pub mod cli;
pub mod commands;
pub mod display;
pub mod errors;
pub mod session;
pub mod views;
