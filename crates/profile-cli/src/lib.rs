//! CLI library components for the profile form driver.

pub mod cli;
pub mod commands;
pub mod events;
pub mod logging;
pub mod render;
