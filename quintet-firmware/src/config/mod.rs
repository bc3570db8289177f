//! Configuration loading
//!
//! The configuration is embedded from display.toml at build time and
//! parsed by the core's no_std parser at boot.

pub mod loader;

pub use loader::load_config;
