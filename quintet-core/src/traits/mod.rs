//! Hardware abstraction traits
//!
//! These traits define the interface between the refresh logic
//! and hardware-specific implementations.

pub mod panel;

pub use panel::DisplayPanel;
