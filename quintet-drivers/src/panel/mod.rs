//! Display panel implementations

pub mod shift_register;

pub use shift_register::{PanelError, ShiftRegisterPanel, ROW_COUNT};
