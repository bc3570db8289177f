//! Display configuration
//!
//! Configuration types and the no_std text parser that fills them in.

pub mod parser;
pub mod types;

pub use parser::{parse_config, ConfigError};
pub use types::*;
