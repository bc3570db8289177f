//! Board-agnostic rendering core for the Quintet display
//!
//! Quintet drives five 18-segment characters with 16 grayscale levels and
//! smooth cross-fades. This crate holds everything that does not depend on
//! a specific board:
//!
//! - Segment addressing and the two display buffers
//! - Brightness lookup, glyph table, and numeral variants
//! - Frame compositor and fade engine
//! - Duty-threshold scan and refresh multiplexer
//! - Hardware abstraction trait for the panel
//! - Configuration types and parser
//!
//! # Data flow
//!
//! ```text
//!   load_osb_* ──▶ OffScreenBuffer ──publish──▶ ┐
//!                        ▲                       │ (BLUT)
//!                  FadeEngine                    ▼
//!   load_video_* ─────────────────────────▶ VideoBuffer ──tick──▶ DisplayPanel
//! ```
//!
//! Only the video buffer is shared with the refresh tick. It is a lock-free
//! byte array; the tick may see a frame half written, which shows as a
//! brief tear and never as corrupted scan state.

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod glyph;
pub mod render;
pub mod scan;
pub mod traits;
