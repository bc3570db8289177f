//! Rendering: brightness lookup, frame composition, and cross-fades

pub mod blut;
pub mod compositor;
pub mod fade;

pub use blut::{osb_to_duty, to_duty, BLUT, LEVELS, MAX_DUTY, MAX_LEVEL};
pub use compositor::{word, Compositor, Word, WORD_LEN};
pub use fade::{ramp, FadeEngine, FadeState};
