//! Embassy async tasks
//!
//! The refresh task runs on the interrupt executor; the animator runs in
//! thread mode. They share the video buffer and talk through signals.

pub mod animator;
pub mod refresh;

pub use animator::animator_task;
pub use refresh::refresh_task;
