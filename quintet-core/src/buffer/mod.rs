//! Display buffers and segment addressing
//!
//! - [`VideoBuffer`]: final duty levels read by the refresh tick
//! - [`OffScreenBuffer`]: additive compositing surface, pre-lookup

pub mod offscreen;
pub mod segment;
pub mod video;

pub use offscreen::OffScreenBuffer;
pub use segment::{
    SegmentIndex, SegmentPattern, LOWER_DP, POSITIONS, SEGMENTS_PER_POSITION, SEGMENT_COUNT,
    UPPER_DP,
};
pub use video::VideoBuffer;
