//! Small self-contained helpers.

/// Frame timing and smoothed FPS.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
