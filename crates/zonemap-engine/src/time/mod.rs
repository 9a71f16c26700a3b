//! Frame pacing.
//!
//! `FramePacer` decides when the next frame is due so the loop does not
//! exceed the target rate.

mod pacer;

pub use pacer::FramePacer;
