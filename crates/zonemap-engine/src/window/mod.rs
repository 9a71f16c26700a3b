//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the painter window, and wires them to the
//! GPU layer and frame pacing.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
