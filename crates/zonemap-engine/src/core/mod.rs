//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the painter:
//! an [`App`] trait driven once per frame with a [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
