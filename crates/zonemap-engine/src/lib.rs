//! Zonemap engine crate.
//!
//! Owns the platform + GPU runtime used by the painter: the winit event loop,
//! platform-agnostic input, frame timing, and presentation of a CPU
//! [`zonemap_raster::Raster`] through wgpu.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod text;
