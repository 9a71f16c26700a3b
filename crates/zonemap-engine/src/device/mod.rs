//! GPU device + surface management.
//!
//! The painter renders on the CPU; the GPU is only used to present the finished
//! raster. This module:
//! - creates the wgpu Instance/Adapter/Device/Queue
//! - creates & configures the Surface (swapchain) for the window
//! - acquires frames and hands out an encoder + view for the blit pass

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
