//! GPU presentation of the CPU raster.
//!
//! All drawing happens on the CPU into a [`zonemap_raster::Raster`]; the GPU
//! side only uploads it to a texture and blits it over the surface.
//!
//! Convention:
//! - One raster pixel per logical pixel, top-left origin, +Y down.
//! - The blit is a single full-screen triangle with nearest sampling.

mod ctx;
mod raster;

pub use ctx::{RenderCtx, RenderTarget};
pub use raster::RasterRenderer;
