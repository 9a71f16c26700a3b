//! Coordinate and geometry types shared by the runtime and the painter.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware), one raster pixel per logical pixel
//! - Origin top-left
//! - +X right, +Y down
//!
//! Integer pixel coordinates use [`IVec2`] from `zonemap-raster`.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
pub use zonemap_raster::IVec2;
