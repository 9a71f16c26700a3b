//! CPU raster kernels for the **zonemap** painter.
//!
//! Everything here works on a plain pixel buffer in screen space (top-left
//! origin, +X right, +Y down, one `Rgba8` per pixel). No window, GPU or font
//! code is involved, so the kernels can be exercised headless.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Rgba8` |
//! | [`point`] | `IVec2` integer pixel coordinates |
//! | [`raster`] | `Raster` pixel buffer |
//! | [`fill`] | 4-connected `flood_fill`, `FillError`, `FillReport` |
//! | [`polygon`] | line / outline / filled polygon scan conversion, point-in-polygon |
//!
//! # Quick start
//!
//! ```rust
//! use zonemap_raster::{flood_fill, polygon, IVec2, Raster, Rgba8};
//!
//! let mut raster = Raster::new(64, 64, Rgba8::WHITE);
//! let square = [IVec2::new(8, 8), IVec2::new(40, 8), IVec2::new(40, 40), IVec2::new(8, 40)];
//! polygon::stroke_polygon(&mut raster, &square, Rgba8::BLACK);
//!
//! let report = flood_fill(&mut raster, IVec2::new(20, 20), Rgba8::RED, Rgba8::BLACK).unwrap();
//! assert_eq!(report.painted, 31 * 31);
//! ```

pub mod color;
pub mod fill;
pub mod point;
pub mod polygon;
pub mod raster;

pub use color::Rgba8;
pub use fill::{flood_fill, FillError, FillReport};
pub use point::IVec2;
pub use raster::Raster;
