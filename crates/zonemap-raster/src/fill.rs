use std::fmt;

use crate::{IVec2, Raster, Rgba8};

/// Error returned by [`flood_fill`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FillError {
    /// Seed lies outside the raster. The raster was not touched.
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::OutOfBounds { x, y, width, height } => write!(
                f,
                "fill seed ({x}, {y}) is outside the {width}x{height} raster"
            ),
        }
    }
}

impl std::error::Error for FillError {}

/// Summary of a completed fill.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FillReport {
    /// Number of pixels repainted with the fill color.
    pub painted: usize,
}

/// 4-connected boundary fill starting at `seed`.
///
/// A pixel is repainted when its current color is neither `boundary` nor
/// `fill`; the fill then spreads to its up/down/left/right neighbours inside
/// the raster. The result is the same pixel set the textbook recursive
/// formulation produces, but pending pixels are kept on an explicit LIFO work
/// list so large regions cannot exhaust the call stack.
///
/// Edge cases:
/// - seed already `boundary` or already `fill`: nothing is painted;
/// - a boundary with gaps (including diagonal-only contact) leaks, and the
///   whole reachable component is painted.
pub fn flood_fill(
    raster: &mut Raster,
    seed: IVec2,
    fill: Rgba8,
    boundary: Rgba8,
) -> Result<FillReport, FillError> {
    if !raster.contains(seed) {
        return Err(FillError::OutOfBounds {
            x: seed.x,
            y: seed.y,
            width: raster.width(),
            height: raster.height(),
        });
    }

    let mut report = FillReport::default();
    let mut pending = vec![seed];

    while let Some(p) = pending.pop() {
        let Some(current) = raster.get(p) else { continue };
        if current == boundary || current == fill {
            continue;
        }

        raster.set(p, fill);
        report.painted += 1;

        // Pushed in reverse so the left neighbour is visited first, matching
        // the recursive visiting order.
        for n in [
            IVec2::new(p.x, p.y + 1),
            IVec2::new(p.x, p.y - 1),
            IVec2::new(p.x + 1, p.y),
            IVec2::new(p.x - 1, p.y),
        ] {
            if raster.contains(n) {
                pending.push(n);
            }
        }
    }

    log::trace!(
        "flood_fill seed=({}, {}) painted={}",
        seed.x,
        seed.y,
        report.painted
    );
    Ok(report)
}
