/// Viewport size in logical pixels.
///
/// The painter sizes its raster from this, one pixel per logical pixel.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Whole-pixel raster dimensions covering the viewport.
    ///
    /// Returns `None` for an invalid (zero, negative or non-finite) viewport.
    #[inline]
    pub fn raster_size(self) -> Option<(u32, u32)> {
        if !self.is_valid() {
            return None;
        }
        Some((self.width.ceil() as u32, self.height.ceil() as u32))
    }
}
