use crate::{IVec2, Rgba8};

/// Row-major pixel buffer sized to the viewport.
///
/// Pixel `(x, y)` lives at `pixels[y * width + x]`. Reads outside the buffer
/// return `None`; writes outside the buffer are dropped, so callers can draw
/// geometry that is partially off-screen without clipping first.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Raster {
    /// Creates a `width` x `height` raster filled with `color`.
    pub fn new(width: u32, height: u32, color: Rgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    #[inline]
    fn index(&self, p: IVec2) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    #[inline]
    pub fn get(&self, p: IVec2) -> Option<Rgba8> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Writes one pixel. Returns `false` when `p` is outside the raster.
    #[inline]
    pub fn set(&mut self, p: IVec2, color: Rgba8) -> bool {
        match self.index(p) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Composites `color` onto one pixel with the given coverage.
    #[inline]
    pub fn blend(&mut self, p: IVec2, color: Rgba8, coverage: u8) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = self.pixels[i].blend(color, coverage);
        }
    }

    /// Fills the inclusive horizontal span `[x0, x1]` on row `y`, clipped.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Rgba8) {
        if y < 0 || y as u32 >= self.height || self.width == 0 {
            return;
        }
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = x0.max(0);
        let hi = x1.min(self.width as i32 - 1);
        if lo > hi {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + lo as usize..=row + hi as usize].fill(color);
    }

    pub fn clear(&mut self, color: Rgba8) {
        self.pixels.fill(color);
    }

    /// Resizes the buffer. Existing content is discarded.
    pub fn resize(&mut self, width: u32, height: u32, color: Rgba8) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, color);
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Raw `RGBA` bytes, tightly packed (`4 * width` bytes per row).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    #[test]
    fn new_is_filled() {
        let r = Raster::new(3, 2, Rgba8::RED);
        assert_eq!(r.pixels().len(), 6);
        assert!(r.pixels().iter().all(|&c| c == Rgba8::RED));
    }

    #[test]
    fn contains_edges() {
        let r = Raster::new(4, 3, Rgba8::WHITE);
        assert!(r.contains(p(0, 0)));
        assert!(r.contains(p(3, 2)));
        assert!(!r.contains(p(4, 0)));
        assert!(!r.contains(p(0, 3)));
        assert!(!r.contains(p(-1, 0)));
    }

    #[test]
    fn set_outside_is_dropped() {
        let mut r = Raster::new(2, 2, Rgba8::WHITE);
        assert!(!r.set(p(5, 5), Rgba8::BLACK));
        assert!(r.pixels().iter().all(|&c| c == Rgba8::WHITE));
    }

    #[test]
    fn set_then_get_uses_row_major_index() {
        let mut r = Raster::new(4, 4, Rgba8::WHITE);
        assert!(r.set(p(1, 2), Rgba8::BLUE));
        assert_eq!(r.get(p(1, 2)), Some(Rgba8::BLUE));
        assert_eq!(r.pixels()[2 * 4 + 1], Rgba8::BLUE);
    }

    #[test]
    fn fill_span_clips_both_ends() {
        let mut r = Raster::new(5, 1, Rgba8::WHITE);
        r.fill_span(0, -3, 2, Rgba8::BLACK);
        assert_eq!(r.get(p(0, 0)), Some(Rgba8::BLACK));
        assert_eq!(r.get(p(2, 0)), Some(Rgba8::BLACK));
        assert_eq!(r.get(p(3, 0)), Some(Rgba8::WHITE));

        r.fill_span(0, 9, 3, Rgba8::GREEN);
        assert_eq!(r.get(p(3, 0)), Some(Rgba8::GREEN));
        assert_eq!(r.get(p(4, 0)), Some(Rgba8::GREEN));
    }

    #[test]
    fn fill_span_off_raster_row_is_ignored() {
        let mut r = Raster::new(3, 3, Rgba8::WHITE);
        r.fill_span(-1, 0, 2, Rgba8::BLACK);
        r.fill_span(3, 0, 2, Rgba8::BLACK);
        assert!(r.pixels().iter().all(|&c| c == Rgba8::WHITE));
    }

    #[test]
    fn resize_discards_content() {
        let mut r = Raster::new(2, 2, Rgba8::RED);
        r.resize(3, 1, Rgba8::WHITE);
        assert_eq!((r.width(), r.height()), (3, 1));
        assert!(r.pixels().iter().all(|&c| c == Rgba8::WHITE));
    }

    #[test]
    fn as_bytes_is_four_per_pixel() {
        let r = Raster::new(3, 2, Rgba8::WHITE);
        assert_eq!(r.as_bytes().len(), 3 * 2 * 4);
    }
}
