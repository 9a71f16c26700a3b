use bytemuck::{Pod, Zeroable};

/// 8-bit straight-alpha RGBA pixel.
///
/// Stored in memory as `r, g, b, a` so a `[Rgba8]` slice can be uploaded as an
/// `Rgba8Unorm*` texture without conversion.
///
/// Equality is exact; the flood fill relies on it to recognise boundary and
/// fill pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    pub const RED: Rgba8 = Rgba8::rgb(255, 0, 0);
    pub const GREEN: Rgba8 = Rgba8::rgb(0, 255, 0);
    pub const BLUE: Rgba8 = Rgba8::rgb(0, 0, 255);
    pub const DARK_GRAY: Rgba8 = Rgba8::rgb(50, 50, 50);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Composites `src` over `self` with an extra `coverage` factor (`0`–`255`).
    ///
    /// Used for anti-aliased glyph coverage. `coverage == 255` with an opaque
    /// `src` returns `src` exactly; `coverage == 0` returns `self` unchanged.
    #[inline]
    pub fn blend(self, src: Rgba8, coverage: u8) -> Rgba8 {
        let k = (src.a as u32 * coverage as u32 + 127) / 255;
        if k == 0 {
            return self;
        }
        if k == 255 {
            return src;
        }
        let mix = |d: u8, s: u8| ((s as u32 * k + d as u32 * (255 - k) + 127) / 255) as u8;
        Rgba8 {
            r: mix(self.r, src.r),
            g: mix(self.g, src.g),
            b: mix(self.b, src.b),
            a: mix(self.a, 255),
        }
    }
}
