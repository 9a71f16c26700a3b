//! Painter configuration.
//!
//! Everything the painter needs but does not compute: viewport, frame rate,
//! zoom behaviour, zone geometry, palette and overlay text. Checked once by
//! [`PainterConfig::validate`]; nothing is re-validated while rendering.

use std::fmt;

use zonemap_engine::coords::{Vec2, Viewport};
use zonemap_raster::Rgba8;

use crate::view::ZoomLimits;

/// Error returned by [`PainterConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Zone `index` has fewer than three vertices (or a non-finite one).
    DegenerateZone { index: usize, vertices: usize },
    EmptyPalette,
    /// Palette entry `index` equals the boundary color, so fills of that zone
    /// could never start.
    PaletteMatchesBoundary { index: usize },
    InvalidZoomLimits { min: f32, max: f32 },
    InvalidViewport { width: f32, height: f32 },
    InvalidFrameRate,
    InvalidZoomStep(f32),
    InvalidSmoothing(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DegenerateZone { index, vertices } => write!(
                f,
                "zone {index} is degenerate: {vertices} usable vertices, at least 3 required"
            ),
            ConfigError::EmptyPalette => write!(f, "fill palette is empty"),
            ConfigError::PaletteMatchesBoundary { index } => {
                write!(f, "palette color {index} equals the boundary color")
            }
            ConfigError::InvalidZoomLimits { min, max } => {
                write!(f, "invalid zoom range [{min}, {max}]: need 0 < min <= max")
            }
            ConfigError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}")
            }
            ConfigError::InvalidFrameRate => write!(f, "target frame rate must be at least 1"),
            ConfigError::InvalidZoomStep(step) => {
                write!(f, "zoom step {step} must be finite and greater than 1")
            }
            ConfigError::InvalidSmoothing(s) => {
                write!(f, "zoom smoothing {s} must be in (0, 1]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Geometry and label of one zone, in model space.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDef {
    pub label: String,
    pub vertices: Vec<Vec2>,
}

impl ZoneDef {
    pub fn new<I>(label: impl Into<String>, vertices: I) -> Self
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        Self {
            label: label.into(),
            vertices: vertices.into_iter().map(|(x, y)| Vec2::new(x, y)).collect(),
        }
    }

    /// Axis-aligned rectangle zone with corners listed clockwise from top-left.
    pub fn rect(label: impl Into<String>, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(label, [(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
    }

    fn usable_vertices(&self) -> usize {
        if self.vertices.iter().all(|v| v.is_finite()) {
            self.vertices.len()
        } else {
            0
        }
    }
}

/// Text drawn over the map when a font is available.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub title: String,
    pub instructions: Vec<String>,
    /// Pixel size for every overlay line.
    pub font_size: f32,
    pub text_color: Rgba8,
    pub label_color: Rgba8,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "Urban Zoning Map".to_string(),
            instructions: [
                "Instructions:",
                "Left-click to fill zones",
                "Right-click + drag to pan",
                "Scroll to zoom in/out",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            font_size: 22.0,
            text_color: Rgba8::DARK_GRAY,
            label_color: Rgba8::BLACK,
        }
    }
}

/// Complete painter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PainterConfig {
    pub window_title: String,
    /// Initial window size in logical pixels.
    pub viewport: Viewport,
    pub target_fps: u32,

    /// Multiplier applied to the zoom target per wheel notch.
    pub zoom_step: f32,
    /// Fraction of the remaining distance to the target covered per frame.
    pub zoom_smoothing: f32,
    pub zoom_limits: ZoomLimits,

    pub zones: Vec<ZoneDef>,
    /// Zone `i` fills with `palette[i % palette.len()]`.
    pub palette: Vec<Rgba8>,
    /// Outline color of unfilled zones; the flood fill stops at it.
    pub boundary: Rgba8,
    pub background: Rgba8,

    pub overlay: OverlayConfig,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            window_title: "Urban Zoning Map - Flood Fill and Clipping".to_string(),
            viewport: Viewport::new(800.0, 600.0),
            target_fps: 60,
            zoom_step: 1.1,
            zoom_smoothing: 0.1,
            zoom_limits: ZoomLimits::default(),
            zones: vec![
                ZoneDef::rect("Residential", 100.0, 100.0, 200.0, 200.0),
                ZoneDef::rect("Commercial", 400.0, 100.0, 200.0, 200.0),
                ZoneDef::rect("Industrial", 100.0, 400.0, 200.0, 200.0),
            ],
            palette: vec![Rgba8::RED, Rgba8::GREEN, Rgba8::BLUE],
            boundary: Rgba8::BLACK,
            background: Rgba8::WHITE,
            overlay: OverlayConfig::default(),
        }
    }
}

impl PainterConfig {
    /// Checks every load-time invariant; returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.viewport.is_valid() {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        if !self.zoom_limits.is_valid() {
            return Err(ConfigError::InvalidZoomLimits {
                min: self.zoom_limits.min,
                max: self.zoom_limits.max,
            });
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !(self.zoom_smoothing > 0.0 && self.zoom_smoothing <= 1.0) {
            return Err(ConfigError::InvalidSmoothing(self.zoom_smoothing));
        }

        validate_zones(&self.zones)?;

        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(index) = self.palette.iter().position(|&c| c == self.boundary) {
            return Err(ConfigError::PaletteMatchesBoundary { index });
        }

        Ok(())
    }
}

/// Every zone needs at least three finite vertices.
pub(crate) fn validate_zones(zones: &[ZoneDef]) -> Result<(), ConfigError> {
    for (index, zone) in zones.iter().enumerate() {
        let vertices = zone.usable_vertices();
        if vertices < 3 {
            return Err(ConfigError::DegenerateZone { index, vertices });
        }
    }
    Ok(())
}
