//! Zonemap painter — labeled polygon zones painted with flood fill.
//!
//! A fixed set of zones is drawn onto a CPU raster every frame through a
//! pan/zoom [`ViewTransform`]. Left-clicking inside a zone flood-fills it with
//! that zone's palette color, right-dragging pans, and the wheel zooms with
//! smoothing. The engine runtime hosts the loop; everything above the window
//! is headless and testable through [`PaintSession`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use zonemap_painter::Painter;
//!
//! Painter::new()
//!     .title("Urban Zoning Map - Flood Fill and Clipping")
//!     .font(std::fs::read("DejaVuSans.ttf")?)
//!     .run()?;
//! ```
//!
//! # Headless
//!
//! ```rust
//! use zonemap_painter::{DispatchOutcome, PainterConfig, PainterEvent, PaintSession};
//! use zonemap_painter::input::MouseButton;
//! use zonemap_raster::{IVec2, Rgba8};
//!
//! let mut session = PaintSession::new(PainterConfig::default()).unwrap();
//! let click = PainterEvent::PointerDown { button: MouseButton::Left, pos: IVec2::new(200, 200) };
//! assert_eq!(session.frame([click]), DispatchOutcome::Continue);
//! assert_eq!(session.raster().get(IVec2::new(150, 150)), Some(Rgba8::RED));
//! ```

pub mod app;
pub mod config;
pub mod dispatch;
pub mod scene;
pub mod session;
pub mod translate;
pub mod view;
pub mod zone;

pub use app::Painter;
pub use config::{ConfigError, OverlayConfig, PainterConfig, ZoneDef};
pub use dispatch::{DispatchOutcome, DispatchState, DispatchTarget, Dispatcher, PainterEvent};
pub use scene::SceneRenderer;
pub use session::PaintSession;
pub use translate::EventTranslator;
pub use view::{ViewTransform, ZoomLimits};
pub use zone::{FillState, Zone, ZoneId, ZoneSet};

/// Engine input types that appear in painter events.
pub mod input {
    pub use zonemap_engine::input::{HeldButtons, MouseButton};
}
