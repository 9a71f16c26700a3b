//! Pan/zoom mapping between model space and screen space.

use zonemap_engine::coords::{IVec2, Vec2};

/// Allowed zoom range. Zoom requests outside it are clipped, never rejected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.1, max: 10.0 }
    }
}

impl ZoomLimits {
    /// `0 < min <= max`, both finite.
    pub fn is_valid(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }

    /// Clamps `zoom` into the range. NaN maps to `min`.
    #[inline]
    pub fn clamp(self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.min;
        }
        zoom.clamp(self.min, self.max)
    }
}

/// Current view: `screen = model * zoom + pan`.
///
/// `zoom` eases toward `target_zoom` one [`step_smoothing`](Self::step_smoothing)
/// per frame; wheel input only moves the target. Both stay inside `limits`, so
/// the inverse mapping never divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    target_zoom: f32,
    pan: IVec2,
    limits: ZoomLimits,
    step: f32,
    smoothing: f32,
}

/// Remaining distance below which smoothing snaps onto the target.
const SNAP_EPSILON: f32 = 1e-4;

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), 1.1, 0.1)
    }
}

impl ViewTransform {
    /// Identity view. `step` is the per-notch zoom multiplier, `smoothing` the
    /// fraction of the remaining zoom distance covered per frame.
    pub fn new(limits: ZoomLimits, step: f32, smoothing: f32) -> Self {
        let identity = limits.clamp(1.0);
        Self {
            zoom: identity,
            target_zoom: identity,
            pan: IVec2::zero(),
            limits,
            step,
            smoothing,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    pub fn pan(&self) -> IVec2 {
        self.pan
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        p * self.zoom + Vec2::from(self.pan)
    }

    /// [`to_screen`](Self::to_screen) truncated toward zero; the coordinates
    /// used for both drawing and hit-testing.
    #[inline]
    pub fn to_screen_px(&self, p: Vec2) -> IVec2 {
        self.to_screen(p).truncate()
    }

    #[inline]
    pub fn to_model(&self, s: Vec2) -> Vec2 {
        (s - Vec2::from(self.pan)) / self.zoom
    }

    /// Multiplies the zoom target by `step` per notch (negative notches use
    /// the reciprocal), clamped to the limits. The visible zoom follows on
    /// subsequent frames.
    pub fn request_zoom_steps(&mut self, notches: i32) {
        if notches == 0 {
            return;
        }
        self.target_zoom = self.limits.clamp(self.target_zoom * self.step.powi(notches));
    }

    /// Jumps straight to `zoom` with no smoothing.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = self.limits.clamp(zoom);
        self.target_zoom = self.zoom;
    }

    /// Advances the visible zoom one frame toward the target.
    pub fn step_smoothing(&mut self) {
        let remaining = self.target_zoom - self.zoom;
        if remaining.abs() < SNAP_EPSILON {
            self.zoom = self.target_zoom;
            return;
        }
        self.zoom = self.limits.clamp(self.zoom + remaining * self.smoothing);
    }

    /// `true` once the visible zoom has reached the target.
    pub fn is_settled(&self) -> bool {
        self.zoom == self.target_zoom
    }

    pub fn pan_by(&mut self, delta: IVec2) {
        self.pan += delta;
    }

    /// Back to identity zoom and zero pan.
    pub fn reset(&mut self) {
        self.set_zoom(1.0);
        self.pan = IVec2::zero();
    }

    /// `true` when both views put every model point on the same screen
    /// pixel. A pending zoom target does not count.
    pub fn same_mapping(&self, other: &ViewTransform) -> bool {
        self.zoom == other.zoom && self.pan == other.pan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let view = ViewTransform::default();
        assert_eq!(view.to_screen(Vec2::new(123.0, 45.5)), Vec2::new(123.0, 45.5));
        assert_eq!(view.to_screen_px(Vec2::new(123.9, 45.5)), IVec2::new(123, 45));
    }

    #[test]
    fn screen_of_model_round_trips() {
        let mut view = ViewTransform::default();
        for (zoom, pan) in [(1.0, (0, 0)), (0.1, (13, -7)), (2.5, (-300, 41)), (10.0, (5, 5)), (1.21, (50, -20))] {
            view.set_zoom(zoom);
            view.pan_by(IVec2::from(pan) - view.pan());
            for p in [Vec2::new(0.0, 0.0), Vec2::new(200.0, 200.0), Vec2::new(-17.25, 799.0)] {
                let back = view.to_screen(view.to_model(p));
                assert!(close(back.x, p.x, 1e-3) && close(back.y, p.y, 1e-3), "{p:?} -> {back:?} at zoom {zoom}");
            }
        }
    }

    #[test]
    fn two_notches_in_target_1_21() {
        let mut view = ViewTransform::default();
        view.request_zoom_steps(1);
        view.request_zoom_steps(1);
        assert!(close(view.target_zoom(), 1.21, 1e-5));
        // Visible zoom has not moved yet.
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn notch_out_uses_reciprocal() {
        let mut view = ViewTransform::default();
        view.request_zoom_steps(-1);
        assert!(close(view.target_zoom(), 1.0 / 1.1, 1e-5));
        view.request_zoom_steps(1);
        assert!(close(view.target_zoom(), 1.0, 1e-5));
    }

    #[test]
    fn zoom_target_is_clamped() {
        let mut view = ViewTransform::default();
        view.request_zoom_steps(1000);
        assert_eq!(view.target_zoom(), 10.0);
        view.request_zoom_steps(-5000);
        assert_eq!(view.target_zoom(), 0.1);
    }

    #[test]
    fn smoothing_moves_ten_percent_then_converges() {
        let mut view = ViewTransform::default();
        view.request_zoom_steps(1);
        view.step_smoothing();
        assert!(close(view.zoom(), 1.01, 1e-6));

        for _ in 0..200 {
            view.step_smoothing();
        }
        assert!(view.is_settled());
        assert!(close(view.zoom(), 1.1, 1e-6));
    }

    #[test]
    fn repeated_zoom_intent_converges_within_limits() {
        let mut view = ViewTransform::default();
        for _ in 0..100 {
            view.request_zoom_steps(1);
            view.step_smoothing();
        }
        for _ in 0..500 {
            view.step_smoothing();
        }
        assert_eq!(view.target_zoom(), 10.0);
        assert!(close(view.zoom(), view.target_zoom(), 1e-4));
    }

    #[test]
    fn pan_is_additive() {
        let mut view = ViewTransform::default();
        view.pan_by(IVec2::new(30, -5));
        view.pan_by(IVec2::new(20, -15));
        assert_eq!(view.pan(), IVec2::new(50, -20));
        assert_eq!(view.to_screen_px(Vec2::new(100.0, 100.0)), IVec2::new(150, 80));
    }

    #[test]
    fn reset_restores_identity() {
        let mut view = ViewTransform::default();
        view.pan_by(IVec2::new(9, 9));
        view.request_zoom_steps(3);
        view.step_smoothing();
        view.reset();
        assert_eq!(view, ViewTransform::default());
    }

    #[test]
    fn mapping_ignores_pending_target() {
        let base = ViewTransform::default();
        let mut view = base.clone();
        view.request_zoom_steps(2);
        assert!(view.same_mapping(&base));

        view.step_smoothing();
        assert!(!view.same_mapping(&base));

        let mut panned = base.clone();
        panned.pan_by(IVec2::new(1, 0));
        assert!(!panned.same_mapping(&base));
    }

    #[test]
    fn nan_zoom_clamps_to_min() {
        assert_eq!(ZoomLimits::default().clamp(f32::NAN), 0.1);
        assert!(!ZoomLimits { min: 2.0, max: 1.0 }.is_valid());
    }
}
