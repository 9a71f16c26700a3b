use std::time::{Duration, Instant};

/// Caps the frame rate of a redraw-on-demand loop.
///
/// The runtime asks [`FramePacer::due`] before requesting a redraw and
/// reports each presented frame with [`FramePacer::frame_presented`]. Deadlines
/// advance in fixed steps; after a stall the schedule restarts from the
/// present instead of rendering a burst of catch-up frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    /// Creates a pacer for `target_fps` frames per second; the first frame is
    /// due immediately. `target_fps` of zero is treated as one.
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    pub fn starting_at(target_fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps.max(1),
            next: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `None` if a frame is due at `now`, or the instant the next one is.
    pub fn due(&self, now: Instant) -> Option<Instant> {
        (now < self.next).then_some(self.next)
    }

    /// Records that a frame was presented at `now`.
    pub fn frame_presented(&mut self, now: Instant) {
        let scheduled = self.next + self.interval;
        self.next = if scheduled <= now { now + self.interval } else { scheduled };
    }
}
