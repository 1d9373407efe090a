//! Frame pacing for the terminal loop.

use crate::core::GameSnapshot;

/// Skips redraws of a board that cannot change on its own.
///
/// While the snake is moving every frame is drawn. In every other phase the
/// board only changes in response to input, so a frame is drawn when the
/// snapshot fingerprint differs from the last drawn one, or once per
/// `idle_refresh_ms` as a keep-alive (terminal resize, stray output).
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_refresh_ms: u64,
    last_drawn_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_refresh_ms: u64) -> Self {
        Self {
            idle_refresh_ms,
            last_drawn_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, moving: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_drawn_ms) >= self.idle_refresh_ms;

        if moving || changed || stale {
            self.last_drawn_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snap.fingerprint(), snap.phase.is_running())
    }

    /// Force the next call to draw.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
