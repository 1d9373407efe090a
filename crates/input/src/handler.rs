//! Phase-aware input handler for terminal environments.
//!
//! While no game is in progress any key starts one. During play keys map to
//! turns and the start/pause toggle. Terminal auto-repeat is ignored, so one
//! physical press yields at most one intent.
//!
//! Terminals without key event types report a held key as a stream of fresh
//! presses. Turns are idempotent, but a stream of `Start`s would flicker the
//! game between running and paused, so a `Start` that follows another within
//! the toggle guard is dropped. The guard slides: holding the key keeps it shut.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{GameAction, Phase};

// Keys still being mashed when the snake dies should not restart instantly.
const DEFAULT_RESTART_GRACE_MS: u64 = 400;
// Longer than the usual auto-repeat delay (250-500ms).
const DEFAULT_TOGGLE_GUARD_MS: u64 = 600;

#[derive(Debug, Clone)]
pub struct InputHandler {
    last_phase: Phase,
    over_since: Option<Instant>,
    restart_grace: Duration,
    last_start: Option<Instant>,
    toggle_guard: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_phase: Phase::Idle,
            over_since: None,
            restart_grace: Duration::from_millis(DEFAULT_RESTART_GRACE_MS),
            last_start: None,
            toggle_guard: Duration::from_millis(DEFAULT_TOGGLE_GUARD_MS),
        }
    }

    pub fn with_toggle_guard_ms(mut self, guard_ms: u64) -> Self {
        self.toggle_guard = Duration::from_millis(guard_ms);
        self
    }

    pub fn toggle_guard(&self) -> Duration {
        self.toggle_guard
    }

    pub fn with_restart_grace_ms(mut self, grace_ms: u64) -> Self {
        self.restart_grace = Duration::from_millis(grace_ms);
        self
    }

    pub fn restart_grace(&self) -> Duration {
        self.restart_grace
    }

    /// Translate a key event given the current engine phase.
    pub fn handle_key(&mut self, key: KeyEvent, phase: Phase) -> Option<GameAction> {
        self.handle_key_at(key, phase, Instant::now())
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, phase: Phase, now: Instant) -> Option<GameAction> {
        self.observe_phase_at(phase, now);

        if key.kind != KeyEventKind::Press {
            return None;
        }

        let action = match phase {
            Phase::Idle => Some(GameAction::Start),
            Phase::Over => {
                let since = self.over_since.unwrap_or(now);
                if now.saturating_duration_since(since) < self.restart_grace {
                    None
                } else {
                    Some(GameAction::Start)
                }
            }
            Phase::Running | Phase::Paused => handle_key_event(key),
        };
        self.guard_start(action, now)
    }

    fn guard_start(&mut self, action: Option<GameAction>, now: Instant) -> Option<GameAction> {
        if !matches!(action, Some(GameAction::Start)) {
            return action;
        }
        let held = self
            .last_start
            .is_some_and(|t| now.saturating_duration_since(t) < self.toggle_guard);
        self.last_start = Some(now);
        if held {
            None
        } else {
            action
        }
    }

    /// Track phase transitions (call once per frame so the grace timer starts
    /// when the game ends, not at the next key press).
    pub fn observe_phase_at(&mut self, phase: Phase, now: Instant) {
        if phase == Phase::Over && self.last_phase != Phase::Over {
            self.over_since = Some(now);
        } else if phase != Phase::Over {
            self.over_since = None;
        }
        self.last_phase = phase;
    }

    pub fn observe_phase(&mut self, phase: Phase) {
        self.observe_phase_at(phase, Instant::now());
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
