//! Terminal bell sound effects.

use std::io::{self, Write};

use tracing::warn;

use crate::core::{GameObserver, GameSnapshot};
use crate::types::GameEvent;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell when food is eaten and when the game ends.
///
/// Write failures are logged and otherwise ignored; sound never interrupts
/// play.
pub struct BellAudio<W: Write> {
    out: W,
    enabled: bool,
}

impl BellAudio<io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self) {
        if !self.enabled {
            return;
        }
        let res = self.out.write_all(BEL).and_then(|_| self.out.flush());
        if let Err(err) = res {
            warn!(%err, "bell write failed");
        }
    }
}

impl<W: Write> GameObserver for BellAudio<W> {
    fn on_event(&mut self, event: &GameEvent, _snapshot: &GameSnapshot) {
        if matches!(event, GameEvent::AteFood { .. } | GameEvent::GameOver { .. }) {
            self.ring();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::{Collision, Direction};

    fn snap() -> GameSnapshot {
        GameState::new(1).snapshot()
    }

    #[test]
    fn rings_on_food_and_game_over_only() {
        let mut audio = BellAudio::new(Vec::new(), true);
        let s = snap();

        audio.on_event(&GameEvent::Started, &s);
        audio.on_event(&GameEvent::Moved, &s);
        audio.on_event(&GameEvent::Turned(Direction::Up), &s);
        audio.on_event(&GameEvent::AteFood { score: 3 }, &s);
        audio.on_event(
            &GameEvent::GameOver {
                final_score: 3,
                cause: Collision::Wall,
            },
            &s,
        );

        assert_eq!(audio.into_inner(), b"\x07\x07".to_vec());
    }

    #[test]
    fn disabled_is_silent() {
        let mut audio = BellAudio::new(Vec::new(), false);
        audio.on_event(&GameEvent::AteFood { score: 3 }, &snap());
        assert!(!audio.is_enabled());
        assert!(audio.into_inner().is_empty());
    }
}
