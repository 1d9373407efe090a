//! Single-writer game session.

use tracing::{debug, info, trace};

use crate::core::{GameObserver, GameSnapshot, GameState};
use crate::types::{GameAction, GameEvent};

/// Owns the engine and serializes every call into it.
///
/// All mutation takes `&mut self`, so ticks, intents and restarts can never
/// interleave. A host that needs to share a session across threads wraps it in
/// a mutex or feeds it from a single event queue.
pub struct Session {
    state: GameState,
    snapshot: GameSnapshot,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        let snapshot = state.snapshot();
        Self {
            state,
            snapshot,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Latest published snapshot. Always reflects a completed call.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Apply an intent, then publish. Returns whether the engine accepted it.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let accepted = self.state.apply_action(action);
        if !accepted {
            trace!(action = action.as_str(), "intent ignored");
        }
        self.publish();
        accepted
    }

    /// Run one fixed step, then publish. Returns false when not running.
    pub fn tick(&mut self) -> bool {
        let advanced = self.state.tick();
        if advanced {
            self.publish();
        }
        advanced
    }

    fn publish(&mut self) {
        let events = self.state.take_events();
        if events.is_empty() {
            return;
        }
        self.state.snapshot_into(&mut self.snapshot);

        for event in &events {
            log_event(event, &self.snapshot);
            for observer in self.observers.iter_mut() {
                observer.on_event(event, &self.snapshot);
            }
        }
    }
}

fn log_event(event: &GameEvent, snap: &GameSnapshot) {
    match *event {
        GameEvent::Started => info!(game_id = snap.game_id, "game started"),
        GameEvent::Paused => debug!(game_id = snap.game_id, "paused"),
        GameEvent::Resumed => debug!(game_id = snap.game_id, "resumed"),
        GameEvent::Turned(d) => trace!(direction = d.as_str(), "turn queued"),
        GameEvent::Moved | GameEvent::StateChanged => {}
        GameEvent::AteFood { score } => debug!(score, length = snap.len(), "ate food"),
        GameEvent::GameOver { final_score, cause } => info!(
            game_id = snap.game_id,
            final_score,
            cause = cause.as_str(),
            ticks = snap.ticks,
            length = snap.len(),
            "game over"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::GameConfig;
    use crate::types::{Cell, Collision, Direction, Phase};

    fn recording() -> (Rc<RefCell<Vec<GameEvent>>>, impl GameObserver) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let observer = move |e: &GameEvent, _: &GameSnapshot| sink.borrow_mut().push(*e);
        (log, observer)
    }

    #[test]
    fn publishes_snapshot_after_each_call() {
        let mut session = Session::new(GameState::new(5));
        assert_eq!(session.snapshot().phase, Phase::Idle);

        session.apply(GameAction::Start);
        assert_eq!(session.snapshot().phase, Phase::Running);
        assert_eq!(session.snapshot().game_id, 1);

        let before = session.snapshot().head();
        session.tick();
        assert_ne!(session.snapshot().head(), before);
        assert_eq!(session.snapshot().ticks, 1);
    }

    #[test]
    fn observers_see_events_in_order() {
        let (log, observer) = recording();
        let state = GameState::with_layout(
            GameConfig::default(),
            1,
            &[Cell::new(380, 0)],
            Direction::Right,
            Some(Cell::new(0, 0)),
        )
        .unwrap();
        let mut session = Session::new(state).with_observer(observer);

        session.tick();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                GameEvent::GameOver {
                    final_score: 0,
                    cause: Collision::Wall
                },
                GameEvent::StateChanged
            ]
        );
    }

    #[test]
    fn observer_receives_terminal_snapshot() {
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        let state = GameState::with_layout(
            GameConfig::default(),
            1,
            &[Cell::new(0, 0)],
            Direction::Up,
            Some(Cell::new(100, 100)),
        )
        .unwrap();
        let mut session = Session::new(state).with_observer(
            move |e: &GameEvent, snap: &GameSnapshot| {
                if matches!(e, GameEvent::GameOver { .. }) {
                    *sink.borrow_mut() = Some(snap.phase);
                }
            },
        );

        session.tick();
        assert_eq!(*seen.borrow(), Some(Phase::Over));
    }

    #[test]
    fn rejected_intent_is_not_published() {
        let (log, observer) = recording();
        let mut session = Session::new(GameState::new(1)).with_observer(observer);

        assert!(!session.apply(GameAction::Turn(Direction::Up)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn tick_while_idle_is_silent() {
        let (log, observer) = recording();
        let mut session = Session::new(GameState::new(1)).with_observer(observer);
        assert!(!session.tick());
        assert!(log.borrow().is_empty());
    }
}
