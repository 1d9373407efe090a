//! Collaborator hook for engine events.

use crate::snapshot::GameSnapshot;
use crate::types::GameEvent;

/// Something that reacts to engine events: audio, persistence, logging.
///
/// Observers run after the engine call that produced the event has completed,
/// and receive the snapshot of that completed state. They cannot reach back
/// into the engine, so a failing observer never affects game state.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, snapshot: &GameSnapshot);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &GameSnapshot),
{
    fn on_event(&mut self, event: &GameEvent, snapshot: &GameSnapshot) {
        self(event, snapshot)
    }
}
