//! Background score reporting.
//!
//! Bridges the sync game loop with a tokio task that owns all store I/O, so a
//! slow disk never stalls a tick.

use std::env;
use std::path::PathBuf;

use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{GameObserver, GameSnapshot};
use crate::store::{Profile, ScoreStore};
use crate::types::GameEvent;

const DEFAULT_SCORE_FILE: &str = "snake_scores.json";
const DEFAULT_USER: &str = "local";

/// Where scores go and for whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    pub score_path: PathBuf,
    pub user_id: String,
    pub disabled: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            score_path: env::temp_dir().join(DEFAULT_SCORE_FILE),
            user_id: DEFAULT_USER.to_string(),
            disabled: false,
        }
    }
}

impl ReporterConfig {
    pub fn from_env() -> Self {
        let score_path = non_empty_var("SNAKE_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(DEFAULT_SCORE_FILE));
        let user_id = non_empty_var("SNAKE_USER_ID")
            .or_else(|| non_empty_var("USER"))
            .unwrap_or_else(|| DEFAULT_USER.to_string());
        let disabled = non_empty_var("SNAKE_PERSIST_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            score_path,
            user_id,
            disabled,
        }
    }

    pub fn store(&self) -> ScoreStore {
        ScoreStore::new(self.score_path.clone(), &self.user_id)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Running reporter instance.
pub struct ScoreReporter {
    rt: Runtime,
    tx: mpsc::UnboundedSender<u32>,
    profile: watch::Receiver<Profile>,
    writer: JoinHandle<()>,
}

impl ScoreReporter {
    /// Start from environment variables.
    ///
    /// Returns None if `SNAKE_PERSIST_DISABLED` is set or no runtime could be
    /// created; the game runs without persistence in both cases.
    pub fn start_from_env() -> Option<Self> {
        let config = ReporterConfig::from_env();
        if config.disabled {
            info!("score persistence disabled");
            return None;
        }
        match Self::start(config.store()) {
            Ok(reporter) => Some(reporter),
            Err(err) => {
                warn!(%err, "score reporter unavailable");
                None
            }
        }
    }

    pub fn start(store: ScoreStore) -> std::io::Result<Self> {
        let rt = Runtime::new()?;
        let (tx, rx) = mpsc::unbounded_channel();
        let (profile_tx, profile) = watch::channel(Profile::default());
        let writer = rt.spawn(run_writer(store, rx, profile_tx));
        Ok(Self {
            rt,
            tx,
            profile,
            writer,
        })
    }

    /// Queue a finished game's score. Never blocks.
    pub fn report(&self, score: u32) {
        if self.tx.send(score).is_err() {
            warn!(score, "score writer has stopped; score dropped");
        }
    }

    /// Last known profile for this player.
    pub fn profile(&self) -> Profile {
        *self.profile.borrow()
    }

    /// Observer handle that reports on every game over.
    pub fn sink(&self) -> ReportSink {
        ReportSink {
            tx: self.tx.clone(),
        }
    }

    /// Wait for queued scores to be written, then stop the runtime.
    ///
    /// Outstanding [`ReportSink`]s must be dropped first or this waits for them.
    pub fn shutdown(self) -> Profile {
        let Self {
            rt,
            tx,
            profile,
            writer,
        } = self;
        drop(tx);
        if let Err(err) = rt.block_on(writer) {
            warn!(%err, "score writer failed");
        }
        let last = *profile.borrow();
        last
    }
}

/// Writer loop: loads the current profile, then records each score in order.
pub async fn run_writer(
    store: ScoreStore,
    mut rx: mpsc::UnboundedReceiver<u32>,
    profile_tx: watch::Sender<Profile>,
) {
    let initial = store.clone();
    match tokio::task::spawn_blocking(move || initial.profile()).await {
        Ok(Ok(profile)) => {
            debug!(key = store.key(), ?profile, "profile loaded");
            profile_tx.send_replace(profile);
        }
        Ok(Err(err)) => warn!(%err, "could not load profile"),
        Err(err) => warn!(%err, "profile load task failed"),
    }

    while let Some(score) = rx.recv().await {
        let writer = store.clone();
        match tokio::task::spawn_blocking(move || writer.record(score)).await {
            Ok(Ok(profile)) => {
                info!(
                    key = store.key(),
                    score,
                    best = profile.best_score,
                    games = profile.games_played,
                    "score recorded"
                );
                profile_tx.send_replace(profile);
            }
            Ok(Err(err)) => warn!(%err, score, "could not record score"),
            Err(err) => warn!(%err, score, "record task failed"),
        }
    }
}

/// Reports the final score to the writer when a game ends.
#[derive(Debug, Clone)]
pub struct ReportSink {
    tx: mpsc::UnboundedSender<u32>,
}

impl GameObserver for ReportSink {
    fn on_event(&mut self, event: &GameEvent, _snapshot: &GameSnapshot) {
        if let GameEvent::GameOver { final_score, .. } = *event {
            if self.tx.send(final_score).is_err() {
                warn!(final_score, "score writer has stopped; score dropped");
            }
        }
    }
}
