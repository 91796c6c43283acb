//! Game session: orchestrates board, timer and leaderboard for one player.
//!
//! Phases run NotStarted -> InProgress -> Completed; `reset` returns to
//! NotStarted from anywhere. The session owns its board and timer per run
//! and carries the process-lifetime leaderboard across runs. Completion is
//! detected after every board mutation; the first solved check stops the
//! timer, records the result and fires the one-shot callback, and the board
//! is frozen from then on.

use crate::board::{BoardSnapshot, PlacementBoard};
use crate::catalog::DEFAULT_PLAYER_NAME;
use crate::error::GameError;
use crate::leaderboard::{LeaderboardStore, RunResult};
use crate::timer::RunTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

/// A UI-originated board mutation. Placement and removal are the only moves
/// the puzzle has; legality never varies, only correctness does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementAction {
    Place { slot: usize, part_id: String },
    Remove { slot: usize },
}

type CompletionCallback = Box<dyn FnOnce(f64)>;

pub struct GameSession {
    phase: Phase,
    board: PlacementBoard,
    timer: RunTimer,
    leaderboard: LeaderboardStore,
    player_name: String,
    on_completed: Option<CompletionCallback>,
    final_time: Option<f64>,
    final_rank: Option<usize>,
}

impl GameSession {
    /// The leaderboard is passed in rather than created here: it outlives
    /// any single session/run and is shared with nothing else.
    pub fn new(leaderboard: LeaderboardStore) -> Self {
        Self {
            phase: Phase::NotStarted,
            board: PlacementBoard::new(),
            timer: RunTimer::new(),
            leaderboard,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            on_completed: None,
            final_time: None,
            final_rank: None,
        }
    }

    /// Start a run: fresh board, timer started at `now_ms`.
    pub fn begin(&mut self, now_ms: f64) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::illegal("run already begun; reset first"));
        }
        self.board = PlacementBoard::new();
        self.timer = RunTimer::new();
        self.timer.start(now_ms)?;
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Apply one placement action and re-check completion. Returns `true`
    /// when this action solved the puzzle (fires the completion callback
    /// exactly once). Rejected outside InProgress: the board is frozen once
    /// solved and untouched before `begin`.
    pub fn apply(&mut self, action: &PlacementAction, now_ms: f64) -> Result<bool, GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::illegal("no run in progress"));
        }
        match action {
            PlacementAction::Place { slot, part_id } => self.board.place(*slot, part_id)?,
            PlacementAction::Remove { slot } => self.board.remove(*slot)?,
        }
        if !self.board.is_solved() {
            return Ok(false);
        }
        let final_time = self.timer.stop(now_ms)?;
        let rank = self
            .leaderboard
            .insert(RunResult::new(self.player_name.clone(), final_time));
        self.final_time = Some(final_time);
        self.final_rank = rank;
        self.phase = Phase::Completed;
        if let Some(cb) = self.on_completed.take() {
            cb(final_time);
        }
        Ok(true)
    }

    /// Register the one-shot completion notification. Consumed when fired;
    /// register again after `reset` for the next run.
    pub fn on_completed(&mut self, cb: impl FnOnce(f64) + 'static) {
        self.on_completed = Some(Box::new(cb));
    }

    /// Back to NotStarted, discarding board and timer. The leaderboard and
    /// player name survive; an unfired completion callback does not.
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
        self.board = PlacementBoard::new();
        self.timer = RunTimer::new();
        self.on_completed = None;
        self.final_time = None;
        self.final_rank = None;
    }

    /// Name recorded on the next completed run.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.player_name = if name.trim().is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name
        };
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Elapsed seconds for display: 0 before the run, live during, frozen
    /// at the final time after completion.
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        self.timer.elapsed(now_ms)
    }

    pub fn board(&self) -> &PlacementBoard {
        &self.board
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn leaderboard_top(&self, k: usize) -> &[RunResult] {
        self.leaderboard.top(k)
    }

    pub fn leaderboard(&self) -> &LeaderboardStore {
        &self.leaderboard
    }

    /// Final time of the completed run, if any.
    pub fn final_time(&self) -> Option<f64> {
        self.final_time
    }

    /// Zero-based leaderboard rank earned by the completed run; `None` while
    /// in progress or when the run missed the top list.
    pub fn final_rank(&self) -> Option<usize> {
        self.final_rank
    }
}
