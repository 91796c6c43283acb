//! `#[wasm_bindgen]` facade for the browser UI.
//!
//! Holds one session per wasm instance (thread local, matching the single
//! event-loop concurrency model) and reads the clock from
//! `performance.now()`. Exports return `bool` success instead of surfacing
//! errors: from the player's side there is no invalid move, so malformed or
//! out-of-phase actions are dropped silently and leave the state untouched.
//! The UI polls `elapsed_seconds()` on its own display interval; ticks that
//! land after completion just read the frozen final time.

use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::leaderboard::LeaderboardStore;
use crate::session::{GameSession, Phase, PlacementAction};

// RefCell::new isn't const on this toolchain; allow Clippy lint until a const initializer is feasible.
thread_local! {
    static SESSION: std::cell::RefCell<Option<GameSession>> = std::cell::RefCell::new(None);
}

fn with_session<R>(f: impl FnOnce(&mut GameSession) -> R) -> R {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot.get_or_insert_with(|| GameSession::new(LeaderboardStore::seeded()));
        f(session)
    })
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Start a run (board reset, timer started). False if a run is already
/// under way or finished; call `reset_run` first to play again.
#[wasm_bindgen]
pub fn begin_run() -> bool {
    with_session(|s| s.begin(now_ms()).is_ok())
}

/// Place a part into a slot. May complete the run.
#[wasm_bindgen]
pub fn place_part(part_id: &str, slot: usize) -> bool {
    let action = PlacementAction::Place { slot, part_id: part_id.to_string() };
    with_session(|s| s.apply(&action, now_ms()).is_ok())
}

/// Empty a slot, returning its part to the tray.
#[wasm_bindgen]
pub fn remove_part(slot: usize) -> bool {
    let action = PlacementAction::Remove { slot };
    with_session(|s| s.apply(&action, now_ms()).is_ok())
}

/// Discard the current run. The leaderboard persists.
#[wasm_bindgen]
pub fn reset_run() {
    with_session(|s| s.reset());
}

/// Name recorded on the leaderboard when the run completes.
#[wasm_bindgen]
pub fn set_player_name(name: &str) {
    with_session(|s| s.set_player_name(name));
}

/// Elapsed seconds: 0 before the run, live during, frozen after.
#[wasm_bindgen]
pub fn elapsed_seconds() -> f64 {
    with_session(|s| s.elapsed(now_ms()))
}

#[wasm_bindgen]
pub fn is_completed() -> bool {
    with_session(|s| s.phase() == Phase::Completed)
}

/// Final time of the completed run, if the run is complete.
#[wasm_bindgen]
pub fn final_time_seconds() -> Option<f64> {
    with_session(|s| s.final_time())
}

/// One-based leaderboard rank of the completed run, if it made the board.
#[wasm_bindgen]
pub fn final_rank() -> Option<u32> {
    with_session(|s| s.final_rank().map(|r| r as u32 + 1))
}

/// Count of occupied slots, for the progress bar.
#[wasm_bindgen]
pub fn parts_placed() -> u32 {
    with_session(|s| s.board().progress().0 as u32)
}

/// Count of correctly seated slots, for the progress bar.
#[wasm_bindgen]
pub fn parts_correct() -> u32 {
    with_session(|s| s.board().progress().1 as u32)
}

/// Id of the part occupying `slot`, if any.
#[wasm_bindgen]
pub fn slot_part_id(slot: usize) -> Option<String> {
    with_session(|s| s.board().occupant(slot).map(|p| p.id.to_string()))
}

/// Ids of the parts still in the tray, in display order.
#[wasm_bindgen]
pub fn unplaced_part_ids() -> Vec<String> {
    with_session(|s| s.board().unplaced().map(|p| p.id.to_string()).collect())
}

/// Board snapshot (per-slot occupancy plus the unplaced tray) as JSON.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn board_snapshot_json() -> String {
    with_session(|s| serde_json::to_string(&s.snapshot()).unwrap_or_else(|_| "null".into()))
}

/// Top-k leaderboard entries as JSON, best time first.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn leaderboard_json(k: usize) -> String {
    with_session(|s| serde_json::to_string(s.leaderboard_top(k)).unwrap_or_else(|_| "[]".into()))
}
