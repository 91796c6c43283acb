//! Rig Builder core crate.
//!
//! Game logic for the timed mining-rig assembly puzzle: part placement,
//! run timing and the top-10 leaderboard. Rendering, drag gestures and the
//! start/play/win page routing live in the host UI layer; it drives this
//! crate through the `web` facade (in the browser) or the plain Rust types
//! (`GameSession` and friends) anywhere else. The core modules never touch
//! browser APIs: every timed operation takes a `now` in milliseconds, so the
//! logic runs under native `cargo test`.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod catalog;
pub mod error;
pub mod leaderboard;
pub mod session;
pub mod timer;
pub mod web;

pub use board::{BoardSnapshot, PlacementBoard};
pub use catalog::{PartDesc, DEFAULT_PLAYER_NAME, RIG_PARTS, SLOT_COUNT, SLOT_LABELS};
pub use error::GameError;
pub use leaderboard::{LeaderboardStore, RunResult, LEADERBOARD_CAPACITY};
pub use session::{GameSession, Phase, PlacementAction};
pub use timer::RunTimer;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
