//! Run timer: Idle -> Running -> Stopped, no pause or resume.
//!
//! Input is a caller-supplied clock reading in milliseconds (in the browser,
//! `performance.now()`); output is elapsed seconds. While running, elapsed
//! time is recomputed from the start instant on every call rather than
//! accumulated tick by tick, so display tick cadence can never introduce
//! drift. Once stopped the value is frozen for good.

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerState {
    Idle,
    Running { start_ms: f64 },
    Stopped { elapsed_secs: f64 },
}

#[derive(Clone, Debug)]
pub struct RunTimer {
    state: TimerState,
}

impl Default for RunTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl RunTimer {
    pub fn new() -> Self {
        Self { state: TimerState::Idle }
    }

    /// Record the start instant. Starting anything but a fresh timer is a
    /// state error; there is one run per timer.
    pub fn start(&mut self, now_ms: f64) -> Result<(), GameError> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running { start_ms: now_ms };
                Ok(())
            }
            _ => Err(GameError::illegal("timer already started")),
        }
    }

    /// Elapsed seconds: 0 before start, live while running, frozen after
    /// stop (further calls and later `now_ms` values change nothing).
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        match self.state {
            TimerState::Idle => 0.0,
            TimerState::Running { start_ms } => ((now_ms - start_ms) / 1000.0).max(0.0),
            TimerState::Stopped { elapsed_secs } => elapsed_secs,
        }
    }

    /// Freeze the elapsed value and return it. Stopping an already-stopped
    /// timer returns the frozen value without re-measuring; stopping a timer
    /// that never ran is a state error.
    pub fn stop(&mut self, now_ms: f64) -> Result<f64, GameError> {
        match self.state {
            TimerState::Running { start_ms } => {
                let elapsed_secs = ((now_ms - start_ms) / 1000.0).max(0.0);
                self.state = TimerState::Stopped { elapsed_secs };
                Ok(elapsed_secs)
            }
            TimerState::Stopped { elapsed_secs } => Ok(elapsed_secs),
            TimerState::Idle => Err(GameError::illegal("timer stopped before start")),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, TimerState::Stopped { .. })
    }
}
