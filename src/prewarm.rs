//! One-shot prewarm coordination.
//!
//! ```text
//! NotStarted ──ensure()──► InProgress ──job returns/panics──► Completed
//!                              ▲
//!          concurrent ensure() ┘ blocks until Completed
//! ```

use std::panic::{self, AssertUnwindSafe};

use parking_lot::{Condvar, Mutex};

/// Progress of the one prewarm pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrewarmState {
    NotStarted,
    InProgress,
    Completed,
}

/// Runs a job exactly once; every other caller waits for it to finish.
pub struct PrewarmCoordinator {
    state: Mutex<PrewarmState>,
    done: Condvar,
}

impl Default for PrewarmCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl PrewarmCoordinator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PrewarmState::NotStarted),
            done: Condvar::new(),
        }
    }

    pub fn state(&self) -> PrewarmState {
        *self.state.lock()
    }

    /// Run `job` if this is the first call, otherwise wait for the first
    /// call's job to finish.
    ///
    /// Returns `true` for the caller that ran the job. A panicking job
    /// still completes the pass and releases waiters before the panic
    /// propagates to its caller.
    pub fn ensure(&self, job: impl FnOnce()) -> bool {
        {
            let mut state = self.state.lock();
            match *state {
                PrewarmState::Completed => return false,
                PrewarmState::InProgress => {
                    while *state != PrewarmState::Completed {
                        self.done.wait(&mut state);
                    }
                    return false;
                }
                PrewarmState::NotStarted => *state = PrewarmState::InProgress,
            }
        }

        let result = panic::catch_unwind(AssertUnwindSafe(job));

        *self.state.lock() = PrewarmState::Completed;
        self.done.notify_all();

        if let Err(payload) = result {
            panic::resume_unwind(payload);
        }
        true
    }
}
