//! Background counter agent
//!
//! A headless rendition of the responsive-display-plus-background-worker
//! shape: a dedicated thread periodically publishes a counter value and
//! steps it up or down. Callers steer the agent through two flags, each
//! with a single writer and a single reader, so visibility is all the
//! flags need; there is no mutual exclusion anywhere in the agent.

use std::panic;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Counting direction of a [`CounterAgent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increment the counter each period
    Up,
    /// Decrement the counter each period
    Down,
}

struct Shared {
    /// Last published counter value
    value: AtomicI64,
    /// Written once by [`CounterAgent::stop`]; the agent only reads it
    stop: AtomicBool,
    /// Direction flag; written by the controlling side, read by the agent
    upward: AtomicBool,
}

/// Handle to a background thread stepping a counter every period
///
/// The agent publishes the counter before each step, so [`value`]
/// observes the progression with at most one period of lag.
///
/// [`value`]: CounterAgent::value
pub struct CounterAgent {
    shared: Arc<Shared>,
    handle: JoinHandle<i64>,
}

impl CounterAgent {
    /// Spawn the agent thread
    ///
    /// Each iteration publishes the current counter, steps it in the
    /// flagged direction, then sleeps for `period`.
    pub fn spawn(period: Duration) -> Self {
        let shared = Arc::new(Shared {
            value: AtomicI64::new(0),
            stop: AtomicBool::new(false),
            upward: AtomicBool::new(true),
        });

        let agent_shared = Arc::clone(&shared);
        let handle = thread::spawn(move || {
            let mut counter: i64 = 0;
            while !agent_shared.stop.load(Ordering::Acquire) {
                agent_shared.value.store(counter, Ordering::Release);
                if agent_shared.upward.load(Ordering::Acquire) {
                    counter += 1;
                } else {
                    counter -= 1;
                }
                thread::sleep(period);
            }
            counter
        });

        log::debug!("counter agent started, period {period:?}");
        Self { shared, handle }
    }

    /// Last value the agent published
    pub fn value(&self) -> i64 {
        self.shared.value.load(Ordering::Acquire)
    }

    /// Flip the counting direction
    ///
    /// Takes effect within one period. The flag has no second writer.
    pub fn set_direction(&self, direction: Direction) {
        self.shared
            .upward
            .store(matches!(direction, Direction::Up), Ordering::Release);
    }

    /// Signal the agent to stop and wait for it to finish
    ///
    /// The join blocks until the agent thread has genuinely exited;
    /// there is no way to interrupt it. Returns the final counter. A
    /// panic on the agent thread is a defect and is rethrown here.
    pub fn stop(self) -> i64 {
        self.shared.stop.store(true, Ordering::Release);
        log::debug!("counter agent stopping");
        match self.handle.join() {
            Ok(counter) => counter,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}
