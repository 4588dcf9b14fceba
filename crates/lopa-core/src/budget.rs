use std::time::{Duration, Instant};

/// Fractional seconds to a duration, total: negative or NaN collapses
/// to zero, overflow (including infinity) saturates to `Duration::MAX`.
pub fn clamp_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(if secs > 0.0 {
        Duration::MAX
    } else {
        Duration::ZERO
    })
}

/// Monotonic time budget for a search loop.
///
/// `expired` is checked once at the top of each outer iteration: a walk
/// in flight is never interrupted, so the budget is advisory between
/// attempts rather than preemptive. `reset` restarts the window, which
/// is how the stagnation budget extends on every improvement.
#[derive(Clone, Debug)]
pub struct BudgetClock {
    started: Instant,
    limit: Duration,
}

impl BudgetClock {
    pub fn new(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    /// Budget from fractional seconds. Non-positive values expire
    /// immediately.
    pub fn from_secs(secs: f64) -> Self {
        Self::new(clamp_secs(secs))
    }

    pub fn expired(&self) -> bool {
        self.started.elapsed() >= self.limit
    }

    pub fn reset(&mut self) {
        self.started = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
