//! Elapsed-time and countdown timer.

use std::time::{Duration, Instant};

/// A stopwatch that can also run as a countdown.
///
/// Start timing with [`Timer::start`]; repeated calls restart at the
/// current time. [`Timer::stop`] pauses it, and a later `start` resumes
/// with the previously elapsed time carried over, like a stopwatch.
/// With a timeout, [`Timer::remaining`] and [`Timer::done`] report the
/// countdown state.
///
/// Reads the monotonic clock only; no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    timeout: Duration,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl Timer {
    /// A stopwatch with no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// A countdown timer that is [`Timer::done`] after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Timer { timeout, ..Self::default() }
    }

    /// Clear any recorded start and stop times.
    pub fn reset(&mut self) -> &mut Self {
        self.started_at = None;
        self.stopped_at = None;
        self
    }

    /// Start (or resume) the timer.
    pub fn start(&mut self) -> &mut Self {
        let carryover = match (self.started_at, self.stopped_at) {
            (Some(started), Some(stopped)) if started < stopped => stopped - started,
            _ => Duration::ZERO,
        };
        self.started_at = Some(Instant::now() - carryover);
        self.stopped_at = None;
        self
    }

    /// Stop the timer, freezing the elapsed time.
    pub fn stop(&mut self) -> &mut Self {
        self.stopped_at = Some(Instant::now());
        self
    }

    /// Whether the timer is currently running.
    pub fn started(&self) -> bool {
        match (self.started_at, self.stopped_at) {
            (Some(_), None) => true,
            (Some(started), Some(stopped)) => stopped < started,
            (None, _) => false,
        }
    }

    /// Whether the timer is stopped (or never started).
    pub fn stopped(&self) -> bool {
        !self.started()
    }

    /// How long the timer has been running.
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_at) {
            (None, _) => Duration::ZERO,
            (Some(started), Some(stopped)) if stopped >= started => stopped - started,
            (Some(started), _) => started.elapsed(),
        }
    }

    /// Time left before the countdown runs out (zero once expired).
    pub fn remaining(&self) -> Duration {
        self.timeout.saturating_sub(self.elapsed())
    }

    /// Whether the countdown has expired.
    pub fn done(&self) -> bool {
        self.elapsed() >= self.timeout
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
