//! Named timers for the single-threaded loop.
//!
//! The scheduler never sleeps on its own: the event handler asks how long
//! until the next timer is due, waits on input for at most that long, and then
//! pops whichever timer came due. All methods take `now` so the scheduler can
//! be driven from tests without a real clock.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerId {
    /// Main game clock, one simulation step per firing.
    Tick,
    /// End-game animation frame advance.
    Animation,
    /// Delayed shutdown after the game ends.
    Exit,
}

#[derive(Clone, Debug)]
struct Timer {
    id: TimerId,
    due: Instant,
    period: Option<Duration>,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `id` every `period`, first at `now + period`. Replaces any timer
    /// already registered under the same id.
    pub fn start_interval(&mut self, id: TimerId, period: Duration, now: Instant) {
        self.cancel(id);
        self.timers.push(Timer {
            id,
            due: now + period,
            period: Some(period),
        });
    }

    /// Fire `id` once, `delay` from now.
    pub fn start_once(&mut self, id: TimerId, delay: Duration, now: Instant) {
        self.cancel(id);
        self.timers.push(Timer {
            id,
            due: now + delay,
            period: None,
        });
    }

    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Time left until the earliest timer, zero if one is already overdue.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.due.saturating_duration_since(now))
            .min()
    }

    /// Take the earliest timer that is due at `now`. Intervals are re-armed
    /// from their previous deadline so they do not drift; one-shots are
    /// removed.
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerId> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| t.due)
            .map(|(i, _)| i)?;

        let Timer { id, period, .. } = self.timers[idx].clone();
        match period {
            Some(period) => {
                let timer = &mut self.timers[idx];
                timer.due += period;
                // A stalled loop skips missed firings instead of replaying them.
                if timer.due <= now {
                    timer.due = now + period;
                }
            }
            None => {
                self.timers.remove(idx);
            }
        }
        Some(id)
    }
}
