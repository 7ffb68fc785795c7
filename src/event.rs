use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::clock::{Scheduler, TimerId};

/// Upper bound on a single input wait when no timer is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub enum Event {
    Key(KeyEvent),
    Tick,
    Frame,
    Exit,
}

impl From<TimerId> for Event {
    fn from(id: TimerId) -> Self {
        match id {
            TimerId::Tick => Event::Tick,
            TimerId::Animation => Event::Frame,
            TimerId::Exit => Event::Exit,
        }
    }
}

/// Multiplexes terminal key presses with the scheduler's timers on the
/// calling thread.
#[derive(Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Block until a timer comes due or a key is pressed.
    pub fn next(&mut self, timers: &mut Scheduler) -> io::Result<Event> {
        loop {
            let now = Instant::now();
            if let Some(id) = timers.pop_due(now) {
                return Ok(id.into());
            }

            let timeout = timers.until_next(now).unwrap_or(IDLE_POLL);
            if event::poll(timeout)? {
                if let crossterm::event::Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(Event::Key(key));
                    }
                }
            }
        }
    }
}
