use std::time::Instant;

use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::clock::{Scheduler, TimerId};
use crate::game::geometry::{ANIMATION_RATE, EXIT_DELAY, TICK_RATE};
use crate::game::{input, step, Command, GameState};
use crate::ui::animation::Animation;

/// The loop driver: owns the game state, the alien-fire RNG and the timers
/// that move things along.
pub struct App {
    pub should_quit: bool,
    pub state: GameState,
    pub animation: Option<Animation>,
    pub timers: Scheduler,
    rng: StdRng,
}

impl App {
    pub fn new(rng: StdRng) -> Self {
        Self {
            should_quit: false,
            state: GameState::new(),
            animation: None,
            timers: Scheduler::new(),
            rng,
        }
    }

    /// Arm the main clock and run the opening step on tick zero.
    pub fn start(&mut self, now: Instant) {
        self.timers.start_interval(TimerId::Tick, TICK_RATE, now);
        self.run_step(now);
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.state.game_over {
            return;
        }
        self.state.tick += 1;
        self.run_step(now);
    }

    pub fn on_frame(&mut self) {
        if let Some(animation) = &mut self.animation {
            animation.advance();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match Command::from_key(key) {
            Some(Command::Quit) => self.quit(),
            Some(command) => input::apply(&mut self.state, command),
            None => {}
        }
    }

    /// The end-game delay ran out.
    pub fn on_exit(&mut self) {
        info!(score = self.state.score, "exiting after game over");
        self.quit();
    }

    fn quit(&mut self) {
        self.timers.cancel_all();
        self.should_quit = true;
    }

    fn run_step(&mut self, now: Instant) {
        if step(&mut self.state, &mut self.rng).is_some() {
            self.enter_game_over(now);
        }
    }

    fn enter_game_over(&mut self, now: Instant) {
        let Some(outcome) = self.state.outcome() else {
            return;
        };
        debug!(?outcome, "switching to end-game animation");
        self.timers.cancel(TimerId::Tick);
        self.timers.start_interval(TimerId::Animation, ANIMATION_RATE, now);
        self.timers.start_once(TimerId::Exit, EXIT_DELAY, now);
        self.animation = Some(Animation::new(outcome));
    }
}
