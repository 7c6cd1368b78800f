//! Session orchestration
//!
//! `Game` owns the simulation state and the input tracker. Host key and
//! pointer events go through it; status transitions happen on key edges,
//! never on polled state.
//!
//! Idle --start--> Playing --crash--> GameOver --restart--> Idle

use crate::consts::TAP_JUMP_TICKS;
use crate::input::{Action, InputTracker, Key};
use crate::sim::{self, GameEvent, GameState, GameStatus, Trick};
use crate::snapshot::{HudSnapshot, RenderSnapshot};
use crate::tuning::Tuning;

/// A play session
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: InputTracker,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("New session (seed {seed})");
        Self {
            state: GameState::with_tuning(seed, tuning),
            input: InputTracker::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Handle a host key-down. Auto-repeat (already held) is ignored for
    /// transitions and tricks. Returns the trick started, if any.
    pub fn key_down(&mut self, key: Key) -> Option<Trick> {
        if !self.input.press(key) {
            return None;
        }

        match self.state.status {
            GameStatus::Idle if key.starts_run() => {
                self.start_run();
                None
            }
            GameStatus::GameOver if key.leaves_game_over() => {
                self.return_to_idle();
                None
            }
            GameStatus::Playing => sim::handle_trick_key(&mut self.state, key, &self.input),
            _ => None,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Key events by host name; unknown keys are ignored
    pub fn key_down_named(&mut self, name: &str) -> Option<Trick> {
        Key::from_name(name).and_then(|key| self.key_down(key))
    }

    pub fn key_up_named(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.key_up(key);
        }
    }

    /// Click/tap: start, leave game over, or a short jump press
    pub fn pointer(&mut self) {
        match self.state.status {
            GameStatus::Idle => self.start_run(),
            GameStatus::GameOver => self.return_to_idle(),
            GameStatus::Playing => self.input.pulse(Action::Jump, TAP_JUMP_TICKS),
        }
    }

    /// Host lost focus; forget held keys so nothing sticks
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    /// Advance one frame with the current held state
    pub fn tick(&mut self) {
        let input = self.input.sample();
        sim::tick(&mut self.state, &input);
        self.input.end_tick();
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::of(&self.state)
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot::of(&self.state)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    fn start_run(&mut self) {
        self.state.reset();
        self.state.status = GameStatus::Playing;
        self.state.events.push(GameEvent::RunStarted);
        log::info!("Run started");
    }

    /// Restart goes back to the title screen; a second input starts the run
    fn return_to_idle(&mut self) {
        self.state.reset();
        self.state.status = GameStatus::Idle;
        self.state.events.push(GameEvent::ReturnedToIdle);
        log::info!("Returned to idle");
    }
}
