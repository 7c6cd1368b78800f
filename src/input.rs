//! Control key tracking
//!
//! Key events arrive asynchronously from the host. The tracker keeps the
//! held set between frames and reports edges (not-held -> held) on press so
//! one-shot actions never fire from key auto-repeat.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    W,
    A,
    S,
    D,
}

/// Logical actions keys are bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Jump,
    Down,
    Confirm,
}

impl Key {
    /// Parse a host key name (DOM `KeyboardEvent.key` style)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            _ => None,
        }
    }

    /// Action this key is an alias for
    pub fn action(self) -> Action {
        match self {
            Key::ArrowUp | Key::W | Key::Space => Action::Jump,
            Key::ArrowDown | Key::S => Action::Down,
            Key::ArrowLeft | Key::A => Action::Left,
            Key::ArrowRight | Key::D => Action::Right,
            Key::Enter => Action::Confirm,
        }
    }

    /// Keys that start a run from the title screen
    pub fn starts_run(self) -> bool {
        matches!(self, Key::Space | Key::ArrowUp)
    }

    /// Keys that leave the game over screen
    pub fn leaves_game_over(self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }
}

/// Held-state map plus timed pulses
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<Key>,
    /// Ticks remaining per pulsed action (pointer taps)
    pulses: Vec<(Action, u32)>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key down. Returns true only on the transition to held.
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// True if any alias of the action is held, or the action is pulsed
    pub fn is_held(&self, action: Action) -> bool {
        self.held.iter().any(|k| k.action() == action)
            || self.pulses.iter().any(|&(a, ticks)| a == action && ticks > 0)
    }

    /// Hold an action for a fixed number of ticks without a key
    pub fn pulse(&mut self, action: Action, ticks: u32) {
        if let Some(entry) = self.pulses.iter_mut().find(|(a, _)| *a == action) {
            entry.1 = entry.1.max(ticks);
        } else {
            self.pulses.push((action, ticks));
        }
    }

    /// Advance pulse timers by one tick
    pub fn end_tick(&mut self) {
        for (_, ticks) in &mut self.pulses {
            *ticks = ticks.saturating_sub(1);
        }
        self.pulses.retain(|&(_, ticks)| ticks > 0);
    }

    /// Drop all held keys and pulses (focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pulses.clear();
    }

    /// Snapshot the held state for one simulation step
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.is_held(Action::Left),
            right: self.is_held(Action::Right),
            jump: self.is_held(Action::Jump),
            down: self.is_held(Action::Down),
        }
    }
}
