//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`, owned by the
//! controller and passed by reference into `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Title / attract screen
    #[default]
    Idle,
    /// Simulation running
    Playing,
    /// Crashed; physics frozen, particles still fading
    GameOver,
}

/// Airborne trick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Trick {
    #[default]
    None,
    Indy,
    Kickflip,
    ThreeSixtyFlip,
    Superman,
}

impl Trick {
    /// Text shown above the skater
    pub fn label(self) -> Option<&'static str> {
        match self {
            Trick::None => None,
            Trick::Indy => Some("INDY GRAB!"),
            Trick::Kickflip => Some("KICKFLIP!"),
            Trick::ThreeSixtyFlip => Some("360 FLIP!"),
            Trick::Superman => Some("SUPERMAN!"),
        }
    }

    /// Two-key combos override whatever trick is in progress
    pub fn is_combo(self) -> bool {
        matches!(self, Trick::ThreeSixtyFlip | Trick::Superman)
    }

    pub fn points(self, tuning: &Tuning) -> f64 {
        match self {
            Trick::None => 0.0,
            Trick::Indy | Trick::Kickflip => tuning.score_trick_simple,
            Trick::ThreeSixtyFlip | Trick::Superman => tuning.score_trick_complex,
        }
    }
}

/// The skater
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub dy: f32,
    pub is_jumping: bool,
    /// Degrees; only set by the wipeout tumble
    pub rotation: f32,
    pub current_trick: Trick,
    pub trick_label: Option<String>,
    /// Frames left to show the label
    pub trick_timer: u32,
}

impl Player {
    /// Standing on the ground at the start position, kept inside the field
    pub fn new(tuning: &Tuning) -> Self {
        let max_x = (tuning.field_width - PLAYER_WIDTH).max(0.0);
        Self {
            pos: Vec2::new(PLAYER_START_X.min(max_x), tuning.ground_y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            dy: 0.0,
            is_jumping: false,
            rotation: 0.0,
            current_trick: Trick::None,
            trick_label: None,
            trick_timer: 0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Bottom-center, where the board is
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.bottom())
    }

    /// Snap onto the ground and clear all airborne state
    pub fn land(&mut self, ground_y: f32) {
        self.pos.y = ground_y - self.size.y;
        self.dy = 0.0;
        self.is_jumping = false;
        self.rotation = 0.0;
        self.current_trick = Trick::None;
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[default]
    Box,
    DoubleBox,
    TallBox,
}

impl ObstacleKind {
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Box => Vec2::splat(BOX_SIZE),
            ObstacleKind::DoubleBox => Vec2::new(BOX_SIZE * DOUBLE_BOX_WIDTH_FACTOR, BOX_SIZE),
            ObstacleKind::TallBox => Vec2::new(BOX_SIZE, BOX_SIZE * TALL_BOX_HEIGHT_FACTOR),
        }
    }

    /// Pick a type from a uniform roll in [0, 1)
    pub fn from_roll(roll: f32, tuning: &Tuning) -> Self {
        if roll >= 1.0 - tuning.double_box_chance {
            ObstacleKind::DoubleBox
        } else if roll >= 1.0 - tuning.double_box_chance - tuning.tall_box_chance {
            ObstacleKind::TallBox
        } else {
            ObstacleKind::Box
        }
    }
}

/// A box the skater has to clear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Obstacle resting on the ground with its left edge at `x`
    pub fn on_ground(id: u32, kind: ObstacleKind, x: f32, ground_y: f32) -> Self {
        let size = kind.size();
        Self {
            id,
            pos: Vec2::new(x, ground_y - size.y),
            size,
            kind,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 1-0, decreases over time
    pub size: f32,
}

/// Notifications for hosts that want push updates (sound, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    TrickLanded { trick: Trick, points: f64 },
    ObstacleCleared { id: u32, kind: ObstacleKind },
    Crashed { score: u64, distance: u64 },
    ReturnedToIdle,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub status: GameStatus,
    pub tuning: Tuning,
    pub player: Player,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Horizontal world speed (pixels per frame)
    pub speed: f32,
    pub distance: f64,
    /// Internal score; surfaced floored
    pub score: f64,
    /// Frames simulated in the current run
    pub frame: u64,
    /// Frame at which the next obstacle spawns
    pub next_spawn: u64,
    /// Ground stripe scroll, in [0, stripe spacing)
    pub ground_offset: f32,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Leading events already pending at the previous tick
    #[serde(skip)]
    stale_events: usize,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new idle game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            status: GameStatus::Idle,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            particles: Vec::new(),
            speed: tuning.initial_speed,
            distance: 0.0,
            score: 0.0,
            frame: 0,
            next_spawn: 0,
            ground_offset: 0.0,
            events: Vec::new(),
            stale_events: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        }
    }

    /// Restore the start-of-run world. Status and RNG are left alone.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.particles.clear();
        self.speed = self.tuning.initial_speed;
        self.distance = 0.0;
        self.score = 0.0;
        self.frame = 0;
        self.next_spawn = 0;
        self.ground_offset = 0.0;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Uniform roll in [0, 1)
    pub fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.floor().max(0.0) as u64
    }

    pub fn display_distance(&self) -> u64 {
        self.distance.floor().max(0.0) as u64
    }

    /// Spray a burst of particles from `origin`
    pub fn spawn_burst(&mut self, origin: Vec2) {
        for _ in 0..PARTICLE_BURST {
            if self.particles.len() >= self.tuning.max_particles {
                break;
            }
            let vel = Vec2::new(
                (self.roll() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
                (self.roll() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            );
            let size = self.roll() * PARTICLE_SIZE_RANGE + PARTICLE_MIN_SIZE;
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: 1.0,
                size,
            });
        }
    }

    /// Start (or override with) a trick: label, timer, points and a burst
    pub fn trigger_trick(&mut self, trick: Trick) {
        let points = trick.points(&self.tuning);
        self.player.current_trick = trick;
        self.player.trick_label = trick.label().map(str::to_owned);
        self.player.trick_timer = self.tuning.trick_label_frames;
        self.score += points;
        let feet = self.player.feet();
        self.spawn_burst(feet);
        self.events.push(GameEvent::TrickLanded { trick, points });
        log::debug!("Trick {:?} (+{}) at frame {}", trick, points, self.frame);
    }

    /// Wipeout: freeze, tumble, burst
    pub fn crash(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.status = GameStatus::GameOver;
        self.player.rotation = CRASH_ROTATION;
        let center = self.player.center();
        self.spawn_burst(center);
        let (score, distance) = (self.display_score(), self.display_distance());
        self.events.push(GameEvent::Crashed { score, distance });
        log::info!("Crashed at frame {}: score={} distance={}m", self.frame, score, distance);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.stale_events = 0;
        std::mem::take(&mut self.events)
    }

    /// Called once per tick. Events nobody drained for a whole frame are
    /// dropped, so the queue never holds more than two frames' worth.
    pub fn expire_events(&mut self) {
        let stale = self.stale_events.min(self.events.len());
        if stale > 0 {
            log::trace!("Dropping {} undrained events", stale);
            self.events.drain(..stale);
        }
        self.stale_events = self.events.len();
    }
}
