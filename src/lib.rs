//! Monoskate - A side-scrolling skateboarding arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, tricks, scoring)
//! - `input`: Key state tracking with edge detection
//! - `controller`: Idle / playing / game over orchestration
//! - `driver`: Per-frame tick, render and HUD publishing
//! - `renderer`: Read-only projection of simulation state for drawing
//! - `tuning`: Data-driven game balance

pub mod controller;
pub mod driver;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use controller::Game;
pub use driver::FrameDriver;
pub use input::{Action, InputTracker, Key};
pub use snapshot::{HudSnapshot, RenderSnapshot};
pub use tuning::Tuning;

/// Game configuration constants
///
/// All values are per simulated frame; there is no delta-time scaling.
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Y position of the ground line
    pub const GROUND_Y: f32 = 320.0;

    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity applied at jump start (negative is up)
    pub const JUMP_FORCE: f32 = -13.0;
    /// Multiplier applied to upward velocity while jump is released
    pub const JUMP_CUT_DAMPING: f32 = 0.85;
    /// Extra downward velocity per frame while down is held in the air
    pub const FAST_FALL_IMPULSE: f32 = 1.5;

    /// World scroll speed
    pub const INITIAL_SPEED: f32 = 10.5;
    pub const SPEED_INCREMENT: f32 = 0.002;
    pub const MAX_SPEED: f32 = 15.0;
    /// Distance units gained per unit of speed each frame
    pub const DISTANCE_FACTOR: f32 = 0.05;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0; // Includes the board
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_MOVE_SPEED: f32 = 5.0;

    /// Obstacle spawn window in frames (at initial speed)
    pub const SPAWN_DELAY_MIN: f32 = 60.0;
    pub const SPAWN_DELAY_MAX: f32 = 140.0;
    /// Upper bound for tuned spawn delays (one hour of frames)
    pub const MAX_SPAWN_DELAY: f32 = 216_000.0;
    /// Obstacles appear this far past the right edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Obstacle geometry
    pub const BOX_SIZE: f32 = 40.0;
    pub const DOUBLE_BOX_WIDTH_FACTOR: f32 = 2.2; // A bit of a gap
    pub const TALL_BOX_HEIGHT_FACTOR: f32 = 1.5;
    /// Probability of each non-default obstacle type (remainder is BOX)
    pub const DOUBLE_BOX_CHANCE: f32 = 0.2;
    pub const TALL_BOX_CHANCE: f32 = 0.2;

    /// Collision boxes shrink by this many pixels on every side
    pub const HITBOX_INSET: f32 = 5.0;

    /// Scores
    pub const SCORE_BOX: f64 = 10.0;
    pub const SCORE_TRICK_SIMPLE: f64 = 50.0;
    pub const SCORE_TRICK_COMPLEX: f64 = 100.0;

    /// Frames a trick label stays on screen
    pub const TRICK_LABEL_FRAMES: u32 = 60;
    /// Wipeout tumble angle in degrees
    pub const CRASH_ROTATION: f32 = 90.0;

    /// Particles
    pub const PARTICLE_BURST: usize = 20;
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_MAX_SPEED: f32 = 5.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_SIZE_RANGE: f32 = 4.0;
    pub const MAX_PARTICLES: usize = 256;

    /// Ground stripe spacing (parallax is cosmetic only)
    pub const GROUND_STRIPE_SPACING: f32 = 40.0;

    /// Ticks the jump action stays held after a pointer tap
    pub const TAP_JUMP_TICKS: u32 = 6;
}
