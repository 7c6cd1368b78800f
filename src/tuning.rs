//! Game balance parameters
//!
//! Defaults mirror `crate::consts`. A tuning file may override any subset of
//! fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub ground_y: f32,

    // === Player physics ===
    pub gravity: f32,
    pub jump_force: f32,
    pub jump_cut_damping: f32,
    pub fast_fall_impulse: f32,
    pub move_speed: f32,

    // === World speed ===
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub max_speed: f32,
    pub distance_factor: f32,

    // === Obstacles ===
    pub spawn_delay_min: f32,
    pub spawn_delay_max: f32,
    pub double_box_chance: f32,
    pub tall_box_chance: f32,
    /// Pixel inset applied to both boxes before the overlap test
    pub hitbox_inset: f32,

    // === Scoring ===
    pub score_box: f64,
    pub score_trick_simple: f64,
    pub score_trick_complex: f64,
    pub trick_label_frames: u32,

    // === Effects ===
    pub particle_decay: f32,
    pub max_particles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            ground_y: GROUND_Y,

            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            jump_cut_damping: JUMP_CUT_DAMPING,
            fast_fall_impulse: FAST_FALL_IMPULSE,
            move_speed: PLAYER_MOVE_SPEED,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            max_speed: MAX_SPEED,
            distance_factor: DISTANCE_FACTOR,

            spawn_delay_min: SPAWN_DELAY_MIN,
            spawn_delay_max: SPAWN_DELAY_MAX,
            double_box_chance: DOUBLE_BOX_CHANCE,
            tall_box_chance: TALL_BOX_CHANCE,
            hitbox_inset: HITBOX_INSET,

            score_box: SCORE_BOX,
            score_trick_simple: SCORE_TRICK_SIMPLE,
            score_trick_complex: SCORE_TRICK_COMPLEX,
            trick_label_frames: TRICK_LABEL_FRAMES,

            particle_decay: PARTICLE_DECAY,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp every value into a range the simulation can run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.field_width > PLAYER_WIDTH) {
            log::warn!("field_width {} too small, using default", self.field_width);
            self.field_width = defaults.field_width;
        }
        if !(self.ground_y > PLAYER_HEIGHT) {
            log::warn!("ground_y {} too small, using default", self.ground_y);
            self.ground_y = defaults.ground_y;
        }

        self.gravity = non_negative(self.gravity);
        self.fast_fall_impulse = non_negative(self.fast_fall_impulse);
        self.move_speed = non_negative(self.move_speed);
        self.jump_cut_damping = clamp_finite(self.jump_cut_damping, 0.0, 1.0);
        if !self.jump_force.is_finite() || self.jump_force > 0.0 {
            log::warn!("jump_force {} must be upward, using default", self.jump_force);
            self.jump_force = defaults.jump_force;
        }

        if !(self.initial_speed > 0.0 && self.initial_speed.is_finite()) {
            log::warn!("initial_speed {} must be positive, using default", self.initial_speed);
            self.initial_speed = defaults.initial_speed;
        }
        self.speed_increment = non_negative(self.speed_increment);
        if !(self.max_speed >= self.initial_speed) {
            self.max_speed = self.initial_speed;
        }
        self.distance_factor = non_negative(self.distance_factor);

        // Spawn window must stay at least one frame wide on both ends
        self.spawn_delay_min = clamp_finite(self.spawn_delay_min, 1.0, MAX_SPAWN_DELAY);
        self.spawn_delay_max =
            clamp_finite(self.spawn_delay_max, self.spawn_delay_min, MAX_SPAWN_DELAY);

        self.double_box_chance = clamp_finite(self.double_box_chance, 0.0, 1.0);
        self.tall_box_chance = clamp_finite(self.tall_box_chance, 0.0, 1.0 - self.double_box_chance);
        self.hitbox_inset = non_negative(self.hitbox_inset);

        self.score_box = self.score_box.max(0.0);
        self.score_trick_simple = self.score_trick_simple.max(0.0);
        self.score_trick_complex = self.score_trick_complex.max(0.0);

        if !(self.particle_decay > 0.0 && self.particle_decay.is_finite()) {
            log::warn!("particle_decay {} must be positive, using default", self.particle_decay);
            self.particle_decay = defaults.particle_decay;
        }

        self
    }
}

fn non_negative(value: f32) -> f32 {
    clamp_finite(value, 0.0, f32::MAX)
}

/// Clamp, mapping NaN to the lower bound
fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        log::warn!("NaN tuning value replaced with {min}");
        return min;
    }
    if value < min || value > max {
        log::warn!("Tuning value {value} clamped to [{min}, {max}]");
    }
    value.clamp(min, max)
}
