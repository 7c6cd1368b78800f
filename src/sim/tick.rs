//! Fixed-step simulation tick
//!
//! One call advances the world by exactly one frame. Constants are tuned per
//! call, so there is no delta-time input.

use super::collision::inset_overlap;
use super::state::{GameEvent, GameState, GameStatus, Obstacle, ObstacleKind, Trick};
use crate::consts::*;
use crate::tuning::Tuning;

/// Held controls for a single tick (sampled before the step)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub down: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.expire_events();

    match state.status {
        GameStatus::Idle => return,
        // Let the crash burst finish; everything else stays frozen
        GameStatus::GameOver => {
            update_particles(state);
            return;
        }
        GameStatus::Playing => {}
    }

    update_player(state, input);

    // Label expires on its own; the trick itself lasts until landing
    let player = &mut state.player;
    if player.trick_timer > 0 {
        player.trick_timer -= 1;
        if player.trick_timer == 0 {
            player.trick_label = None;
        }
    }

    // Speed progression is the only difficulty ramp
    let tuning = &state.tuning;
    state.speed = (state.speed + tuning.speed_increment).min(tuning.max_speed);
    state.distance += f64::from(state.speed * tuning.distance_factor);

    if state.frame >= state.next_spawn {
        spawn_obstacle(state);
    }

    update_obstacles(state);

    state.ground_offset = (state.ground_offset + state.speed).rem_euclid(GROUND_STRIPE_SPACING);
    state.frame += 1;

    update_particles(state);
}

/// Horizontal movement, jump, jump cut, fast fall, gravity and landing
fn update_player(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    if input.right {
        player.pos.x += tuning.move_speed;
    }
    if input.left {
        player.pos.x -= tuning.move_speed;
    }
    let max_x = (tuning.field_width - player.size.x).max(0.0);
    player.pos.x = player.pos.x.clamp(0.0, max_x);

    if input.jump && !player.is_jumping {
        player.dy = tuning.jump_force;
        player.is_jumping = true;
        player.current_trick = Trick::None;
    }

    // Variable jump height
    if player.is_jumping && player.dy < 0.0 && !input.jump {
        player.dy *= tuning.jump_cut_damping;
    }

    if player.is_jumping && input.down {
        player.dy += tuning.fast_fall_impulse;
    }

    player.dy += tuning.gravity;
    player.pos.y += player.dy;

    if player.bottom() >= tuning.ground_y {
        player.land(tuning.ground_y);
    }
}

/// Frames until the next spawn
///
/// The window shrinks with speed so on-screen spacing stays roughly
/// constant. Never less than one frame.
pub fn spawn_delay(roll: f32, speed: f32, tuning: &Tuning) -> u64 {
    let ratio = (speed / tuning.initial_speed).max(f32::EPSILON);
    let min = tuning.spawn_delay_min / ratio;
    let max = (tuning.spawn_delay_max / ratio).max(min);
    let delay = (roll * (max - min + 1.0) + min).floor();
    if delay.is_finite() { delay.max(1.0) as u64 } else { 1 }
}

/// Spawn one obstacle past the right edge and schedule the next
fn spawn_obstacle(state: &mut GameState) {
    let kind = ObstacleKind::from_roll(state.roll(), &state.tuning);
    let id = state.next_entity_id();
    let x = state.tuning.field_width + SPAWN_MARGIN;
    state.obstacles.push(Obstacle::on_ground(id, kind, x, state.tuning.ground_y));

    let roll = state.roll();
    let delay = spawn_delay(roll, state.speed, &state.tuning);
    state.next_spawn = state.frame.saturating_add(delay);
    log::debug!("Spawned {:?} #{} at frame {}, next in {}", kind, id, state.frame, delay);
}

/// Scroll obstacles, test for a hit and cull the ones that left the field
fn update_obstacles(state: &mut GameState) {
    let player_box = state.player.bounds();
    let inset = state.tuning.hitbox_inset;
    let speed = state.speed;

    let mut hit = false;
    let mut cleared = Vec::new();
    state.obstacles.retain_mut(|obs| {
        obs.pos.x -= speed;
        if inset_overlap(&player_box, &obs.bounds(), inset) {
            hit = true;
        }
        if obs.right() < 0.0 {
            cleared.push((obs.id, obs.kind));
            false
        } else {
            true
        }
    });

    // Boxes that left the field were passed before the hit
    for (id, kind) in cleared {
        state.score += state.tuning.score_box;
        state.events.push(GameEvent::ObstacleCleared { id, kind });
        log::debug!("Cleared {:?} #{}", kind, id);
    }

    // Only the first hit counts; crash() ignores repeats
    if hit {
        state.crash();
    }
}

/// Integrate and fade particles, dropping dead ones
fn update_particles(state: &mut GameState) {
    let decay = state.tuning.particle_decay;
    state.particles.retain_mut(|p| {
        p.pos += p.vel;
        p.life -= decay;
        p.life > 0.0
    });
}

/// Place a ground-resting obstacle directly (used by hosts for scripted
/// layouts and by tests)
pub fn place_obstacle(state: &mut GameState, kind: ObstacleKind, x: f32) -> u32 {
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle::on_ground(id, kind, x, state.tuning.ground_y));
    id
}
