//! Read-only views handed to the renderer and HUD each frame

use serde::Serialize;

use crate::sim::{GameState, GameStatus, Obstacle, Particle, Player};

/// Everything needed to draw a frame, borrowed from the simulation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderSnapshot<'a> {
    pub status: GameStatus,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub particles: &'a [Particle],
    pub ground_offset: f32,
    pub frame: u64,
    /// Field geometry from the active tuning
    pub field_width: f32,
    pub ground_y: f32,
}

impl<'a> RenderSnapshot<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            status: state.status,
            player: &state.player,
            obstacles: &state.obstacles,
            particles: &state.particles,
            ground_offset: state.ground_offset,
            frame: state.frame,
            field_width: state.tuning.field_width,
            ground_y: state.tuning.ground_y,
        }
    }
}

/// Values polled by the score overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub distance: u64,
    pub status: GameStatus,
}

impl HudSnapshot {
    pub fn of(state: &GameState) -> Self {
        Self {
            score: state.display_score(),
            distance: state.display_distance(),
            status: state.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_hud_floors_values() {
        let mut state = GameState::new(1);
        state.score = 150.9;
        state.distance = 3.999;
        let hud = HudSnapshot::of(&state);
        assert_eq!(hud.score, 150);
        assert_eq!(hud.distance, 3);
        assert_eq!(hud.status, GameStatus::Idle);
    }

    #[test]
    fn test_render_snapshot_serializes() {
        let state = GameState::new(1);
        let json = serde_json::to_value(RenderSnapshot::of(&state)).unwrap();
        assert_eq!(json["frame"], 0);
        assert_eq!(json["status"], "Idle");
        assert!(json["obstacles"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_snapshot_carries_tuned_field() {
        let tuning = Tuning::from_json(r#"{"ground_y":250,"field_width":600}"#).unwrap();
        let state = GameState::with_tuning(1, tuning);
        let frame = RenderSnapshot::of(&state);
        assert_eq!(frame.field_width, 600.0);
        assert_eq!(frame.ground_y, 250.0);
    }
}
