//! Trick dispatch
//!
//! Tricks fire on key edges while airborne. Combos (jump-class key pressed
//! with a direction held) beat single-direction tricks and may override a
//! trick already in progress; single-direction tricks only start a jump's
//! first trick.

use super::state::{GameState, GameStatus, Trick};
use crate::input::{Action, InputTracker, Key};

/// Decide which trick, if any, a fresh key press produces
///
/// `input` must already include the pressed key.
pub fn resolve_trick(key: Key, input: &InputTracker, current: Trick) -> Option<Trick> {
    let left_held = input.is_held(Action::Left);
    let right_held = input.is_held(Action::Right);

    match key.action() {
        // Left combo checked first; it wins if both directions are held
        Action::Jump if left_held => Some(Trick::ThreeSixtyFlip),
        Action::Jump if right_held => Some(Trick::Superman),
        Action::Left if current == Trick::None => Some(Trick::Kickflip),
        Action::Right if current == Trick::None => Some(Trick::Indy),
        _ => None,
    }
}

/// Apply a key edge to the trick state machine. Returns the trick started.
pub fn handle_trick_key(state: &mut GameState, key: Key, input: &InputTracker) -> Option<Trick> {
    if state.status != GameStatus::Playing || !state.player.is_jumping {
        return None;
    }
    let trick = resolve_trick(key, input, state.player.current_trick)?;
    state.trigger_trick(trick);
    Some(trick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn held(keys: &[Key]) -> InputTracker {
        let mut input = InputTracker::new();
        for &key in keys {
            input.press(key);
        }
        input
    }

    fn airborne_state() -> GameState {
        let mut state = GameState::new(42);
        state.status = GameStatus::Playing;
        state.player.is_jumping = true;
        state.player.dy = -5.0;
        state.player.pos.y -= 60.0;
        state
    }

    #[test]
    fn test_single_direction_tricks() {
        let input = held(&[Key::ArrowLeft]);
        assert_eq!(resolve_trick(Key::ArrowLeft, &input, Trick::None), Some(Trick::Kickflip));
        let input = held(&[Key::D]);
        assert_eq!(resolve_trick(Key::D, &input, Trick::None), Some(Trick::Indy));
    }

    #[test]
    fn test_single_direction_blocked_by_active_trick() {
        let input = held(&[Key::ArrowLeft]);
        assert_eq!(resolve_trick(Key::ArrowLeft, &input, Trick::Indy), None);
        let input = held(&[Key::ArrowRight]);
        assert_eq!(resolve_trick(Key::ArrowRight, &input, Trick::Kickflip), None);
    }

    #[test]
    fn test_combos_override() {
        let input = held(&[Key::A, Key::W]);
        assert_eq!(resolve_trick(Key::W, &input, Trick::Kickflip), Some(Trick::ThreeSixtyFlip));
        let input = held(&[Key::ArrowRight, Key::Space]);
        assert_eq!(resolve_trick(Key::Space, &input, Trick::Superman), Some(Trick::Superman));
    }

    #[test]
    fn test_left_combo_wins_tie() {
        let input = held(&[Key::ArrowLeft, Key::ArrowRight, Key::ArrowUp]);
        assert_eq!(resolve_trick(Key::ArrowUp, &input, Trick::None), Some(Trick::ThreeSixtyFlip));
    }

    #[test]
    fn test_jump_alone_and_other_keys_do_nothing() {
        let input = held(&[Key::ArrowUp]);
        assert_eq!(resolve_trick(Key::ArrowUp, &input, Trick::None), None);
        let input = held(&[Key::ArrowDown, Key::ArrowLeft]);
        assert_eq!(resolve_trick(Key::ArrowDown, &input, Trick::None), None);
        assert_eq!(resolve_trick(Key::Enter, &input, Trick::None), None);
    }

    #[test]
    fn test_combo_scores_and_labels() {
        let mut state = airborne_state();
        let input = held(&[Key::ArrowLeft, Key::ArrowUp]);
        let trick = handle_trick_key(&mut state, Key::ArrowUp, &input);
        assert_eq!(trick, Some(Trick::ThreeSixtyFlip));
        assert_eq!(state.player.current_trick, Trick::ThreeSixtyFlip);
        assert_eq!(state.score, SCORE_TRICK_COMPLEX);
        assert_eq!(state.player.trick_label.as_deref(), Some("360 FLIP!"));
        assert_eq!(state.player.trick_timer, TRICK_LABEL_FRAMES);
        assert_eq!(state.particles.len(), PARTICLE_BURST);
    }

    #[test]
    fn test_no_tricks_on_ground() {
        let mut state = GameState::new(42);
        state.status = GameStatus::Playing;
        let input = held(&[Key::ArrowLeft]);
        assert_eq!(handle_trick_key(&mut state, Key::ArrowLeft, &input), None);
        assert_eq!(state.player.current_trick, Trick::None);
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_no_tricks_after_crash() {
        let mut state = airborne_state();
        state.status = GameStatus::GameOver;
        let input = held(&[Key::ArrowRight]);
        assert_eq!(handle_trick_key(&mut state, Key::ArrowRight, &input), None);
    }

    #[test]
    fn test_second_simple_trick_rejected() {
        let mut state = airborne_state();
        let input = held(&[Key::ArrowRight]);
        handle_trick_key(&mut state, Key::ArrowRight, &input);
        let mut input = held(&[Key::ArrowLeft]);
        input.release(Key::ArrowRight);
        assert_eq!(handle_trick_key(&mut state, Key::ArrowLeft, &input), None);
        assert_eq!(state.player.current_trick, Trick::Indy);
        assert_eq!(state.score, SCORE_TRICK_SIMPLE);
    }
}
