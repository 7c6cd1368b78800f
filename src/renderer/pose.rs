//! Skater pose for the current trick
//!
//! Every `Trick` variant maps to a pose here, so adding a trick without a
//! pose is a compile error.

use crate::sim::{Player, Trick};

/// Leg placement relative to the hips
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegStance {
    /// Feet on the board; `bend` bobs while rolling
    Riding { bend: f32 },
    /// Legs split wide for flip tricks
    Spread,
    /// Legs straight back (superman)
    Trailing,
    /// Knees bent up to the board (grab)
    Tucked,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArmStance {
    /// Arms out for balance, tilted by `lean`
    Balance { lean: f32 },
    /// One hand on the board
    Grab,
    /// Both arms reaching ahead
    Forward,
}

/// Everything a renderer needs to draw the skater
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkaterPose {
    /// Whole-figure tumble in degrees (wipeout)
    pub tumble: f32,
    /// Body rotation in degrees on top of the tumble
    pub body_rotation: f32,
    /// Board spin in degrees around its own center
    pub board_rotation: f32,
    /// Extra drop of the board below the feet
    pub board_offset: f32,
    /// Horizontal offset of the neck from the hips
    pub torso_lean: f32,
    pub legs: LegStance,
    pub arms: ArmStance,
}

impl SkaterPose {
    pub fn of(player: &Player, frame: u64) -> Self {
        // Only the spin phase matters; keep it small before converting
        let spin = |deg_per_frame: u64| (frame.wrapping_mul(deg_per_frame) % 360) as f32;
        let torso_lean = player.dy * 0.5;

        let (body_rotation, board_rotation, board_offset, legs, arms) = match player.current_trick {
            Trick::None => {
                let bend = if !player.is_jumping && frame % 10 > 5 { 2.0 } else { 0.0 };
                (
                    0.0,
                    0.0,
                    0.0,
                    LegStance::Riding { bend },
                    ArmStance::Balance { lean: player.dy },
                )
            }
            Trick::Kickflip => (
                0.0,
                spin(20),
                0.0,
                LegStance::Spread,
                ArmStance::Balance { lean: player.dy },
            ),
            Trick::ThreeSixtyFlip => (
                spin(15),
                spin(25),
                0.0,
                LegStance::Spread,
                ArmStance::Balance { lean: 10.0 },
            ),
            Trick::Superman => (90.0, 0.0, 15.0, LegStance::Trailing, ArmStance::Forward),
            Trick::Indy => (0.0, 0.0, 0.0, LegStance::Tucked, ArmStance::Grab),
        };

        Self {
            tumble: player.rotation,
            body_rotation,
            board_rotation,
            board_offset,
            torso_lean: if player.current_trick == Trick::Superman { 0.0 } else { torso_lean },
            legs,
            arms,
        }
    }
}

/// Trick label text if it should be drawn this frame (blinks every 4 frames)
pub fn visible_label(player: &Player, frame: u64) -> Option<&str> {
    let label = player.trick_label.as_deref()?;
    (player.trick_timer > 0 && (frame / 4) % 2 == 0).then_some(label)
}
