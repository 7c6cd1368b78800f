//! Rendering seam
//!
//! The simulation never draws. A renderer receives a `RenderSnapshot` once
//! per frame and turns it into pixels; this module provides the trait it
//! implements plus pure helpers (skater pose, GPU instance packing) that need
//! no drawing surface.

pub mod instances;
pub mod pose;

pub use instances::{FrameInstances, QuadInstance};
pub use pose::{ArmStance, LegStance, SkaterPose, visible_label};

use crate::sim::GameEvent;
use crate::snapshot::{HudSnapshot, RenderSnapshot};

/// Draws one frame from a read-only snapshot
pub trait Renderer {
    fn render(&mut self, frame: &RenderSnapshot<'_>);
}

/// Receives score overlay values when they change
pub trait HudSink {
    fn publish(&mut self, hud: &HudSnapshot);

    /// Called for each game event of the frame, before the frame is drawn
    fn event(&mut self, _event: &GameEvent) {}
}
