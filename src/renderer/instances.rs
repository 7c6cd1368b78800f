//! GPU-ready quad instances for obstacles, particles and ground stripes

use bytemuck::{Pod, Zeroable};

use crate::consts::{FIELD_HEIGHT, GROUND_STRIPE_SPACING};
use crate::sim::{Obstacle, Particle};
use crate::snapshot::RenderSnapshot;

/// One axis-aligned quad (top-left origin, pixels)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl QuadInstance {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            size: [w, h],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const OBSTACLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PARTICLE: [f32; 3] = [1.0, 1.0, 1.0];
    pub const GROUND_STRIPE: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
}

/// Stripe width in pixels
const STRIPE_WIDTH: f32 = 2.0;

/// Instance lists for one frame, ready for upload
#[derive(Debug, Clone, Default)]
pub struct FrameInstances {
    pub ground: Vec<QuadInstance>,
    pub obstacles: Vec<QuadInstance>,
    pub particles: Vec<QuadInstance>,
}

impl FrameInstances {
    pub fn build(frame: &RenderSnapshot<'_>) -> Self {
        Self {
            ground: ground_stripes(frame.ground_offset, frame.field_width, frame.ground_y),
            obstacles: frame.obstacles.iter().map(obstacle_quad).collect(),
            particles: frame.particles.iter().map(particle_quad).collect(),
        }
    }

    /// Draw order: ground, obstacles, particles
    pub fn all(&self) -> Vec<QuadInstance> {
        let mut all = Vec::with_capacity(self.len());
        all.extend_from_slice(&self.ground);
        all.extend_from_slice(&self.obstacles);
        all.extend_from_slice(&self.particles);
        all
    }

    pub fn len(&self) -> usize {
        self.ground.len() + self.obstacles.len() + self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw bytes for a vertex buffer upload
pub fn as_bytes(instances: &[QuadInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

pub fn obstacle_quad(obs: &Obstacle) -> QuadInstance {
    QuadInstance::new(obs.pos.x, obs.pos.y, obs.size.x, obs.size.y, colors::OBSTACLE)
}

/// Particle quad faded by remaining life
pub fn particle_quad(p: &Particle) -> QuadInstance {
    let [r, g, b] = colors::PARTICLE;
    QuadInstance::new(p.pos.x, p.pos.y, p.size, p.size, [r, g, b, p.life.clamp(0.0, 1.0)])
}

/// Scrolling stripes from the ground line to the bottom of the field
pub fn ground_stripes(offset: f32, field_width: f32, ground_y: f32) -> Vec<QuadInstance> {
    let height = (FIELD_HEIGHT - ground_y).max(0.0);
    let mut stripes = Vec::new();
    let mut x = -offset;
    while x < field_width {
        stripes.push(QuadInstance::new(x, ground_y, STRIPE_WIDTH, height, colors::GROUND_STRIPE));
        x += GROUND_STRIPE_SPACING;
    }
    stripes
}
