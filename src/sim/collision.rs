//! Axis-aligned box overlap with a forgiving inset
//!
//! Both boxes shrink inward by the same margin before testing, so grazing
//! contact near the edges does not count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink by `inset` on all four sides
    #[inline]
    pub fn inset(&self, inset: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(inset),
            max: self.max - Vec2::splat(inset),
        }
    }

    /// Strict overlap; touching edges do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Overlap test after insetting both boxes
pub fn inset_overlap(a: &Aabb, b: &Aabb, inset: f32) -> bool {
    a.inset(inset).overlaps(&b.inset(inset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(size))
    }

    #[test]
    fn test_overlap_plain() {
        assert!(square(0.0, 0.0, 10.0).overlaps(&square(5.0, 5.0, 10.0)));
        assert!(!square(0.0, 0.0, 10.0).overlaps(&square(10.0, 0.0, 10.0)));
        assert!(!square(0.0, 0.0, 10.0).overlaps(&square(0.0, 20.0, 10.0)));
    }

    #[test]
    fn test_inset_forgives_grazing_contact() {
        // 6px of raw overlap, but 5px inset on both boxes removes 10px
        let a = square(0.0, 0.0, 40.0);
        let b = square(34.0, 0.0, 40.0);
        assert!(a.overlaps(&b));
        assert!(!inset_overlap(&a, &b, 5.0));
    }

    #[test]
    fn test_inset_still_hits_deep_overlap() {
        let a = square(0.0, 0.0, 40.0);
        let b = square(20.0, 10.0, 40.0);
        assert!(inset_overlap(&a, &b, 5.0));
    }

    #[test]
    fn test_zero_inset_matches_plain() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(9.0, 9.0, 10.0);
        assert_eq!(inset_overlap(&a, &b, 0.0), a.overlaps(&b));
    }
}
