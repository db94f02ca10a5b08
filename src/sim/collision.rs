//! Axis-aligned collision between the craft and obstacles
//!
//! Screen coordinates: y grows downward, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size * 0.5, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Scale the rectangle around its centre
    pub fn shrunk(&self, factor: f32) -> Self {
        Self::centered(self.center(), self.size * factor)
    }

    /// Strict overlap: touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Test an (already shrunk) player hitbox against one obstacle
#[inline]
pub fn collides(hitbox: &Rect, obstacle: &Obstacle) -> bool {
    hitbox.overlaps(&obstacle.rect())
}

/// First obstacle hit by the hitbox, if any. Stops at the first hit.
pub fn first_hit<'a>(
    hitbox: &Rect,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
) -> Option<&'a Obstacle> {
    obstacles.into_iter().find(|o| collides(hitbox, o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ObstacleKind, Player};
    use crate::tuning::Tuning;

    fn bird_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Bird,
            pos: Vec2::new(x, y),
            size: Vec2::new(44.0, 28.0),
            speed: 5.0,
        }
    }

    #[test]
    fn test_overlap_inside_shrunk_box() {
        let tuning = Tuning::default();
        let player = Player { x: 200.0, y: 200.0, vy: 0.0 };
        // Visual box 170..230 x 182..218, hitbox 176..224 x 185.6..214.4
        let hitbox = player.hitbox(&tuning);
        assert!(collides(&hitbox, &bird_at(222.0, 190.0)));
    }

    #[test]
    fn test_shrink_margin_forgives_visual_overlap() {
        let tuning = Tuning::default();
        let player = Player { x: 200.0, y: 200.0, vy: 0.0 };
        let hitbox = player.hitbox(&tuning);
        let visual = player.visual_box(&tuning);

        // Overlaps the visual box on the right but lies beyond the hitbox edge
        let bird = bird_at(225.0, 190.0);
        assert!(visual.overlaps(&bird.rect()));
        assert!(!collides(&hitbox, &bird));

        // Same on the vertical axis (hitbox bottom is 214.4)
        let bird = bird_at(190.0, 215.0);
        assert!(visual.overlaps(&bird.rect()));
        assert!(!collides(&hitbox, &bird));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::from_xywh(9.99, 9.99, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_first_hit_short_circuits() {
        let hitbox = Rect::from_xywh(0.0, 0.0, 50.0, 50.0);
        let obstacles = [bird_at(500.0, 0.0), bird_at(10.0, 10.0), bird_at(20.0, 20.0)];
        let hit = first_hit(&hitbox, &obstacles).unwrap();
        assert_eq!(hit.pos, Vec2::new(10.0, 10.0));
        assert!(first_hit(&hitbox, &obstacles[..1]).is_none());
    }
}
