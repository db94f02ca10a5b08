//! Fixed-capacity obstacle store
//!
//! Obstacles live in a single preallocated `Vec` that never grows past its
//! capacity. Spawning into a full store is a silent drop, which bounds the
//! per-frame work no matter how fast difficulty pushes the spawn cadence.

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, ObstacleKind};
use crate::tuning::{Placement, Tuning};

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Cloud,
        ObstacleKind::Bird,
        ObstacleKind::StormColumn,
    ];

    /// Map a uniform draw in [0, 1) onto a kind using the profile weights
    pub fn from_roll(roll: f32, tuning: &Tuning) -> ObstacleKind {
        let total: f32 = Self::ALL.iter().map(|&k| tuning.profile(k).weight).sum();
        let target = roll * total;
        let mut acc = 0.0;
        for kind in Self::ALL {
            acc += tuning.profile(kind).weight;
            if target < acc {
                return kind;
            }
        }
        ObstacleKind::StormColumn
    }
}

fn sample<R: Rng>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Active obstacles, at most `capacity` of them
#[derive(Debug, Clone)]
pub struct ObstacleStore {
    items: Vec<Obstacle>,
    capacity: usize,
}

impl ObstacleStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.items
    }

    /// Drop every obstacle, keeping the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert a prebuilt obstacle. Returns false (and drops it) when full.
    pub fn insert(&mut self, obstacle: Obstacle) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(obstacle);
        true
    }

    /// Spawn a random obstacle just off the right edge.
    ///
    /// Returns the spawned kind, or `None` when the store is full.
    pub fn spawn<R: Rng>(
        &mut self,
        world_speed: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<ObstacleKind> {
        if self.is_full() {
            return None;
        }

        let kind = ObstacleKind::from_roll(rng.random::<f32>(), tuning);
        let profile = *tuning.profile(kind);

        let size = Vec2::new(sample(rng, profile.width), sample(rng, profile.height));
        let y = match profile.placement {
            Placement::Band { min_y, max_y } => sample(rng, (min_y, max_y)),
            Placement::Anchored { top_y } => {
                if rng.random_bool(0.5) {
                    top_y
                } else {
                    tuning.ground_y - size.y
                }
            }
        };
        let x = tuning.world_width + tuning.spawn_margin + sample(rng, (0.0, tuning.spawn_jitter));

        self.items.push(Obstacle {
            kind,
            pos: Vec2::new(x, y),
            size,
            speed: world_speed * profile.speed_multiplier,
        });
        Some(kind)
    }

    /// Scroll every obstacle left by its own speed
    pub fn advance(&mut self, position_scale: f32) {
        for obstacle in &mut self.items {
            obstacle.pos.x -= obstacle.speed * position_scale;
        }
    }

    /// Remove obstacles whose right edge is at or past `threshold`.
    /// Returns how many were removed.
    pub fn cull(&mut self, threshold: f32) -> usize {
        let before = self.items.len();
        self.items.retain(|o| o.right() > threshold);
        before - self.items.len()
    }
}

impl<'a> IntoIterator for &'a ObstacleStore {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
