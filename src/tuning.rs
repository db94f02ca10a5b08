//! Data-driven game balance
//!
//! Every number the simulation depends on lives here so a run can be
//! re-tuned from a JSON file without recompiling. Defaults are the
//! reference balance.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::ObstacleKind;

/// Vertical placement policy for an obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Top edge uniform in `[min_y, max_y)`
    Band { min_y: f32, max_y: f32 },
    /// Hangs from `top_y` or stands on the ground line, 50/50
    Anchored { top_y: f32 },
}

/// Per-kind spawn parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindProfile {
    /// Relative chance of this kind being picked
    pub weight: f32,
    /// Multiplier on world speed
    pub speed_multiplier: f32,
    /// Width range `[lo, hi)`; `lo == hi` means fixed
    pub width: (f32, f32),
    pub height: (f32, f32),
    pub placement: Placement,
}

impl KindProfile {
    /// Order both ranges, drop negative sizes and weights, and keep the
    /// obstacle between `min_y` and the ground line
    fn sanitized(mut self, min_y: f32, ground_y: f32) -> Self {
        self.weight = self.weight.max(0.0);
        self.width = ordered(self.width);
        self.height = ordered(self.height);

        self.placement = match self.placement {
            Placement::Band { min_y: lo, max_y: hi } => {
                let hi = hi.min(ground_y - self.height.1);
                let lo = lo.max(min_y).min(hi);
                Placement::Band { min_y: lo, max_y: hi }
            }
            Placement::Anchored { top_y } => {
                let top_y = top_y.clamp(0.0, ground_y.max(0.0));
                let tallest = (ground_y - top_y).max(0.0);
                self.height = (self.height.0.min(tallest), self.height.1.min(tallest));
                Placement::Anchored { top_y }
            }
        };
        self
    }
}

fn ordered((a, b): (f32, f32)) -> (f32, f32) {
    let (a, b) = (a.max(0.0), b.max(0.0));
    if a <= b { (a, b) } else { (b, a) }
}

/// Simulation tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Visible world width (pixels)
    pub world_width: f32,
    /// Visible world height (pixels)
    pub world_height: f32,
    /// Y of the ground line; storm columns anchor to it
    pub ground_y: f32,

    // === Player ===
    /// Fixed horizontal position of the craft as a fraction of world width
    pub player_x_fraction: f32,
    /// Visual hitbox width
    pub player_width: f32,
    /// Visual hitbox height
    pub player_height: f32,
    /// Fraction of the visual box kept for collision (centred)
    pub hitbox_shrink: f32,
    pub gravity: f32,
    pub thrust: f32,
    /// Symmetric vertical speed limit
    pub max_vy: f32,
    /// Converts velocity units into pixels per tick (shared with obstacles)
    pub position_scale: f32,
    pub min_altitude: f32,
    /// Distance kept between the craft and the ground line
    pub ground_clearance: f32,
    /// Zero the outward velocity when the craft is pinned at a bound
    pub zero_velocity_at_bounds: bool,

    // === Obstacles ===
    pub obstacle_capacity: usize,
    /// Spawn distance beyond the right edge
    pub spawn_margin: f32,
    /// Random extra spawn distance, drawn from [0, jitter)
    pub spawn_jitter: f32,
    /// Obstacles whose right edge is at or left of this x are culled
    pub cull_threshold: f32,
    pub cloud: KindProfile,
    pub bird: KindProfile,
    pub storm: KindProfile,

    // === Difficulty ===
    pub base_speed: f32,
    pub initial_difficulty: f32,
    /// Difficulty gained per simulated millisecond
    pub difficulty_rate: f32,
    pub speed_gain: f32,
    pub initial_spawn_interval_ms: f32,
    pub min_spawn_interval_ms: f32,
    /// Spawn interval lost per point of difficulty
    pub spawn_interval_decay: f32,

    // === Journey ===
    /// Total journey distance (km)
    pub journey_total: f32,
    /// Travel speed at the start of the journey (km/s)
    pub travel_speed_start: f32,
    /// Travel speed at the end of the journey (km/s)
    pub travel_speed_end: f32,

    // === Timing ===
    /// Milliseconds in one simulation unit (one 60 fps frame)
    pub frame_unit_ms: f32,
    /// Longest frame the simulation will integrate in one step
    pub max_frame_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: 960.0,
            world_height: 540.0,
            ground_y: 460.0,

            player_x_fraction: 0.22,
            player_width: 60.0,
            player_height: 36.0,
            hitbox_shrink: 0.8,
            gravity: 0.38,
            thrust: 0.8,
            max_vy: 7.0,
            position_scale: 3.2,
            min_altitude: 60.0,
            ground_clearance: 20.0,
            zero_velocity_at_bounds: true,

            obstacle_capacity: 128,
            spawn_margin: 40.0,
            spawn_jitter: 120.0,
            cull_threshold: -10.0,
            cloud: KindProfile {
                weight: 0.55,
                speed_multiplier: 1.0,
                width: (90.0, 170.0),
                height: (50.0, 80.0),
                placement: Placement::Band { min_y: 60.0, max_y: 300.0 },
            },
            bird: KindProfile {
                weight: 0.30,
                speed_multiplier: 1.35,
                width: (44.0, 44.0),
                height: (28.0, 28.0),
                placement: Placement::Band { min_y: 100.0, max_y: 360.0 },
            },
            storm: KindProfile {
                weight: 0.15,
                speed_multiplier: 1.1,
                width: (50.0, 50.0),
                height: (120.0, 240.0),
                placement: Placement::Anchored { top_y: 40.0 },
            },

            base_speed: 4.2,
            initial_difficulty: 1.0,
            difficulty_rate: 0.00045,
            speed_gain: 0.35,
            initial_spawn_interval_ms: 1100.0,
            min_spawn_interval_ms: 580.0,
            spawn_interval_decay: 160.0,

            journey_total: 12_000.0,
            travel_speed_start: 120.0,
            travel_speed_end: 160.0,

            frame_unit_ms: 16.6667,
            max_frame_ms: 48.0,
        }
    }
}

impl Tuning {
    /// Horizontal position of the craft
    pub fn player_x(&self) -> f32 {
        self.world_width * self.player_x_fraction
    }

    /// Starting (and restart) altitude of the craft
    pub fn player_start_y(&self) -> f32 {
        self.world_height * 0.5
    }

    /// Lowest point the craft may reach (largest y)
    pub fn max_altitude(&self) -> f32 {
        self.ground_y - self.ground_clearance
    }

    /// Spawn parameters for one obstacle kind
    pub fn profile(&self, kind: ObstacleKind) -> &KindProfile {
        match kind {
            ObstacleKind::Cloud => &self.cloud,
            ObstacleKind::Bird => &self.bird,
            ObstacleKind::StormColumn => &self.storm,
        }
    }

    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(|t| t.sanitized())
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.world_width > 0.0 && self.world_width.is_finite()) {
            log::warn!("world_width must be positive, using {}", defaults.world_width);
            self.world_width = defaults.world_width;
        }
        if !(self.world_height > 0.0 && self.world_height.is_finite()) {
            log::warn!("world_height must be positive, using {}", defaults.world_height);
            self.world_height = defaults.world_height;
        }
        if self.obstacle_capacity == 0 {
            log::warn!("obstacle_capacity must be positive, using {}", defaults.obstacle_capacity);
            self.obstacle_capacity = defaults.obstacle_capacity;
        }
        if !(self.frame_unit_ms > 0.0) {
            self.frame_unit_ms = defaults.frame_unit_ms;
        }
        if !(self.max_frame_ms > 0.0) {
            self.max_frame_ms = defaults.max_frame_ms;
        }
        if !(self.journey_total > 0.0) {
            self.journey_total = defaults.journey_total;
        }
        if self.min_altitude > self.max_altitude() {
            log::warn!(
                "Altitude band inverted ({} > {}), using defaults",
                self.min_altitude,
                self.max_altitude()
            );
            self.min_altitude = defaults.min_altitude;
            self.ground_y = defaults.ground_y;
            self.ground_clearance = defaults.ground_clearance;
        }
        self.max_vy = self.max_vy.abs();
        self.hitbox_shrink = self.hitbox_shrink.clamp(0.0, 1.0);
        self.spawn_jitter = self.spawn_jitter.max(0.0);
        self.difficulty_rate = self.difficulty_rate.max(0.0);

        self.cloud = self.cloud.sanitized(self.min_altitude, self.ground_y);
        self.bird = self.bird.sanitized(self.min_altitude, self.ground_y);
        self.storm = self.storm.sanitized(self.min_altitude, self.ground_y);
        if !(self.cloud.weight + self.bird.weight + self.storm.weight > 0.0) {
            log::warn!("Obstacle kind weights sum to zero, using defaults");
            self.cloud.weight = defaults.cloud.weight;
            self.bird.weight = defaults.bird.weight;
            self.storm.weight = defaults.storm.weight;
        }

        self
    }
}
