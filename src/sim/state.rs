//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameState`], which is passed by
//! reference into each subsystem.

use std::collections::VecDeque;
use std::collections::vec_deque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::obstacles::ObstacleStore;
use super::pacing::{Journey, Pacing};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Flying
    Active,
    /// Hit an obstacle; waiting for restart
    Crashed,
    /// Journey finished; waiting for restart
    Completed,
}

impl SessionPhase {
    pub fn is_active(self) -> bool {
        self == SessionPhase::Active
    }

    /// Whether a restart action is honoured in this phase
    pub fn can_restart(self) -> bool {
        matches!(self, SessionPhase::Crashed | SessionPhase::Completed)
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Cloud,
    Bird,
    StormColumn,
}

/// A scrolling obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed, fixed at spawn
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// The player's craft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Fixed horizontal centre
    pub x: f32,
    /// Vertical centre
    pub y: f32,
    /// Vertical velocity (positive is down)
    pub vy: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x(),
            y: tuning.player_start_y(),
            vy: 0.0,
        }
    }

    /// Visual bounding box, centred on the craft
    pub fn visual_box(&self, tuning: &Tuning) -> Rect {
        Rect::centered(
            Vec2::new(self.x, self.y),
            Vec2::new(tuning.player_width, tuning.player_height),
        )
    }

    /// Collision box: the visual box shrunk around its centre
    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        self.visual_box(tuning).shrunk(tuning.hitbox_shrink)
    }
}

/// Things that happened during a tick, for logging or an audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned(ObstacleKind),
    /// Spawn timer fired while the store was full
    SpawnDropped,
    /// Hit an obstacle of this kind
    Crashed(ObstacleKind),
    Completed,
    Restarted,
}

/// Events kept between drains; the oldest are dropped beyond this
pub const MAX_PENDING_EVENTS: usize = 64;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Number of restarts so far; mixed into the seed of each new run
    pub run: u32,
    pub tuning: Tuning,
    pub phase: SessionPhase,
    pub player: Player,
    pub obstacles: ObstacleStore,
    pub pacing: Pacing,
    pub journey: Journey,
    /// Milliseconds since the last spawn
    pub spawn_timer_ms: f32,
    /// Frames ticked since the last (re)start
    pub frames: u64,
    /// Wall time accumulated every frame, in any phase (animation only)
    pub clock_ms: f64,
    /// Events raised since the last drain
    events: VecDeque<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed and tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            run: 0,
            tuning,
            phase: SessionPhase::Active,
            player: Player::new(&tuning),
            obstacles: ObstacleStore::with_capacity(tuning.obstacle_capacity),
            pacing: Pacing::new(&tuning),
            journey: Journey::new(&tuning),
            spawn_timer_ms: 0.0,
            frames: 0,
            clock_ms: 0.0,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset every counter to its initial value and go back to Active.
    ///
    /// The obstacle store keeps its allocation.
    pub fn reset(&mut self) {
        self.run += 1;
        self.phase = SessionPhase::Active;
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.pacing = Pacing::new(&self.tuning);
        self.journey = Journey::new(&self.tuning);
        self.spawn_timer_ms = 0.0;
        self.frames = 0;
        self.rng = Pcg32::seed_from_u64(self.run_seed());
    }

    /// Seed of the current run
    pub fn run_seed(&self) -> u64 {
        self.seed
            .wrapping_add((self.run as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Number of events waiting to be drained
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Take all events raised since the last call, keeping the buffer
    pub fn drain_events(&mut self) -> vec_deque::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
