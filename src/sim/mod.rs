//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - One tick per frame with a clamped delta
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod pacing;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Rect, collides, first_hit};
pub use obstacles::ObstacleStore;
pub use pacing::{Journey, Pacing, smoothstep};
pub use state::{GameEvent, GameState, Obstacle, ObstacleKind, Player, SessionPhase};
pub use tick::{FrameDelta, TickInput, restart, tick};
