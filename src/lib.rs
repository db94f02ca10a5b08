//! Mini Flight - an endless side-scrolling flight game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, pacing, session state)
//! - `scene`: Per-frame scene description for an external renderer
//! - `renderer`: Scene to vertex-buffer conversion for a WebGPU host
//! - `platform`: Frame loop driver, input and timing
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use platform::{FrameDriver, FrameOutcome, Host, InputEvent};
pub use scene::Scene;
pub use sim::{GameState, SessionPhase, TickInput};
pub use tuning::{KindProfile, Placement, Tuning};
