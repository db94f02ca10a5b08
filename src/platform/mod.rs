//! Platform abstraction layer
//!
//! Handles the host side of the frame loop:
//! - Time/ticks
//! - Input events
//! - Handing each frame's scene to whatever draws it

pub mod input;
pub mod time;

pub use input::{InputEvent, InputState};
pub use time::FrameClock;

use crate::scene::Scene;
use crate::sim::{GameEvent, GameState, autopilot, tick};

/// What the game needs from the window/renderer side
pub trait Host {
    /// Monotonic timestamp in milliseconds
    fn now_ms(&mut self) -> f64;
    /// Append every input event received since the last call
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);
    /// Draw and present one frame
    fn present(&mut self, scene: &Scene);
}

/// Result of one driver iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Runs one simulation tick per host frame
pub struct FrameDriver {
    state: GameState,
    input: InputState,
    clock: FrameClock,
    /// Let the built-in pilot hold thrust (demo mode)
    autopilot: bool,
    pending: Vec<InputEvent>,
    last_events: Vec<GameEvent>,
    frames: u64,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            input: InputState::default(),
            clock: FrameClock::new(),
            autopilot: false,
            pending: Vec::new(),
            last_events: Vec::new(),
            frames: 0,
        }
    }

    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events raised by the most recent frame
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Input snapshot → simulation tick → scene → present
    pub fn frame<H: Host>(&mut self, host: &mut H) -> FrameOutcome {
        host.poll_events(&mut self.pending);
        for event in self.pending.drain(..) {
            self.input.apply(event);
        }
        if self.input.quit_requested() {
            log::info!("Quit requested after {} frames", self.frames);
            return FrameOutcome::Quit;
        }

        let delta = self.clock.delta(host.now_ms(), &self.state.tuning);
        let mut input = self.input.snapshot();
        if self.autopilot && self.state.phase.is_active() {
            input.thrust = autopilot::wants_thrust(&self.state);
        }

        tick(&mut self.state, &input, delta);

        self.last_events.clear();
        self.last_events.extend(self.state.drain_events());
        for event in &self.last_events {
            log_event(event, &self.state);
        }

        host.present(&Scene::build(&self.state));
        self.frames += 1;
        FrameOutcome::Continue
    }

    /// Pump frames until the host asks to quit. Returns the frame count.
    pub fn run<H: Host>(&mut self, host: &mut H) -> u64 {
        while self.frame(host) == FrameOutcome::Continue {}
        self.frames
    }
}

fn log_event(event: &GameEvent, state: &GameState) {
    match event {
        GameEvent::ObstacleSpawned(kind) => {
            log::trace!("Spawned {:?} at speed {:.2}", kind, state.pacing.world_speed)
        }
        GameEvent::SpawnDropped => log::debug!(
            "Obstacle store full ({}), spawn dropped",
            state.obstacles.capacity()
        ),
        GameEvent::Crashed(kind) => log::info!(
            "Crashed into {:?} after {} frames, {:.1}% of the journey",
            kind,
            state.frames,
            state.journey.progress() * 100.0
        ),
        GameEvent::Completed => log::info!("Journey completed after {} frames", state.frames),
        GameEvent::Restarted => log::info!("Restarted (run {}, seed {})", state.run, state.run_seed()),
    }
}
