//! Per-frame simulation step
//!
//! Core game loop that advances a session by exactly one frame.

use super::collision::first_hit;
use super::physics;
use super::state::{GameEvent, GameState, SessionPhase};
use crate::tuning::Tuning;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust is held this frame
    pub thrust: bool,
    /// Restart was pressed since the last frame
    pub restart: bool,
}

/// Elapsed time for one frame, already clamped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDelta {
    /// Milliseconds (clamped to `max_frame_ms`)
    pub ms: f32,
    /// Simulation units (one unit is one 60 fps frame)
    pub units: f32,
}

impl FrameDelta {
    /// Clamp a raw frame time and convert it to simulation units
    pub fn from_ms(raw_ms: f32, tuning: &Tuning) -> Self {
        let ms = if raw_ms.is_finite() {
            raw_ms.clamp(0.0, tuning.max_frame_ms)
        } else {
            0.0
        };
        Self {
            ms,
            units: ms / tuning.frame_unit_ms,
        }
    }

    /// Exactly one simulation unit
    pub fn one_frame(tuning: &Tuning) -> Self {
        Self::from_ms(tuning.frame_unit_ms, tuning)
    }

    pub fn seconds(&self) -> f32 {
        self.ms / 1000.0
    }
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, delta: FrameDelta) {
    state.clock_ms += delta.ms as f64;

    if !state.phase.is_active() {
        if input.restart && state.phase.can_restart() {
            restart(state);
        }
        // Frozen until restart
        return;
    }

    state.frames += 1;
    let tuning = state.tuning;

    // Difficulty drives speed and spawn cadence
    state.pacing.advance(delta.ms, &tuning);

    physics::integrate(&mut state.player, input.thrust, delta.units, &tuning);

    state.spawn_timer_ms += delta.ms;
    if state.spawn_timer_ms >= state.pacing.spawn_interval_ms {
        state.spawn_timer_ms = 0.0;
        match state
            .obstacles
            .spawn(state.pacing.world_speed, &mut state.rng, &tuning)
        {
            Some(kind) => state.push_event(GameEvent::ObstacleSpawned(kind)),
            None => state.push_event(GameEvent::SpawnDropped),
        }
    }

    state.obstacles.advance(tuning.position_scale);
    state.obstacles.cull(tuning.cull_threshold);

    let hitbox = state.player.hitbox(&tuning);
    if let Some(hit) = first_hit(&hitbox, &state.obstacles) {
        state.phase = SessionPhase::Crashed;
        state.push_event(GameEvent::Crashed(hit.kind));
        return;
    }

    if state.journey.advance(delta.seconds(), &tuning) {
        state.phase = SessionPhase::Completed;
        state.push_event(GameEvent::Completed);
    }
}

/// Start a fresh run. Only honoured from Crashed or Completed.
pub fn restart(state: &mut GameState) -> bool {
    if !state.phase.can_restart() {
        return false;
    }
    state.reset();
    state.push_event(GameEvent::Restarted);
    true
}
