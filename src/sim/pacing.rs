//! Difficulty and journey progress curves
//!
//! Two independent curves share the frame clock:
//! - [`Pacing`]: a linearly growing difficulty scalar that drives obstacle
//!   speed and spawn cadence
//! - [`Journey`]: remaining distance, consumed at a travel speed eased
//!   (smoothstep) between a start and end value by progress

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Canonical smoothstep, `3t² - 2t³`, with `t` clamped to [0, 1]
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Difficulty accumulator and the values derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pacing {
    pub difficulty: f32,
    /// Horizontal scroll speed for newly spawned obstacles
    pub world_speed: f32,
    /// Current delay between spawns
    pub spawn_interval_ms: f32,
}

impl Pacing {
    pub fn new(tuning: &Tuning) -> Self {
        let difficulty = tuning.initial_difficulty;
        Self {
            difficulty,
            world_speed: world_speed(difficulty, tuning),
            spawn_interval_ms: spawn_interval_ms(difficulty, tuning),
        }
    }

    /// Grow difficulty by `dt_ms` and refresh the derived values
    pub fn advance(&mut self, dt_ms: f32, tuning: &Tuning) {
        self.difficulty += tuning.difficulty_rate * dt_ms;
        self.world_speed = world_speed(self.difficulty, tuning);
        self.spawn_interval_ms = spawn_interval_ms(self.difficulty, tuning);
    }
}

/// Linear in difficulty, not compounding
pub fn world_speed(difficulty: f32, tuning: &Tuning) -> f32 {
    tuning.base_speed * (1.0 + (difficulty - tuning.initial_difficulty) * tuning.speed_gain)
}

/// Shrinks with difficulty down to the configured floor
pub fn spawn_interval_ms(difficulty: f32, tuning: &Tuning) -> f32 {
    let interval = tuning.initial_spawn_interval_ms
        - (difficulty - tuning.initial_difficulty) * tuning.spawn_interval_decay;
    interval.max(tuning.min_spawn_interval_ms)
}

/// Distance left on the fixed-length journey
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    pub total: f32,
    pub remaining: f32,
}

impl Journey {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            total: tuning.journey_total,
            remaining: tuning.journey_total,
        }
    }

    /// Completed fraction in [0, 1]; exactly 1.0 once finished
    pub fn progress(&self) -> f32 {
        ((self.total - self.remaining) / self.total).clamp(0.0, 1.0)
    }

    /// Current travel speed (distance per second)
    pub fn travel_speed(&self, tuning: &Tuning) -> f32 {
        let eased = smoothstep(self.progress());
        tuning.travel_speed_start + (tuning.travel_speed_end - tuning.travel_speed_start) * eased
    }

    /// Consume distance for `dt_secs`. Returns true when the journey is finished.
    pub fn advance(&mut self, dt_secs: f32, tuning: &Tuning) -> bool {
        self.remaining -= self.travel_speed(tuning) * dt_secs;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(smoothstep(-3.0), 0.0);
        assert_eq!(smoothstep(7.0), 1.0);
    }

    #[test]
    fn test_initial_pacing_matches_reference() {
        let tuning = Tuning::default();
        let pacing = Pacing::new(&tuning);
        assert_eq!(pacing.world_speed, 4.2);
        assert_eq!(pacing.spawn_interval_ms, 1100.0);
    }

    #[test]
    fn test_spawn_interval_hits_floor() {
        let tuning = Tuning::default();
        // 1100 - 160 * (d - 1) reaches 580 at d = 4.25
        assert!((spawn_interval_ms(4.0, &tuning) - 620.0).abs() < 1e-3);
        assert_eq!(spawn_interval_ms(4.25, &tuning), 580.0);
        assert_eq!(spawn_interval_ms(50.0, &tuning), 580.0);
    }

    #[test]
    fn test_world_speed_is_linear() {
        let tuning = Tuning::default();
        let a = world_speed(2.0, &tuning) - world_speed(1.0, &tuning);
        let b = world_speed(3.0, &tuning) - world_speed(2.0, &tuning);
        assert!((a - b).abs() < 1e-5);
        assert!((world_speed(2.0, &tuning) - 4.2 * 1.35).abs() < 1e-5);
    }

    #[test]
    fn test_journey_speeds_up_and_finishes_exactly() {
        let tuning = Tuning::default();
        let mut journey = Journey::new(&tuning);
        assert_eq!(journey.travel_speed(&tuning), 120.0);

        let mut last_progress = journey.progress();
        let mut finished = false;
        for _ in 0..20_000 {
            finished = journey.advance(0.016, &tuning);
            assert!(journey.progress() >= last_progress);
            last_progress = journey.progress();
            if finished {
                break;
            }
        }
        assert!(finished);
        assert_eq!(journey.remaining, 0.0);
        assert_eq!(journey.progress(), 1.0);
        assert_eq!(journey.travel_speed(&tuning), 160.0);
    }

    proptest! {
        #[test]
        fn prop_spawn_interval_non_increasing(
            steps in proptest::collection::vec(0.0f32..=48.0, 1..500),
        ) {
            let tuning = Tuning::default();
            let mut pacing = Pacing::new(&tuning);
            let mut last = pacing.spawn_interval_ms;
            for dt_ms in steps {
                pacing.advance(dt_ms, &tuning);
                prop_assert!(pacing.spawn_interval_ms <= last);
                prop_assert!(pacing.spawn_interval_ms >= tuning.min_spawn_interval_ms);
                prop_assert!(pacing.difficulty >= tuning.initial_difficulty);
                last = pacing.spawn_interval_ms;
            }
        }
    }
}
