//! Frame timing
//!
//! Converts host timestamps into clamped frame deltas.

use crate::sim::FrameDelta;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call. The first call yields a zero delta;
    /// timestamps that go backwards are treated as zero.
    pub fn delta(&mut self, now_ms: f64, tuning: &Tuning) -> FrameDelta {
        let raw = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        FrameDelta::from_ms(raw as f32, tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let tuning = Tuning::default();
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0, &tuning).ms, 0.0);
        assert_eq!(clock.delta(1016.0, &tuning).ms, 16.0);
    }

    #[test]
    fn test_stall_is_clamped() {
        let tuning = Tuning::default();
        let mut clock = FrameClock::new();
        clock.delta(0.0, &tuning);
        let d = clock.delta(5_000.0, &tuning);
        assert_eq!(d.ms, 48.0);
        assert!(d.units < 3.0);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let tuning = Tuning::default();
        let mut clock = FrameClock::new();
        clock.delta(100.0, &tuning);
        assert_eq!(clock.delta(50.0, &tuning).ms, 0.0);
        assert_eq!(clock.delta(66.0, &tuning).ms, 16.0);
    }
}
