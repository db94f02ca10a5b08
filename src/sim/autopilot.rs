//! Idle/demo mode: a simple pilot that dodges the nearest threat
//!
//! Picks the larger vertical gap around the closest obstacle ahead and
//! thrusts whenever the craft is predicted to sink below its target.

use super::state::{GameState, Obstacle};

/// How far ahead of the craft obstacles are considered (pixels)
const THREAT_HORIZON: f32 = 320.0;
/// Frames of velocity used to predict the craft's position
const LOOKAHEAD_FRAMES: f32 = 6.0;

/// Closest obstacle that has not yet fully passed the craft
pub fn nearest_threat(state: &GameState) -> Option<&Obstacle> {
    let hitbox = state.player.hitbox(&state.tuning);
    state
        .obstacles
        .iter()
        .filter(|o| o.right() > hitbox.left() && o.pos.x < state.player.x + THREAT_HORIZON)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
}

/// Altitude the pilot is steering toward
pub fn target_altitude(state: &GameState) -> f32 {
    let tuning = &state.tuning;
    let min = tuning.min_altitude;
    let max = tuning.max_altitude();

    match nearest_threat(state) {
        Some(threat) => {
            let top = threat.pos.y;
            let bottom = threat.pos.y + threat.size.y;
            let gap_above = top - min;
            let gap_below = max - bottom;
            if gap_above >= gap_below {
                (min + top.max(min)) * 0.5
            } else {
                (bottom.min(max) + max) * 0.5
            }
        }
        None => (min + max) * 0.5,
    }
}

/// Whether the pilot holds thrust this frame
pub fn wants_thrust(state: &GameState) -> bool {
    let predicted = state.player.y
        + state.player.vy * state.tuning.position_scale * LOOKAHEAD_FRAMES;
    predicted > target_altitude(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state_at(y: f32, vy: f32) -> GameState {
        let mut state = GameState::new(1, Tuning::default());
        state.player.y = y;
        state.player.vy = vy;
        state
    }

    #[test]
    fn test_cruise_without_threats() {
        assert_eq!(target_altitude(&state_at(250.0, 0.0)), 250.0);
        assert!(wants_thrust(&state_at(400.0, 0.0)));
        assert!(!wants_thrust(&state_at(100.0, 0.0)));
    }

    #[test]
    fn test_climbs_over_ground_column() {
        let mut state = state_at(300.0, 0.0);
        state.obstacles.insert(Obstacle {
            kind: ObstacleKind::StormColumn,
            pos: Vec2::new(state.player.x + 100.0, 260.0),
            size: Vec2::new(50.0, 200.0),
            speed: 4.2,
        });
        assert_eq!(target_altitude(&state), 160.0);
        assert!(wants_thrust(&state));
    }

    #[test]
    fn test_dives_under_sky_column() {
        let mut state = state_at(150.0, 0.0);
        state.obstacles.insert(Obstacle {
            kind: ObstacleKind::StormColumn,
            pos: Vec2::new(state.player.x + 100.0, 40.0),
            size: Vec2::new(50.0, 200.0),
            speed: 4.2,
        });
        assert_eq!(target_altitude(&state), 340.0);
        assert!(!wants_thrust(&state));
    }

    #[test]
    fn test_ignores_far_and_passed_obstacles() {
        let mut state = state_at(250.0, 0.0);
        let far = Obstacle {
            kind: ObstacleKind::Cloud,
            pos: Vec2::new(state.player.x + 600.0, 100.0),
            size: Vec2::new(100.0, 60.0),
            speed: 4.2,
        };
        let passed = Obstacle {
            pos: Vec2::new(0.0, 100.0),
            ..far
        };
        state.obstacles.insert(far);
        state.obstacles.insert(passed);
        assert!(nearest_threat(&state).is_none());
    }
}
