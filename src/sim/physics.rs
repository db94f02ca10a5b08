//! Vertical flight integration
//!
//! One explicit Euler step per frame. Velocity is scaled by `dt`, position
//! moves by `velocity * position_scale` per tick.

use super::state::Player;
use crate::tuning::Tuning;

/// Advance the craft by one frame of `dt` simulation units
pub fn integrate(player: &mut Player, thrust: bool, dt: f32, tuning: &Tuning) {
    player.vy += tuning.gravity * dt;
    if thrust {
        player.vy -= tuning.thrust * dt;
    }
    player.vy = player.vy.clamp(-tuning.max_vy, tuning.max_vy);

    player.y += player.vy * tuning.position_scale;

    let max_altitude = tuning.max_altitude();
    if player.y < tuning.min_altitude {
        player.y = tuning.min_altitude;
        if tuning.zero_velocity_at_bounds && player.vy < 0.0 {
            player.vy = 0.0;
        }
    } else if player.y > max_altitude {
        player.y = max_altitude;
        if tuning.zero_velocity_at_bounds && player.vy > 0.0 {
            player.vy = 0.0;
        }
    }
}
