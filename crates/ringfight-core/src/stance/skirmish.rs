//! Skirmish stance: engage the nearest opponent, kite when it pays off.

use rand::Rng;

use super::{heading, step_length, Decision};
use crate::targeting::TargetRecord;
use crate::unit::Unit;

/// Estimates whether backing away from `target` outpaces its pursuit.
///
/// Computes `ceil((min(range, speed) - target.range) / max(target.speed, 1))`
/// and reports true when the unit gains at least two ticks of free fire.
///
/// # Example
///
/// ```
/// use ringfight_core::stance::worth_kiting;
///
/// assert!(!worth_kiting(3, 5, 1, 2));
/// assert!(worth_kiting(3, 5, 1, 1));
/// ```
#[must_use]
pub fn worth_kiting(range: u32, speed: u32, target_range: u32, target_speed: u32) -> bool {
    let reach = i64::from(range.min(speed)) - i64::from(target_range);
    let pursuit = i64::from(target_speed.max(1));
    // Ceiling division that stays correct for a negative numerator.
    (reach + pursuit - 1).div_euclid(pursuit) >= 2
}

pub(super) fn decide<R: Rng + ?Sized>(
    unit: &Unit,
    targets: &[TargetRecord],
    rng: &mut R,
) -> Decision {
    let Some(origin) = unit.position() else {
        return Decision::Idle;
    };
    let stats = unit.stats();

    let mut attacks = Vec::new();
    for target in targets {
        let not_in_range = stats.range < target.distance;
        let kiting = worth_kiting(stats.range, stats.speed, target.range, target.speed);
        let in_enemy_range = target.range >= target.distance;

        if not_in_range || (kiting && in_enemy_range) {
            let mut dir = heading(origin, target);
            if target.distance < stats.range {
                dir = -dir;
            }
            if origin == target.position {
                dir *= rng.gen_range(-1..=1);
            }
            return Decision::Move {
                delta: dir * step_length(unit, target),
            };
        }

        if target.distance <= stats.range {
            attacks.push(target.target_id);
        }
    }

    if attacks.is_empty() {
        Decision::Idle
    } else {
        Decision::Attack { targets: attacks }
    }
}
