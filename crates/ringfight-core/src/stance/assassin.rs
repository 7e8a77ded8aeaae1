//! Assassin stance: chase the longest-range opponent.

use super::{heading, step_length, Decision};
use crate::targeting::TargetRecord;
use crate::unit::Unit;

pub(super) fn decide(unit: &Unit, targets: &[TargetRecord]) -> Decision {
    let Some(origin) = unit.position() else {
        return Decision::Idle;
    };

    let mut attacks = Vec::new();
    for target in targets {
        if unit.stats().range < target.distance {
            return Decision::Move {
                delta: heading(origin, target) * step_length(unit, target),
            };
        }
        attacks.push(target.target_id);
    }

    if attacks.is_empty() {
        Decision::Idle
    } else {
        Decision::Attack { targets: attacks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;
    use crate::stance::Stance;
    use crate::unit::{Faction, UnitConfig, UnitId};

    fn assassin(position: u32, range: i64, speed: i64) -> Unit {
        let mut unit = UnitConfig::new("Berserker", 1, 5, 10, range, speed, Stance::Assassin)
            .with_max_targets(3)
            .build(UnitId::new(1))
            .unwrap();
        unit.admit(Faction::Player, 20, position);
        unit
    }

    fn target(id: u64, position: u32, distance: u32, direction: Direction) -> TargetRecord {
        TargetRecord {
            target_id: UnitId::new(id),
            distance,
            direction,
            priority: 1,
            position,
            range: 1,
            speed: 1,
        }
    }

    #[test]
    fn out_of_range_moves_toward_target() {
        let unit = assassin(5, 1, 3);
        let decision = decide(&unit, &[target(2, 12, 7, Direction::Inner)]);
        assert_eq!(decision, Decision::Move { delta: 3 });
    }

    #[test]
    fn step_is_capped_at_closing_distance() {
        let unit = assassin(5, 2, 5);
        // distance 4, range 2: only 2 positions needed
        let decision = decide(&unit, &[target(2, 1, 4, Direction::Inner)]);
        assert_eq!(decision, Decision::Move { delta: -2 });
    }

    #[test]
    fn wraps_toward_outer_target() {
        let unit = assassin(1, 1, 2);
        // 1 -> 17 is shorter backwards across zero
        let decision = decide(&unit, &[target(2, 17, 4, Direction::Outer)]);
        assert_eq!(decision, Decision::Move { delta: -2 });
    }

    #[test]
    fn in_range_attacks_every_reachable_target() {
        let unit = assassin(5, 2, 1);
        let decision = decide(
            &unit,
            &[
                target(2, 7, 2, Direction::Inner),
                target(3, 4, 1, Direction::Inner),
            ],
        );
        assert_eq!(
            decision,
            Decision::Attack {
                targets: vec![UnitId::new(2), UnitId::new(3)]
            }
        );
    }

    #[test]
    fn move_discards_earlier_attacks() {
        let unit = assassin(5, 2, 1);
        let decision = decide(
            &unit,
            &[
                target(2, 6, 1, Direction::Inner),
                target(3, 10, 5, Direction::Inner),
            ],
        );
        assert_eq!(decision, Decision::Move { delta: 1 });
    }

    #[test]
    fn no_targets_is_idle() {
        let unit = assassin(5, 1, 1);
        assert_eq!(decide(&unit, &[]), Decision::Idle);
    }
}
