// Admission checks and whole-roster validity.

use thiserror::Error;

use crate::player::{Player, Role};
use crate::roster::Roster;
use crate::rules::RULES;

/// Slack for summing fractional credit costs.
const CREDIT_EPSILON: f64 = 1e-9;

/// Why a player cannot join a roster. Rejections are routine outcomes that
/// the caller shows to the user, not failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("{name} is already on the roster")]
    AlreadyOnRoster { name: String },

    #[error("max roster size: only {max} players allowed")]
    RosterFull { max: usize },

    #[error("maximum {max} {role}s allowed")]
    RoleFull { role: Role, max: usize },

    #[error("maximum {max} players from {team}")]
    TeamFull { team: String, max: usize },

    #[error("insufficient credits: player costs {cost:.1}, {left:.1} left")]
    InsufficientCredits { cost: f64, left: f64 },
}

/// Decide whether `candidate` may join `roster`.
///
/// Checks run in a fixed order and the first failure wins: roster size, role
/// quota, source-team cap, credit budget. Only the delta introduced by the
/// candidate is evaluated.
pub fn can_admit(roster: &Roster, candidate: &Player) -> Result<(), Rejection> {
    if roster.contains(&candidate.player_id) {
        return Err(Rejection::AlreadyOnRoster {
            name: candidate.name.clone(),
        });
    }

    if roster.len() >= RULES.max_players {
        return Err(Rejection::RosterFull {
            max: RULES.max_players,
        });
    }

    let limits = RULES.role_limits(candidate.role);
    if roster.role_count(candidate.role) >= limits.max {
        return Err(Rejection::RoleFull {
            role: candidate.role,
            max: limits.max,
        });
    }

    if roster.team_count(candidate.team_id) >= RULES.max_from_one_team {
        return Err(Rejection::TeamFull {
            team: candidate.team_short_name.clone(),
            max: RULES.max_from_one_team,
        });
    }

    if roster.total_credits() + candidate.credits > RULES.max_credits + CREDIT_EPSILON {
        return Err(Rejection::InsufficientCredits {
            cost: candidate.credits,
            left: roster.credits_left(),
        });
    }

    Ok(())
}

/// Whether the roster is ready for contest entry: exactly 11 players, every
/// role inside its quota, and within budget.
///
/// The per-team cap is not re-checked; it holds for any roster assembled
/// through [`can_admit`].
pub fn is_complete(roster: &Roster) -> bool {
    roster.len() == RULES.max_players
        && Role::ALL
            .iter()
            .all(|&role| RULES.role_limits(role).contains(roster.role_count(role)))
        && roster.total_credits() <= RULES.max_credits + CREDIT_EPSILON
}

/// Whether every role has reached its minimum.
pub fn meets_minimums(roster: &Roster) -> bool {
    deficient_roles(roster).is_empty()
}

/// Roles still short of their minimum, with how many players each needs.
pub fn deficient_roles(roster: &Roster) -> Vec<(Role, usize)> {
    Role::ALL
        .iter()
        .filter_map(|&role| {
            let missing = RULES
                .role_limits(role)
                .min
                .saturating_sub(roster.role_count(role));
            (missing > 0).then_some((role, missing))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::fixtures::player;

    /// 10 players: WK 1, BAT 4, BOWL 3, AR 2 from two sides, 95 credits.
    fn ten_at_95() -> Roster {
        let players = vec![
            player("wk1", Role::WicketKeeper, 1, 9.5, 80),
            player("bat1", Role::Batsman, 1, 9.5, 90),
            player("bat2", Role::Batsman, 1, 9.5, 70),
            player("bat3", Role::Batsman, 2, 9.5, 60),
            player("bat4", Role::Batsman, 2, 9.5, 50),
            player("bowl1", Role::Bowler, 1, 9.5, 65),
            player("bowl2", Role::Bowler, 2, 9.5, 55),
            player("bowl3", Role::Bowler, 2, 9.5, 45),
            player("ar1", Role::AllRounder, 1, 9.5, 75),
            player("ar2", Role::AllRounder, 2, 9.5, 40),
        ];
        Roster::from_players(players).unwrap()
    }

    #[test]
    fn eleventh_player_over_budget_is_rejected() {
        let roster = ten_at_95();
        assert!((roster.total_credits() - 95.0).abs() < 1e-9);

        let pricey = player("bowl4", Role::Bowler, 1, 6.0, 30);
        let err = can_admit(&roster, &pricey).unwrap_err();
        assert!(matches!(err, Rejection::InsufficientCredits { .. }));
        assert!(err.to_string().starts_with("insufficient credits"));
    }

    #[test]
    fn eleventh_player_exactly_on_budget_completes_roster() {
        let mut roster = ten_at_95();
        let cheap = player("bowl4", Role::Bowler, 1, 5.0, 30);
        assert_eq!(can_admit(&roster, &cheap), Ok(()));

        roster.admit(cheap).unwrap();
        assert_eq!(roster.len(), 11);
        assert!((roster.total_credits() - 100.0).abs() < 1e-9);
        assert!(is_complete(&roster));
    }

    #[test]
    fn full_roster_rejects_before_anything_else() {
        let mut roster = ten_at_95();
        roster.admit(player("bowl4", Role::Bowler, 1, 5.0, 30)).unwrap();

        // Would also break the keeper quota and the budget; size wins.
        let extra = player("wk9", Role::WicketKeeper, 1, 11.0, 10);
        assert_eq!(
            can_admit(&roster, &extra),
            Err(Rejection::RosterFull { max: 11 })
        );
    }

    #[test]
    fn role_quota_checked_before_team_and_credits() {
        let mut roster = Roster::new();
        for i in 0..7 {
            roster
                .admit(player(&format!("bat{i}"), Role::Batsman, 1, 5.0, 10))
                .unwrap();
        }
        // Eighth batsman from the same (full) team: the role reason wins.
        let err = can_admit(&roster, &player("bat8", Role::Batsman, 1, 5.0, 10)).unwrap_err();
        assert_eq!(
            err,
            Rejection::RoleFull {
                role: Role::Batsman,
                max: 7
            }
        );
        assert_eq!(err.to_string(), "maximum 7 Batsmans allowed");
    }

    #[test]
    fn team_cap_names_the_team() {
        let mut roster = Roster::new();
        let roles = [
            Role::Batsman,
            Role::Batsman,
            Role::Bowler,
            Role::Bowler,
            Role::AllRounder,
            Role::AllRounder,
            Role::WicketKeeper,
        ];
        for (i, role) in roles.iter().enumerate() {
            roster
                .admit(player(&format!("p{i}"), *role, 3, 6.0, 10))
                .unwrap();
        }
        let err = can_admit(&roster, &player("p8", Role::Bowler, 3, 6.0, 10)).unwrap_err();
        assert_eq!(
            err,
            Rejection::TeamFull {
                team: "T3".into(),
                max: 7
            }
        );
        assert_eq!(err.to_string(), "maximum 7 players from T3");

        // A player from another side is still fine.
        assert!(can_admit(&roster, &player("p9", Role::Bowler, 4, 6.0, 10)).is_ok());
    }

    #[test]
    fn duplicate_candidate_is_rejected() {
        let roster = ten_at_95();
        let again = player("wk1", Role::WicketKeeper, 1, 9.5, 80);
        assert!(matches!(
            can_admit(&roster, &again),
            Err(Rejection::AlreadyOnRoster { .. })
        ));
    }

    #[test]
    fn rejections_survive_further_additions() {
        let mut roster = Roster::new();
        for i in 0..5 {
            roster
                .admit(player(&format!("wk{i}"), Role::WicketKeeper, i, 8.0, 10))
                .unwrap();
        }
        let sixth_keeper = player("wk6", Role::WicketKeeper, 9, 4.0, 10);
        assert!(can_admit(&roster, &sixth_keeper).is_err());

        for i in 0..4 {
            roster
                .admit(player(&format!("bat{i}"), Role::Batsman, 10 + i, 8.0, 10))
                .unwrap();
            assert!(matches!(
                can_admit(&roster, &sixth_keeper),
                Err(Rejection::RoleFull { .. })
            ));
        }
    }

    #[test]
    fn is_complete_requires_eleven() {
        let roster = ten_at_95();
        assert!(!is_complete(&roster));
        assert!(meets_minimums(&roster));
    }

    #[test]
    fn deficient_roles_reports_shortfall() {
        let mut roster = Roster::new();
        roster.admit(player("bat1", Role::Batsman, 1, 8.0, 10)).unwrap();
        let deficits = deficient_roles(&roster);
        assert_eq!(
            deficits,
            vec![(Role::Batsman, 2), (Role::Bowler, 3), (Role::WicketKeeper, 1)]
        );
    }

    #[test]
    fn deficient_roles_ignores_surplus_roles() {
        // Four batsmen and two all-rounders sit above their minimums.
        let roster = ten_at_95();
        assert!(deficient_roles(&roster).is_empty());

        let mut roster = Roster::new();
        roster.admit(player("ar1", Role::AllRounder, 1, 8.0, 10)).unwrap();
        roster.admit(player("wk1", Role::WicketKeeper, 1, 8.0, 10)).unwrap();
        assert_eq!(
            deficient_roles(&roster),
            vec![(Role::Batsman, 3), (Role::Bowler, 3)]
        );
        assert!(!meets_minimums(&roster));
    }

    #[test]
    fn is_complete_matches_recomputation_for_admitted_rosters() {
        // Eleven players with no keeper are admissible but never complete.
        let mut roster = Roster::new();
        for i in 0..6 {
            roster
                .admit(player(&format!("bat{i}"), Role::Batsman, i % 2, 8.0, 10))
                .unwrap();
        }
        for i in 0..5 {
            roster
                .admit(player(&format!("bowl{i}"), Role::Bowler, i % 2, 8.0, 10))
                .unwrap();
        }
        assert_eq!(roster.len(), 11);
        let recomputed = Role::ALL
            .iter()
            .all(|&r| RULES.role_limits(r).contains(roster.role_count(r)))
            && roster.total_credits() <= RULES.max_credits;
        assert!(!recomputed);
        assert_eq!(is_complete(&roster), recomputed);
    }
}
