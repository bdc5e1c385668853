// Greedy roster builder and the role-minimum repair pass.
//
// The builder walks a strategy-ranked pool once, admitting every player the
// rules allow until the roster is full. Greedy selection can leave a role
// short of its minimum (or the roster short of 11), so a repair pass follows:
//
// - Fewer than 11 players: top up each deficient role with the best-ranked
//   admissible players of that role.
// - Exactly 11 players: for each missing player of a deficient role, take
//   the next best-ranked unused player of that role and swap out the
//   lowest-value member of any other role, if that swap is legal. A swap can
//   leave another role short; the final completeness check catches that.
//
// Repair works on roster snapshots. Each step produces a new roster that is
// either kept or dropped; nothing is mutated while candidates are scanned.

use tracing::{debug, trace};

use crate::player::{Player, Role};
use crate::roster::Roster;
use crate::rules::RULES;
use crate::strategy::{rank, score_pool, ScoredPlayer, Strategy};
use crate::validation::{deficient_roles, is_complete, meets_minimums};

/// Build a complete roster from `pool` using the given strategy.
///
/// Returns `None` when no complete roster can be formed, e.g. the pool has
/// no wicket-keeper or too few affordable players.
pub fn build(pool: &[Player], strategy: Strategy) -> Option<Roster> {
    let ranked = rank(score_pool(pool), strategy);
    let greedy = greedy_fill(Roster::new(), &ranked);
    debug!(
        "{} greedy pass admitted {} players ({:.1} credits)",
        strategy,
        greedy.len(),
        greedy.total_credits()
    );

    let roster = if greedy.len() < RULES.max_players || !meets_minimums(&greedy) {
        repair(&greedy, &ranked)
    } else {
        greedy
    };

    if is_complete(&roster) {
        Some(roster)
    } else {
        debug!(
            "{} build failed: {} players, short roles {:?}",
            strategy,
            roster.len(),
            deficient_roles(&roster)
        );
        None
    }
}

/// Admit players in ranked order until the roster is full or the list runs
/// out. Players the rules reject are skipped.
pub(crate) fn greedy_fill(mut roster: Roster, ranked: &[ScoredPlayer]) -> Roster {
    for scored in ranked {
        if roster.is_full() {
            break;
        }
        if let Err(reason) = roster.admit(scored.player.clone()) {
            trace!("skipping {}: {}", scored.player.name, reason);
        }
    }
    roster
}

/// Fix role-minimum shortfalls using `ranked` as the candidate order.
///
/// Returns a new roster; the input is left untouched. The result may still
/// fall short if no admissible candidates exist, so callers re-check with
/// [`is_complete`].
pub fn repair(roster: &Roster, ranked: &[ScoredPlayer]) -> Roster {
    if roster.len() < RULES.max_players {
        fill_minimums(roster, ranked)
    } else if !meets_minimums(roster) {
        swap_for_minimums(roster, ranked)
    } else {
        roster.clone()
    }
}

fn fill_minimums(roster: &Roster, ranked: &[ScoredPlayer]) -> Roster {
    let mut current = roster.clone();
    for role in Role::ALL {
        let min = RULES.role_limits(role).min;
        for candidate in ranked.iter().filter(|s| s.player.role == role) {
            if current.role_count(role) >= min {
                break;
            }
            if let Ok(next) = current.with_admitted(&candidate.player) {
                debug!("repair: added {} ({})", candidate.player.name, role);
                current = next;
            }
        }
    }
    current
}

fn swap_for_minimums(roster: &Roster, ranked: &[ScoredPlayer]) -> Roster {
    let available: Vec<&Player> = ranked
        .iter()
        .map(|s| &s.player)
        .filter(|p| !roster.contains(&p.player_id))
        .collect();

    let mut current = roster.clone();
    for role in Role::ALL {
        let needed = RULES
            .role_limits(role)
            .min
            .saturating_sub(current.role_count(role));
        for candidate in available.iter().filter(|p| p.role == role).take(needed) {
            if let Some(next) = try_swap(&current, candidate) {
                current = next;
            }
        }
    }
    current
}

/// Swap the lowest-value member outside `incoming`'s role for `incoming`, or
/// `None` if the swap is not legal.
fn try_swap(roster: &Roster, incoming: &Player) -> Option<Roster> {
    let outgoing = swap_out_candidate(roster, incoming.role)?;
    let next = roster
        .without(&outgoing.player_id)
        .with_admitted(incoming)
        .ok()?;

    debug!(
        "repair: swapped out {} ({}) for {} ({})",
        outgoing.name, outgoing.role, incoming.name, incoming.role
    );
    Some(next)
}

/// Lowest value-score member outside `role`. Ties go to the earliest
/// admitted.
fn swap_out_candidate(roster: &Roster, role: Role) -> Option<&Player> {
    roster
        .players()
        .filter(|p| p.role != role)
        .min_by(|a, b| a.value_score().total_cmp(&b.value_score()))
}
