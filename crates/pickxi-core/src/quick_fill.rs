// Quick fill: complete a partially picked roster.

use tracing::debug;

use crate::builder::{greedy_fill, repair};
use crate::player::Player;
use crate::roster::Roster;
use crate::rules::RULES;
use crate::strategy::{rank, rank_by_value, score_pool, Strategy};
use crate::validation::meets_minimums;

/// Fill the open slots of `partial` with the best-value players from `pool`.
///
/// Players already picked stay put. The only exception is a repair swap:
/// when the fill reaches 11 but a role is short of its minimum, the
/// lowest-value member of another role makes way, user picks included, with
/// replacements taken in balanced-strategy order.
///
/// The result is best effort. It can still be short of 11 or miss a role
/// minimum if the pool cannot cover it, so check it before entering a
/// contest.
pub fn quick_fill(partial: &Roster, pool: &[Player]) -> Roster {
    let available: Vec<Player> = pool
        .iter()
        .filter(|p| !partial.contains(&p.player_id))
        .cloned()
        .collect();

    let filled = greedy_fill(partial.clone(), &rank_by_value(score_pool(&available)));
    debug!(
        "quick fill: {} picked, {} after fill",
        partial.len(),
        filled.len()
    );

    if filled.len() == RULES.max_players && !meets_minimums(&filled) {
        let balanced = rank(score_pool(&available), Strategy::Balanced);
        repair(&filled, &balanced)
    } else {
        filled
    }
}
