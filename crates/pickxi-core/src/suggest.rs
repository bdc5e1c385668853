// Team suggestions: one complete roster per strategy, with captain picks
// and a confidence score.

use serde::Serialize;
use tracing::{debug, warn};

use crate::builder::build;
use crate::player::{Player, Role};
use crate::roster::Roster;
use crate::rules::RULES;
use crate::strategy::Strategy;

/// A complete roster proposed under one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSuggestion {
    pub strategy: Strategy,
    pub name: String,
    /// Eleven players with captain and vice-captain already designated.
    pub roster: Roster,
    pub total_credits: f64,
    pub captain: Player,
    pub vice_captain: Player,
    /// 0 to 100.
    pub confidence: u8,
    pub rationale: String,
}

/// Build one suggestion per strategy. Strategies whose build fails are left
/// out, so the list may be shorter than three or empty.
pub fn generate_suggestions(pool: &[Player]) -> Vec<TeamSuggestion> {
    let suggestions: Vec<TeamSuggestion> = Strategy::ALL
        .iter()
        .filter_map(|&strategy| suggest(pool, strategy))
        .collect();

    if suggestions.is_empty() {
        warn!("no strategy produced a roster from {} players", pool.len());
    }
    suggestions
}

/// Build a single suggestion, or `None` if the strategy cannot form a roster.
pub fn suggest(pool: &[Player], strategy: Strategy) -> Option<TeamSuggestion> {
    let Some(mut roster) = build(pool, strategy) else {
        debug!("{} produced no roster", strategy);
        return None;
    };

    let (captain, vice_captain) = captain_picks(&roster)?;
    roster.set_captain(&captain.player_id).ok()?;
    roster.set_vice_captain(&vice_captain.player_id).ok()?;

    let confidence = confidence(&roster);
    debug!(
        "{}: captain {}, vice {}, confidence {}",
        strategy, captain.name, vice_captain.name, confidence
    );

    Some(TeamSuggestion {
        strategy,
        name: strategy.label().to_string(),
        total_credits: roster.total_credits(),
        roster,
        captain,
        vice_captain,
        confidence,
        rationale: strategy.rationale().to_string(),
    })
}

/// Top two scorers on the roster. Ties keep roster order.
fn captain_picks(roster: &Roster) -> Option<(Player, Player)> {
    let mut by_points: Vec<&Player> = roster.players().collect();
    by_points.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    match by_points.as_slice() {
        [first, second, ..] => Some(((*first).clone(), (*second).clone())),
        _ => None,
    }
}

/// Heuristic confidence in a roster, 0 to 100.
///
/// 20 per point of average value score, +30 when every role is within its
/// quota, +20 when more than one source team is represented, +30 baseline.
/// The weights are tunable, not derived from a model.
pub fn confidence(roster: &Roster) -> u8 {
    if roster.is_empty() {
        return 0;
    }
    let avg_value =
        roster.players().map(Player::value_score).sum::<f64>() / roster.len() as f64;
    let roles_ok = Role::ALL
        .iter()
        .all(|&role| RULES.role_limits(role).contains(roster.role_count(role)));
    let diverse = roster.distinct_teams() >= 2;

    let raw = avg_value * 20.0
        + if roles_ok { 30.0 } else { 0.0 }
        + if diverse { 20.0 } else { 0.0 }
        + 30.0;
    raw.round().clamp(0.0, 100.0) as u8
}
