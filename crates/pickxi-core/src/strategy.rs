// Strategy biases and player ranking.
//
// Every player gets a value score (points per credit) and two price-tier
// tags. A strategy decides which tagged group is tried first; within a group
// players are ordered by descending value score.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Value-score threshold the balanced strategy treats as proven value.
const BALANCED_VALUE_THRESHOLD: f64 = 1.5;

/// Ordering preference used when building a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Balanced,
    Aggressive,
    #[serde(rename = "Value Picks")]
    Value,
}

impl Strategy {
    /// The strategies suggestions are generated for, in output order.
    pub const ALL: [Strategy; 3] = [Strategy::Balanced, Strategy::Aggressive, Strategy::Value];

    pub fn from_str_strategy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "balanced" => Some(Strategy::Balanced),
            "aggressive" => Some(Strategy::Aggressive),
            "value" | "value picks" | "value-picks" => Some(Strategy::Value),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Balanced => "Balanced",
            Strategy::Aggressive => "Aggressive",
            Strategy::Value => "Value Picks",
        }
    }

    /// One-line pitch shown next to a suggestion built with this strategy.
    pub fn rationale(&self) -> &'static str {
        match self {
            Strategy::Balanced => {
                "A well-rounded team balancing high-value stars with budget picks for optimal performance."
            }
            Strategy::Aggressive => {
                "Focuses on premium players with proven track records for maximum fantasy points."
            }
            Strategy::Value => {
                "Prioritizes underrated players offering great value for their credit cost."
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A player annotated for ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlayer {
    pub player: Player,
    pub value_score: f64,
    /// Costs 8 to 10 credits inclusive.
    pub is_premium: bool,
    /// Costs at least 6 and under 8 credits.
    pub is_budget: bool,
}

impl ScoredPlayer {
    pub fn new(player: Player) -> Self {
        let credits = player.credits;
        ScoredPlayer {
            value_score: player.value_score(),
            is_premium: (8.0..=10.0).contains(&credits),
            is_budget: (6.0..8.0).contains(&credits),
            player,
        }
    }
}

/// Score every player in the pool, preserving pool order.
pub fn score_pool(pool: &[Player]) -> Vec<ScoredPlayer> {
    pool.iter().cloned().map(ScoredPlayer::new).collect()
}

/// Sort scored players for a strategy. The sort is stable, so equal players
/// keep their pool order and the result is deterministic.
pub fn rank(mut players: Vec<ScoredPlayer>, strategy: Strategy) -> Vec<ScoredPlayer> {
    players.sort_by(|a, b| compare(a, b, strategy));
    players
}

/// Sort scored players by descending value score alone.
pub fn rank_by_value(mut players: Vec<ScoredPlayer>) -> Vec<ScoredPlayer> {
    players.sort_by(by_value_desc);
    players
}

fn compare(a: &ScoredPlayer, b: &ScoredPlayer, strategy: Strategy) -> Ordering {
    let tiers = match strategy {
        Strategy::Aggressive => first(a.is_premium, b.is_premium),
        Strategy::Value => first(a.is_budget, b.is_budget),
        Strategy::Balanced => first(
            a.value_score > BALANCED_VALUE_THRESHOLD,
            b.value_score > BALANCED_VALUE_THRESHOLD,
        )
        .then_with(|| first(a.is_premium || a.is_budget, b.is_premium || b.is_budget)),
    };
    tiers.then_with(|| by_value_desc(a, b))
}

/// Players with the flag set sort before those without.
fn first(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

fn by_value_desc(a: &ScoredPlayer, b: &ScoredPlayer) -> Ordering {
    b.value_score.total_cmp(&a.value_score)
}
