// Player records and playing roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a real-world source team (the side a player turns out for).
pub type TeamId = u32;

/// Cricket playing roles used for roster quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Wicket-Keeper")]
    WicketKeeper,
    Batsman,
    #[serde(rename = "All-Rounder")]
    AllRounder,
    Bowler,
}

impl Role {
    /// Every role, in the order quotas are checked and repaired.
    pub const ALL: [Role; 4] = [
        Role::Batsman,
        Role::Bowler,
        Role::AllRounder,
        Role::WicketKeeper,
    ];

    /// Parse a role string.
    ///
    /// Accepts the display names ("Wicket-Keeper", "All-Rounder", ...) as well
    /// as the usual abbreviations (WK, BAT, AR, BOWL). Case-insensitive.
    pub fn from_str_role(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "WICKET-KEEPER" | "WICKETKEEPER" | "WICKET KEEPER" | "WK" => Some(Role::WicketKeeper),
            "BATSMAN" | "BATTER" | "BAT" => Some(Role::Batsman),
            "ALL-ROUNDER" | "ALLROUNDER" | "ALL ROUNDER" | "AR" => Some(Role::AllRounder),
            "BOWLER" | "BOWL" => Some(Role::Bowler),
            _ => None,
        }
    }

    /// Return the display string for this role.
    pub fn display_str(&self) -> &'static str {
        match self {
            Role::WicketKeeper => "Wicket-Keeper",
            Role::Batsman => "Batsman",
            Role::AllRounder => "All-Rounder",
            Role::Bowler => "Bowler",
        }
    }

    /// Short label used in compact listings.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Role::WicketKeeper => "WK",
            Role::Batsman => "BAT",
            Role::AllRounder => "AR",
            Role::Bowler => "BOWL",
        }
    }

    /// Deterministic ordering index for roster display (keeper first).
    pub fn sort_order(&self) -> u8 {
        match self {
            Role::WicketKeeper => 0,
            Role::Batsman => 1,
            Role::AllRounder => 2,
            Role::Bowler => 3,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A player available for selection in a match.
///
/// Players come wholesale from an external source and are never mutated by
/// the engine; rosters hold copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub name: String,
    pub short_name: String,
    pub role: Role,
    pub country: String,
    pub team_id: TeamId,
    pub team_name: String,
    pub team_short_name: String,
    /// Credit cost against the roster budget.
    pub credits: f64,
    /// Points scored in the event so far.
    pub total_points: u32,
    /// Whether the player is in the announced playing side.
    pub is_playing: bool,
}

impl Player {
    /// Points per credit. Non-positive or non-finite costs score 0.0 so they
    /// never float to the top of a ranking.
    pub fn value_score(&self) -> f64 {
        if self.credits > 0.0 && self.credits.is_finite() {
            self.total_points as f64 / self.credits
        } else {
            0.0
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a player with sensible defaults for everything the engine ignores.
    pub fn player(id: &str, role: Role, team_id: TeamId, credits: f64, points: u32) -> Player {
        Player {
            player_id: id.to_string(),
            name: format!("Player {id}"),
            short_name: id.to_string(),
            role,
            country: "India".to_string(),
            team_id,
            team_name: format!("Team {team_id}"),
            team_short_name: format!("T{team_id}"),
            credits,
            total_points: points,
            is_playing: true,
        }
    }
}
