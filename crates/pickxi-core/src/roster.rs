// Roster construction, player toggling and summary counts.

use serde::{Deserialize, Serialize};

use crate::player::{Player, Role, TeamId};
use crate::rules::{RoleLimits, RULES};
use crate::validation::{can_admit, Rejection};

/// Multiplier role carried by a roster member.
///
/// A member holds at most one designation, so nobody can be captain and
/// vice-captain at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Designation {
    #[default]
    None,
    Captain,
    ViceCaptain,
}

/// A player on a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player: Player,
    #[serde(default)]
    pub designation: Designation,
}

impl RosterEntry {
    pub fn new(player: Player) -> Self {
        RosterEntry {
            player,
            designation: Designation::None,
        }
    }

    pub fn is_captain(&self) -> bool {
        self.designation == Designation::Captain
    }

    pub fn is_vice_captain(&self) -> bool {
        self.designation == Designation::ViceCaptain
    }
}

/// Result of toggling a player on or off a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// A set of distinct players, in the order they were admitted.
///
/// Every insertion goes through [`can_admit`], so size, role maximums, the
/// per-team cap and the budget always hold. Role minimums only hold once the
/// roster is complete.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Admit players one at a time, stopping at the first rejection.
    pub fn from_players<I>(players: I) -> Result<Self, Rejection>
    where
        I: IntoIterator<Item = Player>,
    {
        let mut roster = Roster::new();
        for player in players {
            roster.admit(player)?;
        }
        Ok(roster)
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [RosterEntry] {
        &mut self.entries
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.entries.iter().map(|e| &e.player)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= RULES.max_players
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.entries.iter().any(|e| e.player.player_id == player_id)
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.entries.iter().filter(|e| e.player.role == role).count()
    }

    pub fn team_count(&self, team_id: TeamId) -> usize {
        self.entries
            .iter()
            .filter(|e| e.player.team_id == team_id)
            .count()
    }

    pub fn total_credits(&self) -> f64 {
        self.entries.iter().map(|e| e.player.credits).sum()
    }

    pub fn credits_left(&self) -> f64 {
        RULES.max_credits - self.total_credits()
    }

    /// Number of distinct source teams represented.
    pub fn distinct_teams(&self) -> usize {
        let mut ids: Vec<TeamId> = self.entries.iter().map(|e| e.player.team_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Add a player if the rules allow it.
    pub fn admit(&mut self, player: Player) -> Result<(), Rejection> {
        can_admit(self, &player)?;
        self.entries.push(RosterEntry::new(player));
        Ok(())
    }

    /// Remove a player by id, returning the removed entry.
    pub fn remove(&mut self, player_id: &str) -> Option<RosterEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.player.player_id == player_id)?;
        Some(self.entries.remove(idx))
    }

    /// Select or deselect a player: removes them if present, otherwise tries
    /// to admit them.
    pub fn toggle(&mut self, player: &Player) -> Result<Toggled, Rejection> {
        if self.remove(&player.player_id).is_some() {
            return Ok(Toggled::Removed);
        }
        self.admit(player.clone())?;
        Ok(Toggled::Added)
    }

    /// A copy of this roster without the given player.
    pub fn without(&self, player_id: &str) -> Roster {
        Roster {
            entries: self
                .entries
                .iter()
                .filter(|e| e.player.player_id != player_id)
                .cloned()
                .collect(),
        }
    }

    /// A copy of this roster with the player admitted, or the rejection.
    pub fn with_admitted(&self, player: &Player) -> Result<Roster, Rejection> {
        let mut next = self.clone();
        next.admit(player.clone())?;
        Ok(next)
    }

    /// Per-role counts and budget figures for display.
    pub fn summary(&self) -> RosterSummary {
        let mut roles: Vec<RoleCount> = Role::ALL
            .iter()
            .map(|&role| RoleCount {
                role,
                count: self.role_count(role),
                limits: RULES.role_limits(role),
            })
            .collect();
        roles.sort_by_key(|r| r.role.sort_order());

        RosterSummary {
            players: self.len(),
            max_players: RULES.max_players,
            credits_used: self.total_credits(),
            credits_left: self.credits_left(),
            roles,
        }
    }
}

/// How many players of one role are on a roster, against its quota.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
    #[serde(skip)]
    pub limits: RoleLimits,
}

impl RoleCount {
    pub fn within_limits(&self) -> bool {
        self.limits.contains(self.count)
    }
}

/// Snapshot of roster progress: size, budget and role counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    pub players: usize,
    pub max_players: usize,
    pub credits_used: f64,
    pub credits_left: f64,
    /// Keeper first, then batsmen, all-rounders, bowlers.
    pub roles: Vec<RoleCount>,
}
