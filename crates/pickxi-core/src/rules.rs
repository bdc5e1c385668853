// Roster composition rules shared by every part of the engine.

use crate::player::Role;

/// Inclusive bounds on how many players of one role a roster may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleLimits {
    pub min: usize,
    pub max: usize,
}

impl RoleLimits {
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// The legal shape of a contest roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterRules {
    pub max_players: usize,
    pub max_credits: f64,
    pub max_from_one_team: usize,
}

/// The one rule set every component enforces.
pub const RULES: RosterRules = RosterRules {
    max_players: 11,
    max_credits: 100.0,
    max_from_one_team: 7,
};

impl RosterRules {
    /// Quota for a role.
    pub fn role_limits(&self, role: Role) -> RoleLimits {
        match role {
            Role::WicketKeeper => RoleLimits { min: 1, max: 5 },
            Role::Batsman => RoleLimits { min: 3, max: 7 },
            Role::AllRounder => RoleLimits { min: 0, max: 4 },
            Role::Bowler => RoleLimits { min: 3, max: 7 },
        }
    }
}
