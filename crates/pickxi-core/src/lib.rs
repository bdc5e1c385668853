// Roster constraint engine: admission rules, greedy roster building, quick
// fill, strategy suggestions and captaincy.
//
// Everything here is synchronous and free of I/O. Callers hand in a player
// pool snapshot and get new values back.

pub mod builder;
pub mod captain;
pub mod filters;
pub mod player;
pub mod quick_fill;
pub mod roster;
pub mod rules;
pub mod strategy;
pub mod suggest;
pub mod team;
pub mod validation;

pub use builder::build;
pub use filters::{Availability, PlayerFilter};
pub use player::{Player, Role, TeamId};
pub use quick_fill::quick_fill;
pub use roster::{Designation, Roster, RosterEntry, RosterSummary, Toggled};
pub use rules::{RoleLimits, RosterRules, RULES};
pub use strategy::Strategy;
pub use suggest::{generate_suggestions, TeamSuggestion};
pub use team::{commit, CommitRequest, RosterError, SavedTeam};
pub use validation::{can_admit, is_complete, Rejection};
