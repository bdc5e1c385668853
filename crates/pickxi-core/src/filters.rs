// Player pool filtering for selection listings.

use serde::{Deserialize, Serialize};

use crate::player::{Player, Role};

/// Availability filter on the announced playing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    All,
    Playing,
    NotPlaying,
}

impl Availability {
    fn matches(&self, player: &Player) -> bool {
        match self {
            Availability::All => true,
            Availability::Playing => player.is_playing,
            Availability::NotPlaying => !player.is_playing,
        }
    }
}

/// Criteria for narrowing the pool. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub role: Option<Role>,
    /// Case-insensitive substring of the name or short name.
    pub search: Option<String>,
    /// Source team display name, exact.
    pub team: Option<String>,
    pub country: Option<String>,
    pub availability: Availability,
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        if self.role.is_some_and(|role| player.role != role) {
            return false;
        }

        if let Some(term) = self.search.as_deref() {
            let term = term.to_lowercase();
            if !player.name.to_lowercase().contains(&term)
                && !player.short_name.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if self.team.as_deref().is_some_and(|t| player.team_name != t) {
            return false;
        }

        if self.country.as_deref().is_some_and(|c| player.country != c) {
            return false;
        }

        self.availability.matches(player)
    }

    /// Matching players, in pool order.
    pub fn apply<'a>(&self, pool: &'a [Player]) -> Vec<&'a Player> {
        pool.iter().filter(|p| self.matches(p)).collect()
    }
}
