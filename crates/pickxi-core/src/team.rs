// Committing a finished roster as a saved team.
//
// Storage itself is someone else's job: this module only checks that a
// roster is fit for contest entry and stamps it with the metadata a store
// needs (id, match, creation time).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::{Roster, RosterEntry};
use crate::rules::RULES;
use crate::validation::{deficient_roles, is_complete};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("player {player_id} is not on the roster")]
    NotOnRoster { player_id: String },

    #[error("roster is incomplete: {players}/{max} players")]
    Incomplete { players: usize, max: usize },

    #[error("roster breaks a role quota or the credit budget")]
    InvalidComposition,

    #[error("please select both captain and vice-captain")]
    MissingDesignation,
}

/// Metadata supplied by the caller when committing.
#[derive(Debug, Clone)]
pub struct CommitRequest {
    pub id: String,
    pub match_id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A roster ready to hand to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTeam {
    pub id: String,
    pub match_id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub players: Vec<RosterEntry>,
}

impl SavedTeam {
    pub fn captain(&self) -> Option<&RosterEntry> {
        self.players.iter().find(|e| e.is_captain())
    }

    pub fn vice_captain(&self) -> Option<&RosterEntry> {
        self.players.iter().find(|e| e.is_vice_captain())
    }
}

/// Validate `roster` for contest entry and wrap it with `request` metadata.
pub fn commit(roster: &Roster, request: CommitRequest) -> Result<SavedTeam, RosterError> {
    if roster.len() != RULES.max_players {
        return Err(RosterError::Incomplete {
            players: roster.len(),
            max: RULES.max_players,
        });
    }
    if !is_complete(roster) {
        tracing::debug!("commit rejected, short roles {:?}", deficient_roles(roster));
        return Err(RosterError::InvalidComposition);
    }
    if roster.captain().is_none() || roster.vice_captain().is_none() {
        return Err(RosterError::MissingDesignation);
    }

    Ok(SavedTeam {
        id: request.id,
        match_id: request.match_id,
        name: request.name,
        created_at: request.created_at,
        players: roster.entries().to_vec(),
    })
}
