// Captain and vice-captain assignment.

use crate::player::Player;
use crate::roster::{Designation, Roster};
use crate::team::RosterError;

impl Roster {
    /// Toggle the captaincy on a member.
    ///
    /// Picking the current captain clears the captaincy. Picking anyone else
    /// moves the armband to them; if they were vice-captain that designation
    /// is dropped.
    pub fn set_captain(&mut self, player_id: &str) -> Result<(), RosterError> {
        self.toggle_designation(player_id, Designation::Captain)
    }

    /// Toggle the vice-captaincy on a member. Mirror image of
    /// [`Roster::set_captain`].
    pub fn set_vice_captain(&mut self, player_id: &str) -> Result<(), RosterError> {
        self.toggle_designation(player_id, Designation::ViceCaptain)
    }

    pub fn captain(&self) -> Option<&Player> {
        self.entries()
            .iter()
            .find(|e| e.is_captain())
            .map(|e| &e.player)
    }

    pub fn vice_captain(&self) -> Option<&Player> {
        self.entries()
            .iter()
            .find(|e| e.is_vice_captain())
            .map(|e| &e.player)
    }

    fn toggle_designation(
        &mut self,
        player_id: &str,
        designation: Designation,
    ) -> Result<(), RosterError> {
        let idx = self
            .entries()
            .iter()
            .position(|e| e.player.player_id == player_id)
            .ok_or_else(|| RosterError::NotOnRoster {
                player_id: player_id.to_string(),
            })?;

        let entries = self.entries_mut();
        if entries[idx].designation == designation {
            entries[idx].designation = Designation::None;
            return Ok(());
        }

        for entry in entries.iter_mut() {
            if entry.designation == designation {
                entry.designation = Designation::None;
            }
        }
        entries[idx].designation = designation;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::fixtures::player;
    use crate::player::Role;

    fn three() -> Roster {
        Roster::from_players(vec![
            player("a", Role::Batsman, 1, 9.0, 50),
            player("b", Role::Bowler, 1, 9.0, 40),
            player("c", Role::WicketKeeper, 2, 9.0, 30),
        ])
        .unwrap()
    }

    fn designated(roster: &Roster, d: Designation) -> usize {
        roster
            .entries()
            .iter()
            .filter(|e| e.designation == d)
            .count()
    }

    #[test]
    fn set_captain_marks_member() {
        let mut roster = three();
        roster.set_captain("a").unwrap();
        assert_eq!(roster.captain().map(|p| p.player_id.as_str()), Some("a"));
        assert!(roster.vice_captain().is_none());
    }

    #[test]
    fn set_captain_twice_clears() {
        let mut roster = three();
        roster.set_captain("a").unwrap();
        roster.set_captain("a").unwrap();
        assert!(roster.captain().is_none());
    }

    #[test]
    fn new_captain_replaces_old() {
        let mut roster = three();
        roster.set_captain("a").unwrap();
        roster.set_captain("b").unwrap();
        assert_eq!(roster.captain().map(|p| p.player_id.as_str()), Some("b"));
        assert_eq!(designated(&roster, Designation::Captain), 1);
    }

    #[test]
    fn captain_over_vice_clears_vice() {
        let mut roster = three();
        roster.set_vice_captain("a").unwrap();
        roster.set_captain("a").unwrap();
        assert_eq!(roster.captain().map(|p| p.player_id.as_str()), Some("a"));
        assert!(roster.vice_captain().is_none());
    }

    #[test]
    fn vice_over_captain_clears_captain() {
        let mut roster = three();
        roster.set_captain("b").unwrap();
        roster.set_vice_captain("b").unwrap();
        assert!(roster.captain().is_none());
        assert_eq!(
            roster.vice_captain().map(|p| p.player_id.as_str()),
            Some("b")
        );
    }

    #[test]
    fn unknown_member_is_an_error() {
        let mut roster = three();
        assert_eq!(
            roster.set_captain("zzz"),
            Err(RosterError::NotOnRoster {
                player_id: "zzz".into()
            })
        );
    }

    #[test]
    fn exclusivity_holds_for_any_sequence() {
        let ids = ["a", "b", "c"];
        let mut roster = three();
        // Walk a long deterministic sequence of mixed calls.
        for step in 0..60usize {
            let id = ids[(step * 7 + step / 3) % ids.len()];
            if step % 2 == 0 {
                roster.set_captain(id).unwrap();
            } else {
                roster.set_vice_captain(id).unwrap();
            }
            assert!(designated(&roster, Designation::Captain) <= 1);
            assert!(designated(&roster, Designation::ViceCaptain) <= 1);
            if let (Some(c), Some(v)) = (roster.captain(), roster.vice_captain()) {
                assert_ne!(c.player_id, v.player_id);
            }
        }
    }
}
