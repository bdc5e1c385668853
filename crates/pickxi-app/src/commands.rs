// Command handlers.
//
// Each handler takes the loaded pool and writes its output to `out`, so the
// binary passes stdout and tests pass a buffer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use pickxi_core::validation::deficient_roles;
use pickxi_core::{
    build, commit, generate_suggestions, is_complete, quick_fill, CommitRequest, Player,
    PlayerFilter, Roster, SavedTeam, Strategy, TeamSuggestion, Toggled, RULES,
};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// players
// ---------------------------------------------------------------------------

pub fn run_players(
    pool: &[Player],
    filter: &PlayerFilter,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut players = filter.apply(pool);
    players.sort_by(|a, b| {
        a.role
            .sort_order()
            .cmp(&b.role.sort_order())
            .then(b.credits.total_cmp(&a.credits))
            .then_with(|| a.name.cmp(&b.name))
    });

    writeln!(
        out,
        "{:<12} {:<24} {:<4} {:<6} {:>7} {:>6}  {}",
        "ID", "NAME", "ROLE", "TEAM", "CREDITS", "POINTS", "XI"
    )?;
    for p in &players {
        writeln!(
            out,
            "{:<12} {:<24} {:<4} {:<6} {:>7.1} {:>6}  {}",
            p.player_id,
            p.name,
            p.role.abbrev(),
            p.team_short_name,
            p.credits,
            p.total_points,
            if p.is_playing { "yes" } else { "no" }
        )?;
    }
    writeln!(out, "{} of {} players", players.len(), pool.len())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// suggest / build
// ---------------------------------------------------------------------------

pub fn run_suggest(pool: &[Player], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let suggestions = generate_suggestions(pool);
    info!("generated {} suggestions", suggestions.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &suggestions)?;
        writeln!(out)?;
        return Ok(());
    }
    if suggestions.is_empty() {
        writeln!(out, "no suggestions available")?;
        return Ok(());
    }
    for (i, s) in suggestions.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_suggestion(s, out)?;
    }
    Ok(())
}

pub fn run_build(
    pool: &[Player],
    strategy: Strategy,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(roster) = build(pool, strategy) else {
        warn!("{} build failed on {} players", strategy, pool.len());
        writeln!(
            out,
            "could not build a legal XI with the {} strategy from {} players",
            strategy.label(),
            pool.len()
        )?;
        return Ok(());
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &roster)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", strategy.label())?;
        write_roster(&roster, out)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// fill
// ---------------------------------------------------------------------------

pub fn run_fill(
    pool: &[Player],
    picks: &[String],
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut roster = Roster::new();
    for id in picks {
        let Some(player) = find_player(pool, id) else {
            writeln!(out, "{id}: unknown player id")?;
            continue;
        };
        match roster.toggle(player) {
            Ok(Toggled::Added) => {}
            Ok(Toggled::Removed) => writeln!(out, "{id}: picked twice, removed")?,
            Err(reason) => writeln!(out, "{id}: {reason}")?,
        }
    }

    let filled = quick_fill(&roster, pool);
    info!(
        "quick fill: {} picked, {} after fill",
        roster.len(),
        filled.len()
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &filled)?;
        writeln!(out)?;
        return Ok(());
    }

    write_roster(&filled, out)?;
    if is_complete(&filled) {
        writeln!(out, "roster complete")?;
    } else {
        let short: Vec<String> = deficient_roles(&filled)
            .iter()
            .map(|(role, missing)| format!("{missing} {}", role.abbrev()))
            .collect();
        if short.is_empty() {
            writeln!(out, "roster incomplete")?;
        } else {
            writeln!(out, "roster incomplete, short of {}", short.join(", "))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// save
// ---------------------------------------------------------------------------

/// Inputs for [`run_save`].
#[derive(Debug, Clone)]
pub struct SaveParams {
    pub match_id: u64,
    pub picks: Vec<String>,
    pub captain: String,
    pub vice_captain: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Build the roster from `params.picks`, designate captains, commit and write
/// `<teams_dir>/<id>.json`. Returns the written path.
pub fn run_save(
    pool: &[Player],
    params: SaveParams,
    teams_dir: &Path,
    out: &mut impl Write,
) -> anyhow::Result<PathBuf> {
    let mut roster = Roster::new();
    for id in &params.picks {
        let Some(player) = find_player(pool, id) else {
            bail!("unknown player id '{id}'");
        };
        if roster.contains(id) {
            bail!("player '{id}' picked more than once");
        }
        roster
            .admit(player.clone())
            .with_context(|| format!("cannot pick '{id}'"))?;
    }

    roster.set_captain(&params.captain)?;
    roster.set_vice_captain(&params.vice_captain)?;

    let created_at = params.created_at;
    let request = CommitRequest {
        id: format!("team_{}", created_at.timestamp_millis()),
        match_id: params.match_id,
        name: params
            .name
            .unwrap_or_else(|| format!("Team {}", created_at.format("%Y-%m-%d %H:%M"))),
        created_at,
    };
    let saved = commit(&roster, request)?;
    let path = write_team(&saved, teams_dir)?;

    info!("saved team {} to {}", saved.id, path.display());
    writeln!(out, "saved {} ({}) to {}", saved.name, saved.id, path.display())?;
    Ok(path)
}

fn write_team(team: &SavedTeam, teams_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(teams_dir)
        .with_context(|| format!("failed to create {}", teams_dir.display()))?;
    let path = teams_dir.join(format!("{}.json", team.id));
    let json = serde_json::to_string_pretty(team)?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

fn find_player<'a>(pool: &'a [Player], id: &str) -> Option<&'a Player> {
    pool.iter().find(|p| p.player_id == id)
}

fn write_suggestion(s: &TeamSuggestion, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{} (confidence {}%)", s.name, s.confidence)?;
    writeln!(out, "{}", s.rationale)?;
    writeln!(
        out,
        "Captain: {}  Vice-captain: {}",
        s.captain.name, s.vice_captain.name
    )?;
    write_roster(&s.roster, out)
}

fn write_roster(roster: &Roster, out: &mut impl Write) -> anyhow::Result<()> {
    let mut entries: Vec<_> = roster.entries().iter().collect();
    entries.sort_by_key(|e| e.player.role.sort_order());

    for e in entries {
        let mark = if e.is_captain() {
            "C"
        } else if e.is_vice_captain() {
            "VC"
        } else {
            ""
        };
        writeln!(
            out,
            "  {:<2} {:<24} {:<4} {:<6} {:>5.1} {:>5}",
            mark,
            e.player.name,
            e.player.role.abbrev(),
            e.player.team_short_name,
            e.player.credits,
            e.player.total_points
        )?;
    }

    let summary = roster.summary();
    let roles: Vec<String> = summary
        .roles
        .iter()
        .map(|r| format!("{} {}", r.role.abbrev(), r.count))
        .collect();
    writeln!(
        out,
        "  Players {}/{}  Credits {:.1}/{:.0} ({:.1} left)  {}",
        summary.players,
        summary.max_players,
        summary.credits_used,
        RULES.max_credits,
        summary.credits_left,
        roles.join("  ")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pickxi_core::{Availability, Role};

    fn player(id: &str, role: Role, team_id: u32, credits: f64, points: u32) -> Player {
        Player {
            player_id: id.to_string(),
            name: format!("Player {id}"),
            short_name: id.to_string(),
            role,
            country: "India".into(),
            team_id,
            team_name: format!("Team {team_id}"),
            team_short_name: format!("T{team_id}"),
            credits,
            total_points: points,
            is_playing: id != "w5",
        }
    }

    fn eleven() -> Vec<Player> {
        vec![
            player("wk", Role::WicketKeeper, 1, 8.0, 40),
            player("b1", Role::Batsman, 1, 10.0, 95),
            player("b2", Role::Batsman, 1, 9.0, 60),
            player("b3", Role::Batsman, 2, 8.5, 55),
            player("b4", Role::Batsman, 2, 7.0, 35),
            player("a1", Role::AllRounder, 1, 9.5, 80),
            player("w1", Role::Bowler, 1, 9.0, 50),
            player("w2", Role::Bowler, 2, 8.5, 45),
            player("w3", Role::Bowler, 2, 8.0, 30),
            player("w4", Role::Bowler, 2, 7.5, 25),
            player("w5", Role::Bowler, 2, 6.0, 12),
        ]
    }

    fn ids() -> Vec<String> {
        eleven().into_iter().map(|p| p.player_id).collect()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn save_params(picks: Vec<String>) -> SaveParams {
        SaveParams {
            match_id: 3,
            picks,
            captain: "b1".into(),
            vice_captain: "a1".into(),
            name: None,
            created_at: Utc.with_ymd_and_hms(2026, 5, 2, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn players_lists_filtered_pool() {
        let pool = eleven();
        let filter = PlayerFilter {
            role: Some(Role::Bowler),
            availability: Availability::Playing,
            ..Default::default()
        };
        let text = render(|out| run_players(&pool, &filter, out));
        assert!(text.contains("Player w1"));
        assert!(!text.contains("Player w5"));
        assert!(!text.contains("Player b1"));
        assert!(text.ends_with("4 of 11 players\n"));
    }

    #[test]
    fn suggest_on_unbuildable_pool_says_so() {
        let pool: Vec<Player> = eleven()
            .into_iter()
            .filter(|p| p.role != Role::WicketKeeper)
            .collect();
        let text = render(|out| run_suggest(&pool, false, out));
        assert_eq!(text, "no suggestions available\n");
    }

    #[test]
    fn suggest_json_is_an_array() {
        let pool = eleven();
        let text = render(|out| run_suggest(&pool, true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["strategy"], "Balanced");
    }

    #[test]
    fn build_failure_prints_message() {
        let pool: Vec<Player> = eleven().into_iter().take(10).collect();
        let text = render(|out| run_build(&pool, Strategy::Aggressive, false, out));
        assert!(text.starts_with("could not build a legal XI"));
    }

    #[test]
    fn fill_reports_rejections_and_completes() {
        let pool = eleven();
        let picks = vec!["b1".to_string(), "nope".to_string()];
        let text = render(|out| run_fill(&pool, &picks, false, out));
        assert!(text.contains("nope: unknown player id"));
        assert!(text.contains("Players 11/11"));
        assert!(text.ends_with("roster complete\n"));
    }

    #[test]
    fn save_writes_team_json() {
        let tmp = tempfile::tempdir().unwrap();
        let pool = eleven();
        let mut buf = Vec::new();
        let path = run_save(&pool, save_params(ids()), tmp.path(), &mut buf).unwrap();

        assert_eq!(path.file_name().unwrap(), "team_1777746600000.json");
        let saved: SavedTeam =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.match_id, 3);
        assert_eq!(saved.name, "Team 2026-05-02 18:30");
        assert_eq!(saved.captain().unwrap().player.player_id, "b1");
        assert_eq!(saved.vice_captain().unwrap().player.player_id, "a1");
    }

    #[test]
    fn save_rejects_short_roster() {
        let tmp = tempfile::tempdir().unwrap();
        let pool = eleven();
        let mut picks = ids();
        picks.pop();
        let err = run_save(&pool, save_params(picks), tmp.path(), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("incomplete"));
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[test]
    fn save_rejects_unknown_captain() {
        let tmp = tempfile::tempdir().unwrap();
        let pool = eleven();
        let mut params = save_params(ids());
        params.captain = "ghost".into();
        let err = run_save(&pool, params, tmp.path(), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
