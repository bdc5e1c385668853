// CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pickxi_core::{Availability, PlayerFilter, Role, Strategy};

fn parse_role(s: &str) -> Result<Role, String> {
    Role::from_str_role(s).ok_or_else(|| format!("unknown role '{s}' (use WK, BAT, AR or BOWL)"))
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    Strategy::from_str_strategy(s)
        .ok_or_else(|| format!("unknown strategy '{s}' (use balanced, aggressive or value)"))
}

#[derive(Debug, Parser)]
#[clap(name = "pickxi", about = "Fantasy cricket XI builder")]
pub struct Cli {
    /// Directory holding config/, defaults/ and data (defaults to the cwd).
    #[clap(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

/// Selection-screen filters for the `players` listing.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only this role: WK, BAT, AR or BOWL.
    #[clap(long, value_parser = parse_role)]
    pub role: Option<Role>,

    /// Case-insensitive substring of the name or short name.
    #[clap(long, short)]
    pub search: Option<String>,

    /// Source team display name.
    #[clap(long)]
    pub team: Option<String>,

    #[clap(long)]
    pub country: Option<String>,

    /// Only players in the announced playing side.
    #[clap(long, conflicts_with = "benched")]
    pub playing: bool,

    /// Only players left out of the playing side.
    #[clap(long)]
    pub benched: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> PlayerFilter {
        let availability = if self.playing {
            Availability::Playing
        } else if self.benched {
            Availability::NotPlaying
        } else {
            Availability::All
        };
        PlayerFilter {
            role: self.role,
            search: self.search.clone(),
            team: self.team.clone(),
            country: self.country.clone(),
            availability,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the player pool, optionally filtered.
    Players {
        #[clap(flatten)]
        filters: FilterArgs,
    },

    /// Suggest one complete XI per strategy.
    Suggest {
        /// Output as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Build a single XI with one strategy.
    Build {
        #[clap(long, value_parser = parse_strategy, default_value = "balanced")]
        strategy: Strategy,

        #[clap(long)]
        json: bool,
    },

    /// Pick players, then fill the remaining slots.
    Fill {
        /// Player id to pick (repeatable).
        #[clap(long = "pick", short = 'p')]
        picks: Vec<String>,

        #[clap(long)]
        json: bool,
    },

    /// Validate a full XI with captain and vice-captain and write it out.
    Save {
        #[clap(long)]
        match_id: u64,

        /// Player id (repeat for all eleven).
        #[clap(long = "pick", short = 'p', required = true)]
        picks: Vec<String>,

        #[clap(long)]
        captain: String,

        #[clap(long)]
        vice_captain: String,

        /// Team name; defaults to one based on the creation time.
        #[clap(long)]
        name: Option<String>,
    },
}
