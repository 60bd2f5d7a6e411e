use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::record::{GoalscorerInput, MatchResult};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Parses a `--scorer` argument of the form `PLAYER_ID:GOALS`.
///
/// The goal count only has to be an integer here; range rules are the
/// validator's job so that an out-of-range count surfaces as a field
/// violation alongside everything else, not as an argument error.
pub fn parse_scorer_spec(spec: &str) -> Result<GoalscorerInput, String> {
    let (player_id, goals) = spec
        .split_once(':')
        .ok_or_else(|| format!("expected PLAYER_ID:GOALS, got '{spec}'"))?;
    let goals_count: i64 = goals
        .trim()
        .parse()
        .map_err(|_| format!("'{goals}' is not a whole number of goals"))?;
    Ok(GoalscorerInput::new(player_id.trim(), goals_count))
}

/// Volta FC Match Book
///
/// Records, browses and summarises Volta FC match results against a hosted
/// record store. Every match carries its date, opposition, final score,
/// derived result and goalscorer breakdown; records are validated as a whole
/// before anything is persisted, and every problem is reported at once.
#[derive(Parser, Debug)]
#[command(author = "Volta FC", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Plain text output without colors. Useful for scripts and terminals
    /// that don't support ANSI escape codes.
    #[arg(long = "plain", short = 'p', global = true, help_heading = "Display Options")]
    pub plain: bool,

    /// Update record store URL in config. Will prompt for the URL if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "STORE_URL",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_store_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are mirrored to stdout as well as the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this invocation only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List matches, newest first (the default when no command is given)
    List {
        /// Only matches whose opposition name contains this text (case-insensitive)
        #[arg(long)]
        opposition: Option<String>,

        /// Only matches played in this calendar year
        #[arg(long)]
        year: Option<i32>,

        /// Only matches with this outcome (win, draw or loss; W/D/L also accepted)
        #[arg(long)]
        result: Option<MatchResult>,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Match rows per page
        #[arg(long = "page-size", default_value_t = crate::constants::display::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Show one match in full
    Show {
        /// Match id as assigned by the store
        id: String,
    },

    /// Record a new match
    Add {
        /// Match date in YYYY-MM-DD format
        #[arg(long)]
        date: Option<String>,

        /// Opposition team name
        #[arg(long = "team")]
        opposition_team: Option<String>,

        /// Volta's final score
        #[arg(long = "own", default_value_t = 0)]
        own_score: i64,

        /// Opposition's final score
        #[arg(long = "opposition", default_value_t = 0)]
        opposition_score: i64,

        /// Goalscorer entry as PLAYER_ID:GOALS. Repeat for each scorer; the
        /// goal counts must add up to Volta's score.
        #[arg(long = "scorer", value_name = "PLAYER_ID:GOALS", value_parser = parse_scorer_spec)]
        scorers: Vec<GoalscorerInput>,
    },

    /// Edit an existing match. Unspecified fields keep their stored values;
    /// the merged record is re-validated and its result re-derived.
    Edit {
        /// Match id as assigned by the store
        id: String,

        /// New match date in YYYY-MM-DD format
        #[arg(long)]
        date: Option<String>,

        /// New opposition team name
        #[arg(long = "team")]
        opposition_team: Option<String>,

        /// New Volta score
        #[arg(long = "own")]
        own_score: Option<i64>,

        /// New opposition score
        #[arg(long = "opposition")]
        opposition_score: Option<i64>,

        /// Replacement goalscorer entries as PLAYER_ID:GOALS. When given,
        /// the stored entries are replaced wholesale.
        #[arg(long = "scorer", value_name = "PLAYER_ID:GOALS", value_parser = parse_scorer_spec)]
        scorers: Vec<GoalscorerInput>,

        /// Remove all goalscorer entries (for correcting a score down to 0)
        #[arg(long = "clear-scorers", conflicts_with = "scorers")]
        clear_scorers: bool,
    },

    /// Delete a match and its goalscorer entries
    Remove {
        /// Match id as assigned by the store
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List players, or add one
    Players {
        #[command(subcommand)]
        command: Option<PlayersCommand>,
    },

    /// Win/draw/loss distribution across recorded matches
    Summary {
        /// Only matches played in this calendar year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Distinct years with recorded matches, most recent first
    Years,
}

#[derive(Subcommand, Debug)]
pub enum PlayersCommand {
    /// List all players in the directory
    List,

    /// Add a player to the directory
    Add {
        /// Player display name. Uniqueness is checked by the store,
        /// case-insensitively.
        #[arg(long)]
        name: String,
    },
}

/// Whether this invocation only touches configuration and never the store.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_store_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}
