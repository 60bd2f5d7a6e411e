use crate::cli::{Args, Command, PlayersCommand};
use crate::config::Config;
use crate::display::{MatchListPage, render_match_detail, render_summary};
use crate::error::AppError;
use crate::record::{
    GoalscorerInput, MatchCandidate, MatchFilters, ResultSummary, StoredMatch, ValidMatch,
    format_match_date, validate_candidate, validate_player_name, years_present,
};
use crate::store::StoreClient;
use chrono::{Local, NaiveDate};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use tokio::io::{self, AsyncBufReadExt};
use tracing::info;

/// Terminal title shared by every view
const TERMINAL_TITLE: &str = "VOLTA MATCHBOOK";

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file,
/// --clear-log-file). Updates the configuration and saves it.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_else(|_| Config {
        store_url: String::new(),
        log_file_path: None,
        http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
    });

    if let Some(new_url) = &args.new_store_url {
        config.store_url = if new_url.is_empty() {
            crate::config::user_prompts::prompt_for_store_url().await?
        } else {
            new_url.clone()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Dispatches the parsed subcommand against the record store.
///
/// A bare invocation with no subcommand falls through to an unfiltered list.
pub async fn run_command(args: Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = StoreClient::new(&config)?;

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    match args.command {
        None => {
            handle_list(
                &client,
                MatchFilters::default(),
                1,
                crate::constants::display::DEFAULT_PAGE_SIZE,
                args.plain,
            )
            .await
        }
        Some(Command::List {
            opposition,
            year,
            result,
            page,
            page_size,
        }) => {
            let filters = MatchFilters {
                opposition,
                year,
                result,
            };
            handle_list(&client, filters, page, page_size, args.plain).await
        }
        Some(Command::Show { id }) => {
            let record = client.get_match(&id).await?;
            render_match_detail(&record, args.plain, &mut stdout())
        }
        Some(Command::Add {
            date,
            opposition_team,
            own_score,
            opposition_score,
            scorers,
        }) => {
            let candidate = MatchCandidate {
                date: parse_cli_date(date.as_deref())?,
                opposition_team: opposition_team.unwrap_or_default(),
                own_score,
                opposition_score,
                goalscorers: scorers,
            };
            let valid = validate_or_report(&candidate)?;
            let stored = client.create_match(&valid).await?;
            println!("Match recorded ({}):", stored.id);
            render_match_detail(&stored, args.plain, &mut stdout())
        }
        Some(Command::Edit {
            id,
            date,
            opposition_team,
            own_score,
            opposition_score,
            scorers,
            clear_scorers,
        }) => {
            let existing = client.get_match(&id).await?;
            let candidate = merge_candidate(
                &existing,
                parse_cli_date(date.as_deref())?,
                opposition_team,
                own_score,
                opposition_score,
                scorers,
                clear_scorers,
            );
            let valid = validate_or_report(&candidate)?;
            let stored = client.update_match(&id, &valid).await?;
            println!("Match updated ({}):", stored.id);
            render_match_detail(&stored, args.plain, &mut stdout())
        }
        Some(Command::Remove { id, yes }) => handle_remove(&client, &id, yes).await,
        Some(Command::Players { command }) => match command {
            None | Some(PlayersCommand::List) => handle_players_list(&client).await,
            Some(PlayersCommand::Add { name }) => handle_players_add(&client, &name).await,
        },
        Some(Command::Summary { year }) => {
            let filters = MatchFilters {
                year,
                ..Default::default()
            };
            let matches = client.list_matches(&filters).await?;
            // The store already narrowed by year; re-applying the predicate
            // keeps a sloppy store honest without changing the result.
            let matches = filters.apply(matches);
            let summary = ResultSummary::from_matches(&matches);
            render_summary(&summary, args.plain, &mut stdout())
        }
        Some(Command::Years) => {
            let matches = client.list_matches(&MatchFilters::default()).await?;
            for year in years_present(&matches) {
                println!("{year}");
            }
            Ok(())
        }
    }
}

async fn handle_list(
    client: &StoreClient,
    filters: MatchFilters,
    page: usize,
    page_size: usize,
    plain: bool,
) -> Result<(), AppError> {
    let matches = client.list_matches(&filters).await?;
    let matches = filters.apply(matches);
    let list = MatchListPage::new(matches, page, page_size, plain);
    list.render_buffered(&mut stdout())
}

async fn handle_remove(client: &StoreClient, id: &str, yes: bool) -> Result<(), AppError> {
    let record = client.get_match(id).await?;

    if !yes {
        println!(
            "Delete match against {} on {}? [y/N]",
            record.opposition_team,
            format_match_date(record.match_date)
        );
        let mut input = String::new();
        let stdin = io::stdin();
        let mut reader = io::BufReader::new(stdin);
        reader.read_line(&mut input).await?;
        let answer = input.trim().to_ascii_lowercase();
        if answer != "y" && answer != "yes" {
            println!("Not deleted.");
            return Ok(());
        }
    }

    client.delete_match(id).await?;
    println!("Match deleted.");
    Ok(())
}

async fn handle_players_list(client: &StoreClient) -> Result<(), AppError> {
    let players = client.list_players().await?;
    if players.is_empty() {
        println!("No players in the directory");
        return Ok(());
    }
    for player in players {
        println!("{}  {}", player.id, player.name);
    }
    Ok(())
}

async fn handle_players_add(client: &StoreClient, name: &str) -> Result<(), AppError> {
    if let Err(violations) = validate_player_name(name) {
        eprintln!("Player not added:");
        eprintln!("{violations}");
        return Err(AppError::Validation(violations));
    }
    let player = client.create_player(name).await?;
    println!("Player added: {} ({})", player.name, player.id);
    Ok(())
}

/// Validates a candidate against today's date, printing the complete
/// violation set when it fails.
fn validate_or_report(candidate: &MatchCandidate) -> Result<ValidMatch, AppError> {
    let today = Local::now().date_naive();
    match validate_candidate(candidate, today) {
        Ok(valid) => Ok(valid),
        Err(violations) => {
            info!(
                "Candidate rejected with {} violation(s)",
                violations.len()
            );
            eprintln!("Match not saved:");
            eprintln!("{violations}");
            Err(AppError::Validation(violations))
        }
    }
}

/// Builds the edit candidate: provided flags override stored values, the
/// rest carry over, and the whole merged record goes back through
/// validation so a partial edit cannot bypass any cross-field rule.
fn merge_candidate(
    existing: &StoredMatch,
    date: Option<NaiveDate>,
    opposition_team: Option<String>,
    own_score: Option<i64>,
    opposition_score: Option<i64>,
    scorers: Vec<GoalscorerInput>,
    clear_scorers: bool,
) -> MatchCandidate {
    let goalscorers = if clear_scorers {
        Vec::new()
    } else if scorers.is_empty() {
        existing
            .goals
            .iter()
            .map(|goal| GoalscorerInput::new(goal.player_id.clone(), i64::from(goal.goals_count)))
            .collect()
    } else {
        scorers
    };

    MatchCandidate {
        date: Some(date.unwrap_or(existing.match_date)),
        opposition_team: opposition_team.unwrap_or_else(|| existing.opposition_team.clone()),
        own_score: own_score.unwrap_or(i64::from(existing.own_score)),
        opposition_score: opposition_score.unwrap_or(i64::from(existing.opposition_score)),
        goalscorers,
    }
}

/// Parses a YYYY-MM-DD date argument. Absence is preserved so the
/// validator can report a missing date as a field violation.
fn parse_cli_date(date: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match date {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| AppError::date_parse_error(format!("'{raw}' is not YYYY-MM-DD: {e}"))),
    }
}
