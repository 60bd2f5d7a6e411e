//! The win/draw/loss distribution view, terminal counterpart of the results
//! donut chart.

use std::io::Write;

use crate::constants::display::SUMMARY_BAR_WIDTH;
use crate::display::colors::*;
use crate::display::table::render_banner;
use crate::error::AppError;
use crate::record::{MatchResult, ResultSummary};

/// Renders the summary counts, percentages and a proportional bar.
pub fn render_summary<W: Write>(
    summary: &ResultSummary,
    plain: bool,
    writer: &mut W,
) -> Result<(), AppError> {
    let mut buffer = String::new();
    render_banner("RESULTS SUMMARY", plain, &mut buffer);

    if summary.total() == 0 {
        buffer.push_str("No matches recorded\n");
        writer.write_all(buffer.as_bytes())?;
        writer.flush()?;
        return Ok(());
    }

    let fg = |color, fallback| {
        if plain {
            String::new()
        } else {
            format!("\x1b[38;5;{}m", get_ansi_code(color, fallback))
        }
    };
    let reset = if plain { "" } else { "\x1b[0m" };

    for (label, result, color, fallback) in [
        ("Wins", MatchResult::Win, win_fg(), 46),
        ("Draws", MatchResult::Draw, draw_fg(), 226),
        ("Losses", MatchResult::Loss, loss_fg(), 196),
    ] {
        buffer.push_str(&format!(
            "{}{label:<8}{:>4}  ({:>5.1}%){reset}\n",
            fg(color, fallback),
            summary.count(result),
            summary.percentage(result),
        ));
    }
    buffer.push_str(&format!("Total   {:>4}\n", summary.total()));

    buffer.push_str(&distribution_bar(summary, plain));
    buffer.push('\n');

    writer.write_all(buffer.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Builds the proportional bar. Cell counts are rounded per bucket and the
/// remainder is given to losses so the bar is always exactly full width.
fn distribution_bar(summary: &ResultSummary, plain: bool) -> String {
    let total = summary.total();
    let width = SUMMARY_BAR_WIDTH;

    let win_cells = (summary.wins * width + total / 2) / total;
    let draw_cells = (summary.draws * width + total / 2) / total;
    let draw_cells = draw_cells.min(width - win_cells);
    let loss_cells = width - win_cells - draw_cells;

    if plain {
        format!(
            "{}{}{}",
            "W".repeat(win_cells),
            "D".repeat(draw_cells),
            "L".repeat(loss_cells)
        )
    } else {
        format!(
            "\x1b[38;5;{}m{}\x1b[38;5;{}m{}\x1b[38;5;{}m{}\x1b[0m",
            get_ansi_code(win_fg(), 46),
            "█".repeat(win_cells),
            get_ansi_code(draw_fg(), 226),
            "█".repeat(draw_cells),
            get_ansi_code(loss_fg(), 196),
            "█".repeat(loss_cells),
        )
    }
}
