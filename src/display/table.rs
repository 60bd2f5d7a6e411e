//! The paginated match table.
//!
//! Renders into a string buffer first and flushes the buffer in one write,
//! so a slow terminal never shows a half-drawn page.

use std::io::Write;

use crate::constants::display::{
    DATE_COLUMN_WIDTH, DEFAULT_PAGE_SIZE, SCORE_COLUMN_WIDTH, TEAM_COLUMN_WIDTH,
};
use crate::display::colors::*;
use crate::error::AppError;
use crate::record::{
    MatchResult, StoredMatch, format_goalscorers, format_match_date, format_score,
};

/// A page of match rows with a teletext-style banner and pagination footer.
#[derive(Debug)]
pub struct MatchListPage {
    matches: Vec<StoredMatch>,
    page: usize,
    page_size: usize,
    plain: bool,
}

impl MatchListPage {
    /// Creates a page over the full collection. `page` is one-based and is
    /// clamped into range; a zero `page_size` falls back to the default.
    pub fn new(matches: Vec<StoredMatch>, page: usize, page_size: usize, plain: bool) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        let mut list = MatchListPage {
            matches,
            page: 1,
            page_size,
            plain,
        };
        list.page = page.clamp(1, list.total_pages());
        list
    }

    pub fn total_pages(&self) -> usize {
        if self.matches.is_empty() {
            1
        } else {
            self.matches.len().div_ceil(self.page_size)
        }
    }

    /// The slice of matches visible on the current page
    pub fn visible(&self) -> &[StoredMatch] {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.matches.len());
        &self.matches[start..end]
    }

    fn fg(&self, color: crossterm::style::Color, fallback: u8) -> String {
        if self.plain {
            String::new()
        } else {
            format!("\x1b[38;5;{}m", get_ansi_code(color, fallback))
        }
    }

    fn reset(&self) -> &'static str {
        if self.plain { "" } else { "\x1b[0m" }
    }

    fn result_color(&self, result: MatchResult) -> String {
        match result {
            MatchResult::Win => self.fg(win_fg(), 46),
            MatchResult::Draw => self.fg(draw_fg(), 226),
            MatchResult::Loss => self.fg(loss_fg(), 196),
        }
    }

    /// Renders the full page into the given writer in a single flush.
    pub fn render_buffered<W: Write>(&self, writer: &mut W) -> Result<(), AppError> {
        let mut buffer = String::new();

        render_banner("VOLTA MATCHBOOK", self.plain, &mut buffer);

        buffer.push_str(&format!(
            "{}{:<date_w$}{:<team_w$}{:>score_w$}  R{}\n",
            self.fg(subheader_fg(), 51),
            "DATE",
            "OPPOSITION",
            "SCORE",
            self.reset(),
            date_w = DATE_COLUMN_WIDTH,
            team_w = TEAM_COLUMN_WIDTH,
            score_w = SCORE_COLUMN_WIDTH,
        ));

        if self.matches.is_empty() {
            buffer.push_str(&format!(
                "{}No matches recorded{}\n",
                self.fg(text_fg(), 231),
                self.reset()
            ));
        }

        for record in self.visible() {
            let result = record.derived_result();
            buffer.push_str(&format!(
                "{}{:<date_w$}{:<team_w$}{:>score_w$}{}  {}{}{}\n",
                self.fg(text_fg(), 231),
                format_match_date(record.match_date),
                truncate(&record.opposition_team, TEAM_COLUMN_WIDTH - 1),
                format_score(record.own_score, record.opposition_score),
                self.reset(),
                self.result_color(result),
                result.code(),
                self.reset(),
                date_w = DATE_COLUMN_WIDTH,
                team_w = TEAM_COLUMN_WIDTH,
                score_w = SCORE_COLUMN_WIDTH,
            ));
            buffer.push_str(&format!(
                "{}{:<date_w$}{}{}\n",
                self.fg(scorers_fg(), 250),
                "",
                format_goalscorers(&record.goals),
                self.reset(),
                date_w = DATE_COLUMN_WIDTH,
            ));
        }

        buffer.push_str(&format!(
            "{}Page {}/{} - {} match(es){}\n",
            self.fg(subheader_fg(), 51),
            self.page,
            self.total_pages(),
            self.matches.len(),
            self.reset()
        ));

        writer.write_all(buffer.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Renders one match in long form (the `show` view and add/edit echoes).
pub fn render_match_detail<W: Write>(
    record: &StoredMatch,
    plain: bool,
    writer: &mut W,
) -> Result<(), AppError> {
    let fg = |color, fallback| {
        if plain {
            String::new()
        } else {
            format!("\x1b[38;5;{}m", get_ansi_code(color, fallback))
        }
    };
    let reset = if plain { "" } else { "\x1b[0m" };

    let result = record.derived_result();
    let result_color = match result {
        MatchResult::Win => fg(win_fg(), 46),
        MatchResult::Draw => fg(draw_fg(), 226),
        MatchResult::Loss => fg(loss_fg(), 196),
    };

    let mut buffer = String::new();
    buffer.push_str(&format!(
        "{}Date:       {}{}\n",
        fg(text_fg(), 231),
        format_match_date(record.match_date),
        reset
    ));
    buffer.push_str(&format!(
        "{}Opposition: {}{}\n",
        fg(text_fg(), 231),
        record.opposition_team,
        reset
    ));
    buffer.push_str(&format!(
        "{}Score:      {}{}\n",
        fg(text_fg(), 231),
        format_score(record.own_score, record.opposition_score),
        reset
    ));
    buffer.push_str(&format!("{result_color}Result:     {result}{reset}\n"));
    buffer.push_str(&format!(
        "{}Scorers:    {}{}\n",
        fg(scorers_fg(), 250),
        format_goalscorers(&record.goals),
        reset
    ));

    writer.write_all(buffer.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders the inverse-video banner line shared by the table and summary.
pub(super) fn render_banner(title: &str, plain: bool, buffer: &mut String) {
    if plain {
        buffer.push_str(&format!("{title}\n"));
    } else {
        buffer.push_str(&format!(
            "\x1b[48;5;{}m\x1b[38;5;{}m  {title}  \x1b[0m\n",
            get_ansi_code(header_bg(), 21),
            get_ansi_code(header_fg(), 231),
        ));
    }
}

/// Truncates to at most `max` characters, appending an ellipsis when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, day: u32, own: u32, opposition: u32) -> StoredMatch {
        StoredMatch {
            id: id.to_string(),
            match_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            opposition_team: "Berserker".to_string(),
            own_score: own,
            opposition_score: opposition,
            result: MatchResult::from_scores(own, opposition),
            goals: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn render_to_string(page: &MatchListPage) -> String {
        let mut out: Vec<u8> = Vec::new();
        page.render_buffered(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_render_contains_rows_and_footer() {
        let page = MatchListPage::new(vec![record("a", 15, 11, 4)], 1, 10, true);
        let output = render_to_string(&page);
        assert!(output.contains("VOLTA MATCHBOOK"));
        assert!(output.contains("Mar 15, 2024"));
        assert!(output.contains("11-4"));
        assert!(output.contains("No scorers"));
        assert!(output.contains("Page 1/1 - 1 match(es)"));
        // Plain mode carries no escape codes
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_colored_render_uses_result_colors() {
        let page = MatchListPage::new(vec![record("a", 15, 0, 2)], 1, 10, false);
        let output = render_to_string(&page);
        // Loss glyph in bright red
        assert!(output.contains("\x1b[38;5;196mL"));
    }

    #[test]
    fn test_empty_collection_message() {
        let page = MatchListPage::new(vec![], 1, 10, true);
        let output = render_to_string(&page);
        assert!(output.contains("No matches recorded"));
        assert!(output.contains("Page 1/1 - 0 match(es)"));
    }

    #[test]
    fn test_pagination_windows() {
        let matches: Vec<StoredMatch> = (1..=7).map(|d| record(&format!("m{d}"), d, 1, 0)).collect();
        let page = MatchListPage::new(matches.clone(), 2, 3, true);
        assert_eq!(page.total_pages(), 3);
        let ids: Vec<&str> = page.visible().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m4", "m5", "m6"]);

        // Out-of-range page clamps to the last page
        let page = MatchListPage::new(matches, 9, 3, true);
        let ids: Vec<&str> = page.visible().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m7"]);
    }

    #[test]
    fn test_long_team_name_truncated() {
        let mut m = record("a", 15, 1, 0);
        m.opposition_team = "An Extremely Long Opposition Team Name FC".to_string();
        let page = MatchListPage::new(vec![m], 1, 10, true);
        let output = render_to_string(&page);
        assert!(output.contains('…'));
        assert!(!output.contains("Team Name FC"));
    }

    #[test]
    fn test_detail_render() {
        let mut out: Vec<u8> = Vec::new();
        render_match_detail(&record("a", 15, 8, 8), true, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Result:     Draw"));
        assert!(output.contains("Score:      8-8"));
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-len", 11), "exactly-len");
        assert_eq!(truncate("äääääää", 5), "ääää…");
    }
}
