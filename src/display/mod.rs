//! Teletext-flavoured terminal rendering for match records.
//!
//! All views render into a string buffer first and are flushed in a single
//! write. Plain mode drops every escape code for scripts and dumb terminals.

pub mod colors;
pub mod summary_bar;
pub mod table;

pub use summary_bar::render_summary;
pub use table::{MatchListPage, render_match_detail};
