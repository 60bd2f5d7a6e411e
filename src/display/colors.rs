use crossterm::style::Color;

// Constants for the teletext-flavoured appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn scorers_fg() -> Color {
    Color::AnsiValue(250)
} // Light grey
pub fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn draw_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn loss_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Helper function to extract the ANSI color code from a crossterm Color.
/// Provides a fallback value for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_ansi_code() {
        assert_eq!(get_ansi_code(Color::AnsiValue(46), 0), 46);
        assert_eq!(get_ansi_code(Color::Red, 196), 196);
    }

    #[test]
    fn test_palette_is_ansi() {
        assert_eq!(get_ansi_code(header_bg(), 0), 21);
        assert_eq!(get_ansi_code(win_fg(), 0), 46);
        assert_eq!(get_ansi_code(loss_fg(), 0), 196);
    }
}
