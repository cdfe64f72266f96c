use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::scoring::ScoreRecord;

/// Format a record for the report file: `<position> <text> <max_score>`
pub fn format_report_line(record: &ScoreRecord, max_score: i64) -> String {
    format!("{} {} {}", record.position, record.text, max_score)
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the score sum for terminal display
pub fn format_sum(sum: i64, use_colors: bool) -> String {
    if use_colors {
        format!("{}", sum.bold())
    } else {
        sum.to_string()
    }
}

/// Format a winning record for the terminal echo. The report file
/// always gets the plain fixed format.
pub fn format_winner_line(record: &ScoreRecord, max_score: i64, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{} {} {}",
            record.position.yellow(),
            record.text.bold(),
            max_score.cyan()
        )
    } else {
        format_report_line(record, max_score)
    }
}
