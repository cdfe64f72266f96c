pub mod formatter;
pub mod writer;

pub use formatter::{format_report_line, format_sum, format_winner_line, should_use_colors};
pub use writer::write_max_report;
