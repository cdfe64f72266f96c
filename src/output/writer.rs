use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::formatter::format_report_line;
use crate::error::{open_error, Result};
use crate::scoring::ScoreRecord;

/// Write one line per record whose score equals `max_score`.
///
/// Creates or truncates `path`, flushing after every line. Records are
/// written in line order. Returns the number of lines written; zero
/// matching records leave an empty file behind.
pub fn write_max_report(path: &Path, records: &[ScoreRecord], max_score: i64) -> Result<usize> {
    let file = File::create(path).map_err(|e| open_error(path, e))?;
    let mut writer = BufWriter::new(file);

    let mut written = 0;
    for record in records.iter().filter(|r| r.score == max_score) {
        writeln!(writer, "{}", format_report_line(record, max_score))?;
        writer.flush()?;
        written += 1;
    }

    Ok(written)
}
