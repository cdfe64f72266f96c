use std::path::Path;

use crate::error::{Result, TallyError};
use crate::output::write_max_report;
use crate::reader::read_tokens;
use crate::scoring::{build_records, max_score, sum_scores};

/// Sum the scores of every token on the first line of `input`.
///
/// A file with no tokens sums to 0. No output file is produced.
pub fn calc_score_sum(input: &Path) -> Result<i64> {
    require_path(input)?;

    let records = build_records(read_tokens(input)?);
    Ok(sum_scores(&records))
}

/// Write the maximum-scoring token(s) of `input`'s first line to
/// `output`, one `<position> <text> <max_score>` line per tied record.
///
/// Both paths are checked before any file is touched; a failed read
/// leaves the report file uncreated.
pub fn print_max_score(input: &Path, output: &Path) -> Result<()> {
    require_path(input)?;
    require_path(output)?;

    let records = build_records(read_tokens(input)?);
    let max = max_score(&records);
    write_max_report(output, &records, max)?;
    Ok(())
}

fn require_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        Err(TallyError::FileIo("empty file path".to_string()))
    } else {
        Ok(())
    }
}
