use super::record::ScoreRecord;

/// Score a single token at a 1-based line position.
///
/// Each letter contributes its alphabet rank (A=1 .. Z=26, case
/// folded) multiplied by the token's position.
pub fn score_token(text: &str, position: usize) -> i64 {
    text.bytes()
        .map(|b| i64::from(b.to_ascii_uppercase() - b'A' + 1) * position as i64)
        .sum()
}

/// Build one record per token, preserving line order.
pub fn build_records(tokens: Vec<String>) -> Vec<ScoreRecord> {
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let position = index + 1;
            let score = score_token(&text, position);
            ScoreRecord {
                position,
                text,
                score,
            }
        })
        .collect()
}

/// Sum of all record scores; 0 when there are no records.
pub fn sum_scores(records: &[ScoreRecord]) -> i64 {
    records.iter().map(|r| r.score).sum()
}

/// Highest score across records, via a linear scan from a running max
/// of 0.
pub fn max_score(records: &[ScoreRecord]) -> i64 {
    records.iter().fold(0, |max, r| max.max(r.score))
}
