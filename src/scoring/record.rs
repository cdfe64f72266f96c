/// One scored token from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    /// 1-based index of the token on the line.
    pub position: usize,
    /// Original token text, case preserved.
    pub text: String,
    /// Alphabet-rank score weighted by position.
    pub score: i64,
}
