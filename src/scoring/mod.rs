pub mod engine;
pub mod record;

pub use engine::{build_records, max_score, score_token, sum_scores};
pub use record::ScoreRecord;
