//! Scores comma-delimited alphabetic tokens from the first line of a
//! text file. Each letter contributes its alphabet rank (A=1 .. Z=26)
//! multiplied by the token's 1-based position on the line; a token's
//! score is the sum over its letters.
//!
//! Two operations: [`calc_score_sum`] totals every token's score, and
//! [`print_max_score`] writes the highest-scoring token(s) to a
//! report file.

pub mod error;
pub mod output;
pub mod process;
pub mod reader;
pub mod scoring;

pub use error::{Result, TallyError};
pub use process::{calc_score_sum, print_max_score};
