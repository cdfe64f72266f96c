use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use token_tally::error::TallyError;
use token_tally::{output, reader, scoring};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FILE: i32 = 1;
const EXIT_DATA: i32 = 2;
const EXIT_IO: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sum the scores of every token on the first line
    Sum {
        /// Input file holding one comma-delimited line of tokens
        input: PathBuf,
    },
    /// Write the highest-scoring token(s) to a report file
    Max {
        /// Input file holding one comma-delimited line of tokens
        input: PathBuf,
        /// Report file to create or truncate
        output: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "token-tally")]
#[command(about = "Scores comma-delimited alphabetic tokens", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Sum { input } => {
            let sum = match token_tally::calc_score_sum(&input) {
                Ok(sum) => sum,
                Err(e) => {
                    eprintln!("Failed to score {}: {}", input.display(), e);
                    std::process::exit(exit_code(&e));
                }
            };

            println!("{}", output::format_sum(sum, use_colors));

            if cli.verbose {
                eprintln!("Scored {} in {:?}", input.display(), start_time.elapsed());
            }
        }
        Commands::Max {
            input,
            output: report_path,
        } => {
            let tokens = match reader::read_tokens(&input) {
                Ok(tokens) => tokens,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", input.display(), e);
                    std::process::exit(exit_code(&e));
                }
            };

            if cli.verbose {
                eprintln!("Read {} tokens from {}", tokens.len(), input.display());
            }

            let records = scoring::build_records(tokens);
            let max = scoring::max_score(&records);

            let written = match output::write_max_report(&report_path, &records, max) {
                Ok(written) => written,
                Err(e) => {
                    eprintln!("Failed to write {}: {}", report_path.display(), e);
                    std::process::exit(exit_code(&e));
                }
            };

            for record in records.iter().filter(|r| r.score == max) {
                println!("{}", output::format_winner_line(record, max, use_colors));
            }

            if cli.verbose {
                eprintln!(
                    "Wrote {} line(s) to {} in {:?}",
                    written,
                    report_path.display(),
                    start_time.elapsed()
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_code(err: &TallyError) -> i32 {
    match err {
        TallyError::FileIo(_) => EXIT_FILE,
        TallyError::IllegalCharacter { .. } => EXIT_DATA,
        TallyError::Other(_) => EXIT_IO,
    }
}
