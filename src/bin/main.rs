use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rungs::{normalize_input, solve, LadderError, SolveStatus};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod shell;
use shell::run_shell;

/// A CLI for solving word ladders and replaying the search level by level.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a ladder and print every shortest path
    Solve {
        /// Begin word
        #[arg(value_name = "BEGIN")]
        begin: String,
        /// End word
        #[arg(value_name = "END")]
        end: String,
        /// Word-list file, words separated by whitespace or commas (defaults to stdin)
        #[arg(short, long, value_name = "INPUT")]
        input: Option<PathBuf>,
        /// Print the full solution (status, frames, paths) as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the frame-by-frame BFS expansion
    Trace {
        /// Begin word
        #[arg(value_name = "BEGIN")]
        begin: String,
        /// End word
        #[arg(value_name = "END")]
        end: String,
        /// Word-list file (defaults to stdin)
        #[arg(short, long, value_name = "INPUT")]
        input: Option<PathBuf>,
    },
    /// Interactive shell for solving ladders and replaying their frames
    Shell {
        /// Word-list file
        #[arg(short, long, value_name = "INPUT")]
        input: PathBuf,
        /// Default delay in milliseconds between frames for `play`
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },
}

/// Read the word-list text from a file or stdin with a progress bar
/// (bar when the file size is known, spinner otherwise).
fn read_dictionary(input: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    let total_bytes = input
        .and_then(|p| std::fs::metadata(p).ok())
        .map(|m| m.len());
    let pb = if let Some(total) = total_bytes {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {msg}",
            )?
            .progress_chars("#>-"),
        );
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(ProgressStyle::with_template("{spinner:.green} {bytes} bytes {msg}")?);
        pb
    };
    pb.set_message("reading word list");

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        pb.inc(line.len() as u64 + 1);
        text.push_str(&line);
        text.push('\n');
    }
    pb.finish_and_clear();
    Ok(text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            begin,
            end,
            input,
            json,
        } => {
            let text = read_dictionary(input.as_ref())?;
            let norm = normalize_input(&begin, &end, &text);
            if norm.begin.is_empty() || norm.end.is_empty() {
                return Err(Box::new(LadderError::InvalidInput(
                    "begin and end words must be non-empty",
                )));
            }
            let start = Instant::now();
            let solution = solve(&norm.begin, &norm.end, &norm.words);
            let elapsed = start.elapsed();

            if json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
                return Ok(());
            }
            match solution.status {
                SolveStatus::Found => {
                    for path in &solution.paths {
                        println!("{}", path.join(" -> "));
                    }
                    eprintln!(
                        "{} path(s) of {} word(s), {} frame(s), {} dictionary word(s) in {:.2?}",
                        solution.paths.len(),
                        solution.paths.first().map(Vec::len).unwrap_or(0),
                        solution.frames.len(),
                        norm.words.len(),
                        elapsed
                    );
                }
                SolveStatus::NoPath => {
                    eprintln!(
                        "no ladder from '{}' to '{}' ({} frame(s), {} dictionary word(s) in {:.2?})",
                        norm.begin,
                        norm.end,
                        solution.frames.len(),
                        norm.words.len(),
                        elapsed
                    );
                }
                SolveStatus::LengthMismatch => {
                    eprintln!(
                        "'{}' and '{}' differ in length; nothing to solve",
                        norm.begin, norm.end
                    );
                }
            }
        }
        Commands::Trace { begin, end, input } => {
            let text = read_dictionary(input.as_ref())?;
            let norm = normalize_input(&begin, &end, &text);
            let solution = solve(&norm.begin, &norm.end, &norm.words);
            if solution.frames.is_empty() {
                println!("no frames: begin and end words differ in length");
                return Ok(());
            }
            for frame in &solution.frames {
                println!("level {}: expand [{}]", frame.level, frame.frontier.join(", "));
                println!(
                    "  discovered [{}]{}",
                    frame.next.join(", "),
                    if frame.found { "  <- end word" } else { "" }
                );
            }
            println!(
                "{} frame(s), {} shortest path(s)",
                solution.frames.len(),
                solution.paths.len()
            );
        }
        Commands::Shell { input, delay_ms } => {
            let text = read_dictionary(Some(&input))?;
            run_shell(text, delay_ms)?;
        }
    }
    Ok(())
}
