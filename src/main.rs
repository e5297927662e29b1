use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use sus::index::{BuildStats, IndexConfig, IndexReader, IndexWriter, SorterKind, SusIndex};
use sus::output::{self, QueryRecord};
use sus::query::{verify_all, QueryExecutor};
use sus::utils::{progress, InputText};

#[derive(Parser)]
#[command(name = "sus")]
#[command(about = "Shortest unique substring queries in optimal time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shortest unique substrings of one or every position
    Query {
        #[command(flatten)]
        input: InputArgs,

        /// Query position (all positions when omitted)
        #[arg(short = 'q', long = "position")]
        position: Option<usize>,

        /// Only output the leftmost SUS
        #[arg(short, long)]
        leftmost: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Check every position against the naive algorithm
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show index construction statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build an index file for later queries
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Output path (default: FILE.sus)
        #[arg(short = 'o', long = "output")]
        out_path: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Text file to process
    #[arg(required_unless_present = "index")]
    file: Option<PathBuf>,

    /// Load a prebuilt index file instead of indexing FILE
    #[arg(long, conflicts_with = "file")]
    index: Option<PathBuf>,

    /// Truncate the input to its first N bytes
    #[arg(short = 'n', long, value_name = "N")]
    truncate: Option<usize>,

    /// Suffix sorting strategy
    #[arg(long, value_enum, default_value_t = SorterKind::Sais)]
    sorter: SorterKind,

    /// Sort suffixes in parallel above this many bytes
    #[arg(long, default_value_t = IndexConfig::default().parallel_threshold)]
    parallel_threshold: usize,
}

impl InputArgs {
    fn config(&self) -> IndexConfig {
        IndexConfig {
            sorter: self.sorter,
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// Load the index file, or index the text file
    fn load(&self) -> Result<SusIndex> {
        if let Some(path) = &self.index {
            return IndexReader::open(path)
                .with_context(|| format!("Failed to load index {}", path.display()));
        }

        let file = self.file.as_ref().context("No input file given")?;
        let text = InputText::open(file, self.truncate)?;
        eprintln!("input string length = {}", text.len());

        let pb = progress::spinner("building index", std::io::stderr().is_terminal());
        let index = SusIndex::build_with(&text, &self.config());
        pb.finish_and_clear();

        index.with_context(|| format!("Failed to index {}", file.display()))
    }
}

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a BuildStats,
    memory_bytes: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Query {
            input,
            position,
            leftmost,
            json,
            no_color,
        } => {
            let index = input.load()?;
            run_query(&index, position, leftmost, json, !no_color)?;
        }
        Commands::Check { input } => {
            let index = input.load()?;
            if !run_check(&index)? {
                std::process::exit(1);
            }
        }
        Commands::Stats { input, json } => {
            let index = input.load()?;
            let mut out = std::io::stdout().lock();
            if json {
                let report = StatsReport {
                    stats: index.stats(),
                    memory_bytes: index.memory_bytes(),
                };
                output::write_json(&mut out, &report)?;
            } else {
                output::write_stats(&mut out, index.stats(), index.memory_bytes())?;
            }
        }
        Commands::Build { input, out_path } => {
            let file = match (&input.file, &input.index) {
                (Some(file), None) => file.clone(),
                _ => anyhow::bail!("build needs a text FILE, not --index"),
            };
            let out_path = out_path.unwrap_or_else(|| {
                let mut path = file.into_os_string();
                path.push(".sus");
                PathBuf::from(path)
            });

            let index = input.load()?;
            IndexWriter::write(&out_path, &index)
                .with_context(|| format!("Failed to write index {}", out_path.display()))?;
            println!(
                "Wrote index for {} positions ({} MUIs) to {}",
                index.len(),
                index.muis().len(),
                out_path.display()
            );
        }
    }

    Ok(())
}

fn run_query(
    index: &SusIndex,
    position: Option<usize>,
    leftmost: bool,
    json: bool,
    color: bool,
) -> Result<()> {
    let executor = QueryExecutor::new(index);
    let mut out = output::stdout(color);

    match position {
        Some(p) => {
            let sus = if leftmost {
                vec![executor.leftmost(p)?]
            } else {
                executor.all(p)?
            };

            if json {
                output::write_json(&mut out, &QueryRecord { position: p, sus })?;
            } else if leftmost {
                output::write_leftmost(&mut out, p, sus[0])?;
            } else {
                output::write_query(&mut out, p, &sus)?;
            }
        }
        None => {
            let answers: Vec<Vec<_>> = if leftmost {
                executor.leftmost_all().into_iter().map(|iv| vec![iv]).collect()
            } else {
                (0..index.len())
                    .map(|p| executor.all(p))
                    .collect::<sus::Result<_>>()?
            };

            if json {
                let records: Vec<QueryRecord> = answers
                    .into_iter()
                    .enumerate()
                    .map(|(position, sus)| QueryRecord { position, sus })
                    .collect();
                output::write_json(&mut out, &records)?;
            } else {
                for (p, sus) in answers.iter().enumerate() {
                    output::write_sus_line(&mut out, p, sus)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Returns whether the index agreed with the naive algorithm everywhere
fn run_check(index: &SusIndex) -> Result<bool> {
    eprint!("checking results against naive...");
    std::io::stderr().flush()?;

    match verify_all(index) {
        None => {
            eprintln!("results OK!");
            Ok(true)
        }
        Some(mismatch) => {
            let mut out = output::stdout(true);
            output::write_mismatch(&mut out, &mismatch)?;
            out.flush()?;
            Ok(false)
        }
    }
}
