//! Command-line arguments and the settings resolved from them

use crate::choices::{generates, traces, InputSource, RunMode};
use anyhow::Context as _;
use clap::Parser;
use inquire::Text;
use std::path::PathBuf;

/// Executes the Closest Pairs algorithm
#[derive(Parser, Debug, Clone)]
#[command(name = "closest-pairs", author, version, about, long_about = None)]
pub struct Args {
    /// Runs a trace on the algorithm and writes a report to --trace-dir
    #[arg(short, long)]
    pub trace: bool,

    /// Directory the trace report is written to
    #[arg(long, default_value = "trace_output")]
    pub trace_dir: PathBuf,

    /// Input file; read as-is when -P is omitted, otherwise generated points are saved here
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Number of unique random points to generate into the input file
    #[arg(short = 'P', long)]
    pub num_points: Option<usize>,

    /// Number of closest pairs to look for
    #[arg(short = 'm', long, default_value_t = 0, allow_negative_numbers = true)]
    pub num_pairs: i64,

    /// Output file for the closest pairs
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Seed for point generation, for reproducible inputs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hides the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Asks for every setting interactively
    #[arg(long)]
    pub interactive: bool,
}

/// Settings for one run of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Generate this many points into `input` before loading it
    pub num_points: Option<usize>,
    /// Requested number of pairs; negative values are rejected by the selector
    pub num_pairs: i64,
    /// Where to write the trace report, when tracing
    pub trace_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub progress: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            num_points: args.num_points,
            num_pairs: args.num_pairs,
            trace_dir: args.trace.then_some(args.trace_dir),
            seed: args.seed,
            progress: !args.no_progress,
        }
    }
}

fn prompt_path(message: &str, default: &PathBuf) -> anyhow::Result<PathBuf> {
    let default = default.to_string_lossy();
    let answer = Text::new(message)
        .with_default(&default)
        .prompt()
        .with_context(|| format!("Failed to read \"{message}\""))?;

    Ok(PathBuf::from(answer))
}

impl RunConfig {
    /// Builds the configuration from interactive prompts, using `args` for defaults
    pub fn prompt(args: &Args) -> anyhow::Result<Self> {
        let source = InputSource::choice("Where should the points come from?")
            .context("Failed to get user input")?;

        let num_points = if generates(source) {
            let n = inquire::prompt_u32("How many points should be generated?")
                .context("Failed to get user input")?;
            Some(crate::conv_num!(usize, n, usize::MAX))
        } else {
            None
        };

        let input = prompt_path("Input file", &args.input)?;

        let num_pairs = inquire::prompt_u32("How many closest pairs should be found?")
            .context("Failed to get user input")?;

        let output = prompt_path("Output file", &args.output)?;

        let mode = RunMode::choice("How should the algorithm run?")
            .context("Failed to get user input")?;

        Ok(Self {
            input,
            output,
            num_points,
            num_pairs: i64::from(num_pairs),
            trace_dir: traces(mode).then(|| args.trace_dir.clone()),
            seed: args.seed,
            progress: !args.no_progress,
        })
    }
}
