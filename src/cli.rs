use crate::config::{DispatchConfig, Mode, Verbosity};
use crate::dispatch::{BatchReport, Dispatcher};
use crate::error::RlecError;
use crate::job::Job;
use crate::registry::{CodecRegistry, DEFAULT_ALGORITHM};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Run-length encoding file compressor")]
#[command(override_usage = "rlec [OPTIONS] <INPUT> <OUTPUT> [INPUT2 OUTPUT2]...")]
pub struct Cli {
    /// Decompress the input files instead of compressing them
    #[arg(short, long)]
    pub decompress: bool,

    /// Compression algorithm to use
    #[arg(short, long, default_value = DEFAULT_ALGORITHM)]
    pub algorithm: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable logging (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print available compression algorithms and exit
    #[arg(long)]
    pub print_algorithms: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Show a progress bar over the batch
    #[arg(long)]
    pub progress: bool,

    /// Alternating input and output files
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.decompress {
            Mode::Decompress
        } else {
            Mode::Compress
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    pub fn dispatch_config(&self) -> DispatchConfig {
        let config = DispatchConfig::default().with_progress(self.progress && !self.quiet);
        match self.threads {
            Some(threads) => config.with_threads(threads),
            None => config,
        }
    }
}

/// How the process should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every job succeeded, or there was nothing to do
    Success,
    /// The batch ran but at least one job failed
    PartialFailure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::PartialFailure => 1,
        }
    }
}

pub fn print_algorithms(registry: &CodecRegistry) {
    println!("Available compression algorithms:");
    for name in registry.names() {
        println!("- {}", name);
    }
}

/// Runs a parsed command line. Errors returned from here happened before
/// any job was started.
pub fn execute(cli: &Cli, registry: &CodecRegistry) -> Result<Outcome, RlecError> {
    if cli.print_algorithms {
        print_algorithms(registry);
        return Ok(Outcome::Success);
    }

    if cli.files.len() < 2 {
        let _ = Cli::command().print_help();
        return Ok(Outcome::Success);
    }

    let dispatcher = Dispatcher::for_algorithm(registry, &cli.algorithm, cli.dispatch_config())?;
    let jobs = Job::pairs_from(&cli.files)?;
    let mode = cli.mode();
    let quiet = cli.verbosity().is_quiet();

    let start = Instant::now();
    let report = dispatcher.run_with(jobs, mode, |outcome| {
        if let Err(e) = &outcome.result {
            eprintln!("Error: failed to {} \"{}\": {}", mode, outcome.job.input.display(), e);
        }
    })?;

    if !quiet {
        print_summary(&report, mode, start);
    }

    Ok(if report.is_success() { Outcome::Success } else { Outcome::PartialFailure })
}

fn print_summary(report: &BatchReport, mode: Mode, start: Instant) {
    let (input, output) = report
        .succeeded()
        .filter_map(|o| o.result.as_ref().ok())
        .fold((0u64, 0u64), |(i, o), s| (i + s.input_size, o + s.output_size));
    println!(
        "{}: {} of {} jobs succeeded ({} -> {} bytes) in {:.2?}",
        mode,
        report.succeeded().count(),
        report.len(),
        input,
        output,
        start.elapsed()
    );
}

pub fn init_logging(verbosity: Verbosity) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbosity.level_filter());
    if !verbosity.is_quiet() {
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
    }
    let _ = builder.try_init();
}

pub fn run() -> Result<Outcome, RlecError> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    execute(&cli, &CodecRegistry::builtin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rlec").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["a", "b"]);
        assert_eq!(cli.mode(), Mode::Compress);
        assert_eq!(cli.algorithm, "rle");
        assert_eq!(cli.verbosity(), Verbosity::Normal);
        assert_eq!(cli.files, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert!(cli.threads.is_none());
    }

    #[test]
    fn flags() {
        let cli = parse(&["-d", "-q", "-v", "-t", "3", "--algorithm", "RLE", "x", "y"]);
        assert_eq!(cli.mode(), Mode::Decompress);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
        assert_eq!(cli.dispatch_config().threads, 3);
        assert_eq!(cli.algorithm, "RLE");
    }

    #[test]
    fn unknown_algorithm_is_upfront_error() {
        let cli = parse(&["-a", "zip", "in", "out"]);
        let err = execute(&cli, &CodecRegistry::builtin()).unwrap_err();
        assert!(matches!(err, RlecError::UnsupportedAlgorithm(ref n) if n == "zip"));
        assert!(err.is_upfront());
    }

    #[test]
    fn odd_file_list_is_upfront_error() {
        let cli = parse(&["a", "b", "c"]);
        let err = execute(&cli, &CodecRegistry::builtin()).unwrap_err();
        assert!(matches!(err, RlecError::Config(_)));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::Success.exit_code(), 0);
        assert_eq!(Outcome::PartialFailure.exit_code(), 1);
    }
}
