use crate::codec::Codec;
use crate::config::{DispatchConfig, Mode};
use crate::error::{Result, RlecError};
use crate::job::{Job, JobOutcome, JobStats};
use crate::registry::CodecRegistry;
use crossbeam_channel::unbounded;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::sync::Arc;
use std::time::Instant;

/// Result of a whole batch, in completion order
#[derive(Debug, Default)]
pub struct BatchReport {
	pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
	pub fn succeeded(&self) -> impl Iterator<Item = &JobOutcome> {
		self.outcomes.iter().filter(|o| o.is_ok())
	}

	pub fn failed(&self) -> impl Iterator<Item = &JobOutcome> {
		self.outcomes.iter().filter(|o| !o.is_ok())
	}

	pub fn is_success(&self) -> bool {
		self.outcomes.iter().all(JobOutcome::is_ok)
	}

	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}
}

/// Applies one codec to many file pairs in parallel.
///
/// Every job runs on its own pool task. A failing job only affects its own
/// outcome; `run` returns once every submitted job has finished.
pub struct Dispatcher {
	codec: Arc<dyn Codec>,
	config: DispatchConfig,
}

impl Dispatcher {
	pub fn new(codec: Arc<dyn Codec>, config: DispatchConfig) -> Self {
		Self { codec, config }
	}

	/// Resolves `algorithm` before any job exists, so an unknown name fails
	/// the batch as a whole.
	pub fn for_algorithm(registry: &CodecRegistry, algorithm: &str, config: DispatchConfig) -> Result<Self> {
		config.validate()?;
		let codec = registry.get(algorithm)?;
		Ok(Self::new(codec, config))
	}

	pub fn codec(&self) -> &Arc<dyn Codec> {
		&self.codec
	}

	pub fn run(&self, jobs: Vec<Job>, mode: Mode) -> Result<BatchReport> {
		self.run_with(jobs, mode, |_| {})
	}

	/// Like [`Dispatcher::run`], calling `on_complete` on the caller's thread
	/// as each job finishes.
	pub fn run_with<F>(&self, jobs: Vec<Job>, mode: Mode, mut on_complete: F) -> Result<BatchReport>
	where
		F: FnMut(&JobOutcome),
	{
		let pool = rayon::ThreadPoolBuilder::new()
			.num_threads(self.config.threads)
			.thread_name(|i| format!("rlec-worker-{}", i))
			.build()?;

		let pb = self.progress_bar(jobs.len() as u64);
		let (tx, rx) = unbounded::<JobOutcome>();

		log::debug!("{}: dispatching {} jobs on {} threads", mode, jobs.len(), self.config.threads);

		for job in jobs {
			let tx = tx.clone();
			let codec = Arc::clone(&self.codec);
			let pb = pb.clone();
			pool.spawn(move || {
				let result = process_job(codec.as_ref(), &job, mode);
				pb.inc(1);
				let _ = tx.send(JobOutcome { job, result });
			});
		}
		drop(tx);

		// Disconnects once the last task has dropped its sender.
		let mut report = BatchReport::default();
		for outcome in rx.iter() {
			match &outcome.result {
				Ok(stats) => log::debug!(
					"{}: {} done ({} -> {} bytes in {:.2?})",
					mode, outcome.job, stats.input_size, stats.output_size, stats.elapsed
				),
				Err(e) => log::debug!("{}: {} failed: {}", mode, outcome.job, e),
			}
			on_complete(&outcome);
			report.outcomes.push(outcome);
		}

		pb.finish_and_clear();
		Ok(report)
	}

	fn progress_bar(&self, len: u64) -> ProgressBar {
		if !self.config.progress {
			return ProgressBar::hidden();
		}
		let style = ProgressStyle::default_bar()
			.template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] Jobs {pos}/{len} ({eta})")
			.map(|s| s.progress_chars("#>-"))
			.unwrap_or_else(|_| ProgressStyle::default_bar());
		let pb = ProgressBar::new(len);
		pb.set_style(style);
		pb
	}
}

/// Reads `job.input`, runs the codec over it and writes `job.output`.
pub fn process_job(codec: &dyn Codec, job: &Job, mode: Mode) -> Result<JobStats> {
	let start = Instant::now();
	log::info!("{}: reading from \"{}\" and writing to \"{}\"", codec.name(), job.input.display(), job.output.display());

	let input = fs::read(&job.input).map_err(|e| RlecError::from_read(&job.input, e))?;

	let output = match mode {
		Mode::Compress => codec.encode(&input)?,
		Mode::Decompress => codec.decode(&input)?,
	};

	fs::write(&job.output, &output).map_err(|e| RlecError::from_write(&job.output, e))?;

	Ok(JobStats {
		input_size: input.len() as u64,
		output_size: output.len() as u64,
		elapsed: start.elapsed(),
	})
}
