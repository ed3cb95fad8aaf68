use crate::error::RlecError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One input file to transform into one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Job {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Groups an alternating `in out in out ...` list into jobs.
    pub fn pairs_from<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Job>, RlecError> {
        if paths.len() % 2 != 0 {
            return Err(RlecError::Config(format!(
                "expected input/output file pairs, got {} paths",
                paths.len()
            )));
        }
        Ok(paths
            .chunks_exact(2)
            .map(|pair| Job::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect())
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input.display(), self.output.display())
    }
}

#[derive(Debug, Clone)]
pub struct JobStats {
    pub input_size: u64,
    pub output_size: u64,
    pub elapsed: Duration,
}

impl JobStats {
    /// Input size over output size; 0.0 when nothing was written.
    pub fn ratio(&self) -> f64 {
        if self.output_size > 0 {
            self.input_size as f64 / self.output_size as f64
        } else {
            0.0
        }
    }
}

/// What happened to one job
#[derive(Debug)]
pub struct JobOutcome {
    pub job: Job,
    pub result: Result<JobStats, RlecError>,
}

impl JobOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_alternating_paths() {
        let jobs = Job::pairs_from(&["a.txt", "a.rle", "b.txt", "b.rle"]).unwrap();
        assert_eq!(
            jobs,
            vec![Job::new("a.txt", "a.rle"), Job::new("b.txt", "b.rle")]
        );
    }

    #[test]
    fn odd_path_count_is_config_error() {
        let err = Job::pairs_from(&["a.txt", "a.rle", "b.txt"]).unwrap_err();
        assert!(matches!(err, RlecError::Config(_)));
    }

    #[test]
    fn empty_list_has_no_jobs() {
        let paths: [&str; 0] = [];
        assert!(Job::pairs_from(&paths).unwrap().is_empty());
    }

    #[test]
    fn ratio_handles_empty_output() {
        let stats = JobStats { input_size: 0, output_size: 0, elapsed: Duration::ZERO };
        assert_eq!(stats.ratio(), 0.0);
        let stats = JobStats { input_size: 300, output_size: 4, elapsed: Duration::ZERO };
        assert_eq!(stats.ratio(), 75.0);
    }
}
