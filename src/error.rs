use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RlecError {
	#[error("unsupported compression algorithm: {0}")]
	UnsupportedAlgorithm(String),

	#[error("input file \"{}\" does not exist", path.display())]
	InputNotFound { path: PathBuf },

	#[error("I/O error on \"{}\": {source}", path.display())]
	File {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("malformed RLE data: incomplete pair at offset {offset}")]
	MalformedData { offset: usize },

	#[error("worker pool failed to start: {0}")]
	ThreadPool(#[from] rayon::ThreadPoolBuildError),

	#[error("Configuration error: {0}")]
	Config(String),
}

impl RlecError {
	/// Wraps an I/O error with the path it happened on. A missing file is
	/// reported as [`RlecError::InputNotFound`] instead.
	pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		let path = path.into();
		if source.kind() == std::io::ErrorKind::NotFound {
			RlecError::InputNotFound { path }
		} else {
			RlecError::File { path, source }
		}
	}

	pub fn from_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		RlecError::File { path: path.into(), source }
	}

	/// True for errors raised before any job was started.
	pub fn is_upfront(&self) -> bool {
		matches!(
			self,
			RlecError::UnsupportedAlgorithm(_) | RlecError::ThreadPool(_) | RlecError::Config(_)
		)
	}
}

pub type Result<T> = std::result::Result<T, RlecError>;

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{Error, ErrorKind};

	#[test]
	fn missing_input_maps_to_input_not_found() {
		let err = RlecError::from_read("nope.txt", Error::from(ErrorKind::NotFound));
		assert!(matches!(err, RlecError::InputNotFound { ref path } if path == &PathBuf::from("nope.txt")));
		assert!(err.to_string().contains("nope.txt"));
	}

	#[test]
	fn other_read_errors_keep_the_path() {
		let err = RlecError::from_read("locked.bin", Error::from(ErrorKind::PermissionDenied));
		match err {
			RlecError::File { path, source } => {
				assert_eq!(path, PathBuf::from("locked.bin"));
				assert_eq!(source.kind(), ErrorKind::PermissionDenied);
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn only_batch_level_errors_are_upfront() {
		assert!(RlecError::UnsupportedAlgorithm("lzw".into()).is_upfront());
		assert!(RlecError::Config("odd".into()).is_upfront());
		assert!(!RlecError::MalformedData { offset: 3 }.is_upfront());
		assert!(!RlecError::InputNotFound { path: "x".into() }.is_upfront());
	}
}
