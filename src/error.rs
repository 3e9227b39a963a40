use std::result;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PercolationError {
	#[error("index ({row},{col}) is outside a {n}x{n} grid")]
	IndexOutOfRange { row: isize, col: isize, n: usize },

	#[error("element {index} is out of range for {len} elements")]
	ElementOutOfRange { index: usize, len: usize },

	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error("config error: {0}")]
	Config(String),
}

impl From<serde_json::Error> for PercolationError {
	fn from(e: serde_json::Error) -> Self {
		PercolationError::Config(e.to_string())
	}
}

impl From<std::io::Error> for PercolationError {
	fn from(e: std::io::Error) -> Self {
		PercolationError::Config(e.to_string())
	}
}

pub type Result<T> = result::Result<T, PercolationError>;
