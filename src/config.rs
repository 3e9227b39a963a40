use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::disjoint_set::DisjointSet;
use crate::error::{PercolationError, Result};
use crate::percolate::Percolate;
use crate::percolation_dfs::PercolationDFS;
use crate::percolation_uf::{grid_size, PercolationUF};
use crate::quick_find::QuickFind;

/// Which model a run builds for each trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
	UnionFind,
	QuickFind,
	FloodFill,
}

impl ModelKind {
	pub fn parse(name: &str) -> Result<ModelKind> {
		match name.trim() {
			"uf" => Ok(ModelKind::UnionFind),
			"uf-quickfind" => Ok(ModelKind::QuickFind),
			"dfs" => Ok(ModelKind::FloodFill),
			other => Err(PercolationError::Config(format!("unknown model '{}'", other))),
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			ModelKind::UnionFind => "uf",
			ModelKind::QuickFind => "uf-quickfind",
			ModelKind::FloodFill => "dfs",
		}
	}

	/// Fresh, fully closed model of side `n`.
	pub fn build(&self, n: isize) -> Result<Box<dyn Percolate>> {
		let model: Box<dyn Percolate> = match self {
			ModelKind::UnionFind => Box::new(PercolationUF::with_union_find(n, DisjointSet::make_singletons(0))?),
			ModelKind::QuickFind => Box::new(PercolationUF::with_union_find(n, QuickFind::new(0))?),
			ModelKind::FloodFill => Box::new(PercolationDFS::new(n)?),
		};
		Ok(model)
	}
}

/// How a trial draws the next site to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteSource {
	/// Every site once, in shuffled order.
	Shuffle,
	/// Uniform draws; already open sites are skipped.
	Rejection,
}

impl SiteSource {
	pub fn parse(name: &str) -> Result<SiteSource> {
		match name.trim() {
			"shuffle" => Ok(SiteSource::Shuffle),
			"rejection" => Ok(SiteSource::Rejection),
			other => Err(PercolationError::Config(format!("unknown sampling '{}'", other))),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub n: isize,
	pub trials: isize,
	pub seed: u64,
	pub model: ModelKind,
	pub sampling: SiteSource,
	pub log_file: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			n: 20,
			trials: 100,
			seed: 1234,
			model: ModelKind::UnionFind,
			sampling: SiteSource::Shuffle,
			log_file: None,
		}
	}
}

fn json_int(constants: &Value, key: &str) -> Result<Option<i64>> {
	match constants.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(v) => v.as_i64().map(Some).ok_or_else(|| PercolationError::Config(format!("{} must be an integer", key))),
	}
}

fn json_u64(constants: &Value, key: &str) -> Result<Option<u64>> {
	match constants.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(v) => v.as_u64().map(Some).ok_or_else(|| PercolationError::Config(format!("{} must be a non-negative integer", key))),
	}
}

fn json_str<'a>(constants: &'a Value, key: &str) -> Result<Option<&'a str>> {
	match constants.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(v) => v.as_str().map(Some).ok_or_else(|| PercolationError::Config(format!("{} must be a string", key))),
	}
}

impl Config {
	/// Overrides fields present in a JSON object such as
	/// `{"N": 50, "TRIALS": 200, "SEED": 7, "MODEL": "dfs"}`.
	pub fn apply_json(&mut self, constants: &Value) -> Result<()> {
		if !constants.is_object() {
			return Err(PercolationError::Config("config must be a JSON object".to_string()));
		}
		if let Some(n) = json_int(constants, "N")? {
			self.n = n as isize;
		}
		if let Some(trials) = json_int(constants, "TRIALS")? {
			self.trials = trials as isize;
		}
		if let Some(seed) = json_u64(constants, "SEED")? {
			self.seed = seed;
		}
		if let Some(model) = json_str(constants, "MODEL")? {
			self.model = ModelKind::parse(model)?;
		}
		if let Some(sampling) = json_str(constants, "SAMPLING")? {
			self.sampling = SiteSource::parse(sampling)?;
		}
		if let Some(log_file) = json_str(constants, "LOG_FILE")? {
			self.log_file = Some(log_file.to_string());
		}
		Ok(())
	}

	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Config> {
		let reader = BufReader::new(File::open(path)?);
		let constants: Value = serde_json::from_reader(reader)?;
		let mut config = Config::default();
		config.apply_json(&constants)?;
		Ok(config)
	}

	/// `[--config FILE] [N [T [SEED [MODEL]]]]`, positional values winning
	/// over the file.
	pub fn from_args<I: Iterator<Item = String>>(args: I) -> Result<Config> {
		let mut args = args.peekable();
		let mut config = Config::default();
		if args.peek().map(|a| a == "--config").unwrap_or(false) {
			args.next();
			let path = args.next().ok_or_else(|| PercolationError::Config("--config needs a file".to_string()))?;
			config = Config::from_json_file(path)?;
		}
		if let Some(n) = args.next() {
			config.n = parse_num(&n, "N")?;
		}
		if let Some(trials) = args.next() {
			config.trials = parse_num(&trials, "T")?;
		}
		if let Some(seed) = args.next() {
			config.seed = parse_num(&seed, "SEED")?;
		}
		if let Some(model) = args.next() {
			config.model = ModelKind::parse(&model)?;
		}
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		grid_size(self.n)?;
		if self.trials <= 0 {
			return Err(PercolationError::InvalidArgument(format!("T must be positive, got {}", self.trials)));
		}
		Ok(())
	}
}

fn parse_num<T: std::str::FromStr>(s: &str, what: &str) -> Result<T> {
	s.trim().parse::<T>().map_err(|_| PercolationError::Config(format!("{} is not a number: '{}'", what, s)))
}
