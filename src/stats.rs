use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use crate::config::{Config, SiteSource};
use crate::data::Site;
use crate::error::{PercolationError, Result};
use crate::percolate::Percolate;

const CONFIDENCE_Z: f64 = 1.96;

/// Every site of an `n`x`n` grid exactly once, in random order.
pub fn shuffled_sites<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Site> {
	let mut sites: Vec<Site> = (0..n)
		.flat_map(|row| (0..n).map(move |col| Site::new(row, col)))
		.collect();
	sites.shuffle(rng);
	sites
}

/// Opens sites on a fresh `model` until it percolates and returns how many
/// were opened.
pub fn run_trial<R: Rng + ?Sized>(model: &mut dyn Percolate, sampling: SiteSource, rng: &mut R) -> Result<usize> {
	let n = model.size();
	match sampling {
		SiteSource::Shuffle => {
			for site in shuffled_sites(n, rng) {
				model.open(site.row as isize, site.col as isize)?;
				if model.percolates() {
					break;
				}
			}
		}
		SiteSource::Rejection => {
			// every site open always percolates, so this terminates
			while !model.percolates() {
				let row = rng.gen_range(0..n) as isize;
				let col = rng.gen_range(0..n) as isize;
				if !model.is_open(row, col)? {
					model.open(row, col)?;
				}
			}
		}
	}
	Ok(model.number_of_open_sites())
}

/// Percolation thresholds gathered over independent trials.
#[derive(Debug, Clone)]
pub struct PercolationStats {
	n: usize,
	fractions: Vec<f64>,
	elapsed: Duration,
}

impl PercolationStats {
	/// Runs `config.trials` trials, drawing every site from `rng`.
	pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<PercolationStats> {
		config.validate()?;
		let n = config.n as usize;
		let cells = (n * n) as f64;
		let start = Instant::now();
		let mut fractions = Vec::new();

		for trial in 0..config.trials {
			let mut model = config.model.build(config.n)?;
			let opened = run_trial(model.as_mut(), config.sampling, rng)?;
			let fraction = opened as f64 / cells;
			debug!("trial {}: {} of {} sites open, threshold {:.4}", trial, opened, n * n, fraction);
			fractions.push(fraction);
		}

		let elapsed = start.elapsed();
		info!("{} trials of {}x{} with {} took {:.1} ms",
			config.trials, n, n, config.model.name(), elapsed.as_secs_f64() * 1000.0);
		if fractions.len() == 1 {
			warn!("a single trial has no sample standard deviation");
		}
		Ok(PercolationStats { n, fractions, elapsed })
	}

	/// Like `run`, with a fresh generator seeded from `config.seed`.
	pub fn run_seeded(config: &Config) -> Result<PercolationStats> {
		let mut rng = StdRng::seed_from_u64(config.seed);
		PercolationStats::run(config, &mut rng)
	}

	/// Statistics over externally gathered thresholds.
	pub fn from_fractions(n: usize, fractions: Vec<f64>) -> Result<PercolationStats> {
		if n == 0 || fractions.is_empty() {
			return Err(PercolationError::InvalidArgument("need a positive grid size and at least one trial".to_string()));
		}
		Ok(PercolationStats { n, fractions, elapsed: Duration::from_secs(0) })
	}

	pub fn fractions(&self) -> &[f64] {
		&self.fractions
	}

	pub fn trials(&self) -> usize {
		self.fractions.len()
	}

	pub fn elapsed(&self) -> Duration {
		self.elapsed
	}

	pub fn mean(&self) -> f64 {
		self.fractions.iter().sum::<f64>() / self.trials() as f64
	}

	/// Sample standard deviation; NaN for a single trial.
	pub fn stddev(&self) -> f64 {
		let t = self.trials();
		if t == 1 {
			return std::f64::NAN;
		}
		let mean = self.mean();
		let sum: f64 = self.fractions.iter().map(|x| (x - mean).powi(2)).sum();
		(sum / (t - 1) as f64).sqrt()
	}

	fn half_width(&self) -> f64 {
		CONFIDENCE_Z * self.stddev() / (self.trials() as f64).sqrt()
	}

	pub fn confidence_low(&self) -> f64 {
		self.mean() - self.half_width()
	}

	pub fn confidence_high(&self) -> f64 {
		self.mean() + self.half_width()
	}

	pub fn to_json(&self) -> Value {
		json!({
			"n": self.n,
			"trials": self.trials(),
			"mean": self.mean(),
			"stddev": self.stddev(),
			"confidence_low": self.confidence_low(),
			"confidence_high": self.confidence_high(),
			"elapsed_ms": self.elapsed.as_secs_f64() * 1000.0,
		})
	}
}
