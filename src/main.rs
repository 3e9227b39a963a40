#[macro_use] extern crate log;
extern crate simplelog;
extern crate percolation;

use simplelog::*;
use std::env;
use std::fs::File;
use std::process;

use percolation::{Config, PercolationStats};


fn init_logging(config: &Config) -> percolation::Result<()> {
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		TermLogger::new(LevelFilter::Info, simplelog::Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
	];
	if let Some(path) = &config.log_file {
		loggers.push(WriteLogger::new(LevelFilter::Debug, simplelog::Config::default(), File::create(path)?));
	}
	let _ = CombinedLogger::init(loggers);
	Ok(())
}

fn run() -> percolation::Result<()> {
	let config = Config::from_args(env::args().skip(1))?;
	init_logging(&config)?;
	info!("config: {:?}", config);

	let stats = PercolationStats::run_seeded(&config)?;
	println!("{}", stats.to_json());
	Ok(())
}

fn main() {
	if let Err(e) = run() {
		eprintln!("error: {}", e);
		process::exit(1);
	}
}
