#[macro_use] extern crate log;
extern crate rand;
extern crate serde_json;

mod data;
mod error;
mod disjoint_set;
mod quick_find;
mod percolate;
mod percolation_uf;
mod percolation_dfs;
mod config;
mod stats;

pub use error::{PercolationError, Result};
pub use data::{CellState, Direction, Site};
pub use disjoint_set::{DisjointSet, UnionFind};
pub use quick_find::QuickFind;
pub use percolate::Percolate;
pub use percolation_uf::PercolationUF;
pub use percolation_dfs::PercolationDFS;
pub use config::{Config, ModelKind, SiteSource};
pub use stats::{PercolationStats, run_trial, shuffled_sites};
