use crate::data::{checked_site, Site};
use crate::disjoint_set::{DisjointSet, UnionFind};
use crate::error::{PercolationError, Result};
use crate::percolate::Percolate;

/// Percolation model that keeps connectivity incrementally in a union-find
/// structure. Cells are row-major indices `0..n*n`; two extra virtual
/// elements stand for the whole top row and the whole bottom row, so
/// `percolates` is a single connectivity query.
pub struct PercolationUF<U: UnionFind = DisjointSet> {
	grid: Vec<bool>,
	n: usize,
	open_sites: usize,
	union: U,
	top: usize,
	bottom: usize,
}

/// Rejects non-positive sizes and sizes whose n*n+2 universe overflows.
pub(crate) fn grid_size(n: isize) -> Result<usize> {
	if n <= 0 {
		return Err(PercolationError::InvalidArgument(format!("grid size must be positive, got {}", n)));
	}
	let n = n as usize;
	match n.checked_mul(n).and_then(|cells| cells.checked_add(2)) {
		Some(_) => Ok(n),
		None => Err(PercolationError::InvalidArgument(format!("grid size {} is too large", n))),
	}
}

impl PercolationUF<DisjointSet> {
	pub fn new(n: isize) -> Result<PercolationUF<DisjointSet>> {
		PercolationUF::with_union_find(n, DisjointSet::make_singletons(0))
	}
}

impl<U: UnionFind> PercolationUF<U> {
	/// Builds the model on top of `union`, which is reinitialised to the
	/// n*n+2 element universe.
	pub fn with_union_find(n: isize, mut union: U) -> Result<PercolationUF<U>> {
		let n = grid_size(n)?;
		union.initialize(n * n + 2);
		Ok(PercolationUF {
			grid: vec![false; n * n],
			n,
			open_sites: 0,
			union,
			top: n * n,
			bottom: n * n + 1,
		})
	}

	/// Row-major index of (row, col), or None when out of bounds.
	pub fn index(&self, row: isize, col: isize) -> Option<usize> {
		checked_site(row, col, self.n).map(|site| self.site_index(site))
	}

	fn site_index(&self, site: Site) -> usize {
		site.row * self.n + site.col
	}

	fn site(&self, row: isize, col: isize) -> Result<Site> {
		checked_site(row, col, self.n).ok_or(PercolationError::IndexOutOfRange { row, col, n: self.n })
	}

	/// Unions a freshly opened site with the virtual rows and with every
	/// open neighbor.
	fn connect(&mut self, site: Site) -> Result<()> {
		let idx = self.site_index(site);
		if site.row == 0 {
			self.union.union(idx, self.top)?;
		}
		if site.row == self.n - 1 {
			self.union.union(idx, self.bottom)?;
		}
		for nb in site.neighbors(self.n) {
			let nb_idx = self.site_index(nb);
			if self.grid[nb_idx] {
				self.union.union(idx, nb_idx)?;
			}
		}
		Ok(())
	}

	pub fn components(&self) -> usize {
		self.union.components()
	}
}

impl<U: UnionFind> Percolate for PercolationUF<U> {
	fn open(&mut self, row: isize, col: isize) -> Result<()> {
		let site = self.site(row, col)?;
		let idx = self.site_index(site);
		if self.grid[idx] {
			return Ok(());
		}
		self.grid[idx] = true;
		self.open_sites += 1;
		self.connect(site)
	}

	fn is_open(&self, row: isize, col: isize) -> Result<bool> {
		let site = self.site(row, col)?;
		Ok(self.grid[self.site_index(site)])
	}

	fn is_full(&mut self, row: isize, col: isize) -> Result<bool> {
		let site = self.site(row, col)?;
		let idx = self.site_index(site);
		// a closed cell was never unioned, but guard anyway
		Ok(self.grid[idx] && self.union.connected(self.top, idx)?)
	}

	fn number_of_open_sites(&self) -> usize {
		self.open_sites
	}

	fn percolates(&mut self) -> bool {
		// top and bottom are the last two elements of the universe built in
		// with_union_find, so connected cannot fail here
		debug_assert_eq!(self.union.len(), self.bottom + 1);
		let (top, bottom) = (self.top, self.bottom);
		self.union.connected(top, bottom).unwrap_or(false)
	}

	fn size(&self) -> usize {
		self.n
	}
}
