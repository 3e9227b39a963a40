
// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::error::{PercolationError, Result};

/// Disjoint sets over the fixed universe `0..len()`.
pub trait UnionFind {
	/// Resets to `n` singleton components labeled `0..n`.
	fn initialize(&mut self, n: usize);
	fn find(&mut self, x: usize) -> Result<usize>;
	fn union(&mut self, p: usize, q: usize) -> Result<()>;
	fn components(&self) -> usize;
	fn len(&self) -> usize;

	fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
		Ok(self.find(p)? == self.find(q)?)
	}

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Weighted quick-union with path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	size: Vec<usize>,
	components: usize,
}

impl DisjointSet {
	pub fn make_singletons(n: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..n).collect(),
			size: vec![1; n],
			components: n,
		}
	}

	fn validate(&self, x: usize) -> Result<()> {
		if x >= self.parent.len() {
			return Err(PercolationError::ElementOutOfRange { index: x, len: self.parent.len() });
		}
		Ok(())
	}

	/// Size of the component whose root is `root`. Only meaningful for roots.
	#[cfg(test)]
	fn root_size(&self, root: usize) -> Option<usize> {
		if root < self.parent.len() && self.parent[root] == root {
			Some(self.size[root])
		} else {
			None
		}
	}
}

impl UnionFind for DisjointSet {
	fn initialize(&mut self, n: usize) {
		*self = DisjointSet::make_singletons(n);
	}

	// path halving: every visited node is relinked to its grandparent
	fn find(&mut self, mut x: usize) -> Result<usize> {
		self.validate(x)?;
		while self.parent[x] != x {
			let grandparent = self.parent[self.parent[x]];
			self.parent[x] = grandparent;
			x = grandparent;
		}
		Ok(x)
	}

	fn union(&mut self, p: usize, q: usize) -> Result<()> {
		let p_root = self.find(p)?;
		let q_root = self.find(q)?;
		if p_root == q_root {
			return Ok(());
		}

		// smaller root goes under the larger one; ties hang q under p
		if self.size[p_root] < self.size[q_root] {
			self.parent[p_root] = q_root;
			self.size[q_root] += self.size[p_root];
		} else {
			self.parent[q_root] = p_root;
			self.size[p_root] += self.size[q_root];
		}
		self.components -= 1;
		Ok(())
	}

	fn components(&self) -> usize {
		self.components
	}

	fn len(&self) -> usize {
		self.parent.len()
	}
}
