use crate::disjoint_set::UnionFind;
use crate::error::{PercolationError, Result};

/// Eager union-find: `find` is a lookup, `union` relabels a whole component.
/// Kept as the slow baseline for the weighted variant.
#[derive(Debug, Clone)]
pub struct QuickFind {
	id: Vec<usize>,
	components: usize,
}

impl QuickFind {
	pub fn new(n: usize) -> QuickFind {
		QuickFind {
			id: (0..n).collect(),
			components: n,
		}
	}
}

impl UnionFind for QuickFind {
	fn initialize(&mut self, n: usize) {
		*self = QuickFind::new(n);
	}

	fn find(&mut self, x: usize) -> Result<usize> {
		self.id.get(x).cloned().ok_or(PercolationError::ElementOutOfRange { index: x, len: self.id.len() })
	}

	fn union(&mut self, p: usize, q: usize) -> Result<()> {
		let p_id = self.find(p)?;
		let q_id = self.find(q)?;
		if p_id == q_id {
			return Ok(());
		}
		for id in self.id.iter_mut() {
			if *id == q_id {
				*id = p_id;
			}
		}
		self.components -= 1;
		Ok(())
	}

	fn components(&self) -> usize {
		self.components
	}

	fn len(&self) -> usize {
		self.id.len()
	}
}
