use std::fmt;

use crate::data::{checked_site, CellState, Site};
use crate::error::{PercolationError, Result};
use crate::percolate::Percolate;
use crate::percolation_uf::grid_size;

/// Flood-fill percolation model. `Full` is a cache over the open cells that
/// is rebuilt from scratch after every open, which costs O(n^2) per call.
/// This is the slow reference the union-find model is measured against.
pub struct PercolationDFS {
    grid: Vec<CellState>,
    n: usize,
    open_sites: usize,
}

impl PercolationDFS {
    pub fn new(n: isize) -> Result<PercolationDFS> {
        let n = grid_size(n)?;
        Ok(PercolationDFS {
            grid: vec![CellState::Blocked; n * n],
            n,
            open_sites: 0,
        })
    }

    fn idx(&self, site: Site) -> usize {
        site.row * self.n + site.col
    }

    fn site(&self, row: isize, col: isize) -> Result<Site> {
        checked_site(row, col, self.n).ok_or(PercolationError::IndexOutOfRange { row, col, n: self.n })
    }

    pub fn state(&self, row: isize, col: isize) -> Result<CellState> {
        let site = self.site(row, col)?;
        Ok(self.grid[self.idx(site)])
    }

    /// Forgets every cached `Full` mark and floods again from the top row.
    fn recompute_full(&mut self) {
        for cell in self.grid.iter_mut() {
            if *cell == CellState::Full {
                *cell = CellState::Open;
            }
        }
        self.flood_from_top();
    }

    /// Marks every open cell reachable from an open top-row cell as full.
    fn flood_from_top(&mut self) {
        for col in 0..self.n {
            self.flood(Site::new(0, col));
        }
    }

    // explicit work-list instead of recursion; a cell is marked before its
    // neighbors are pushed so cycles terminate
    fn flood(&mut self, start: Site) {
        let start_idx = self.idx(start);
        if self.grid[start_idx] != CellState::Open {
            return;
        }
        self.grid[start_idx] = CellState::Full;
        let mut stack = vec![start];
        while let Some(site) = stack.pop() {
            for nb in site.neighbors(self.n) {
                let nb_idx = self.idx(nb);
                if self.grid[nb_idx] == CellState::Open {
                    self.grid[nb_idx] = CellState::Full;
                    stack.push(nb);
                }
            }
        }
    }
}

impl Percolate for PercolationDFS {
    fn open(&mut self, row: isize, col: isize) -> Result<()> {
        let site = self.site(row, col)?;
        let idx = self.idx(site);
        if self.grid[idx] != CellState::Blocked {
            return Ok(());
        }
        self.grid[idx] = CellState::Open;
        self.open_sites += 1;
        self.recompute_full();
        Ok(())
    }

    fn is_open(&self, row: isize, col: isize) -> Result<bool> {
        Ok(self.state(row, col)? != CellState::Blocked)
    }

    fn is_full(&mut self, row: isize, col: isize) -> Result<bool> {
        Ok(self.state(row, col)? == CellState::Full)
    }

    fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    fn percolates(&mut self) -> bool {
        self.flood_from_top();
        let last = (self.n - 1) * self.n;
        self.grid[last..].iter().any(|&cell| cell == CellState::Full)
    }

    fn size(&self) -> usize {
        self.n
    }
}

impl fmt::Display for PercolationDFS {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.chunks(self.n) {
            let line: String = row.iter().map(|cell| cell.get_char_encoding()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_size() {
        assert!(matches!(PercolationDFS::new(0), Err(PercolationError::InvalidArgument(_))));
        assert!(matches!(PercolationDFS::new(-1), Err(PercolationError::InvalidArgument(_))));
    }

    #[test]
    fn out_of_bounds_open_leaves_state_unchanged() {
        let mut p = PercolationDFS::new(4).unwrap();
        for &(r, c) in [(-1, 0), (4, 0), (0, -1), (0, 4)].iter() {
            assert_eq!(p.open(r, c), Err(PercolationError::IndexOutOfRange { row: r, col: c, n: 4 }));
        }
        assert_eq!(p.number_of_open_sites(), 0);
        assert_eq!(p.to_string(), "####\n".repeat(4));
    }

    #[test]
    fn single_cell_percolates_immediately() {
        let mut p = PercolationDFS::new(1).unwrap();
        assert!(!p.percolates());
        p.open(0, 0).unwrap();
        assert!(p.percolates());
        assert!(p.is_open(0, 0).unwrap());
        assert!(p.is_full(0, 0).unwrap());
    }

    #[test]
    fn out_of_bounds_queries_fail() {
        let mut p = PercolationDFS::new(3).unwrap();
        p.open(0, 0).unwrap();
        for &(r, c) in [(-1, 0), (3, 0), (0, -1), (0, 3)].iter() {
            let err = PercolationError::IndexOutOfRange { row: r, col: c, n: 3 };
            assert_eq!(p.is_open(r, c), Err(err.clone()));
            assert_eq!(p.is_full(r, c), Err(err.clone()));
            assert_eq!(p.state(r, c), Err(err));
        }
        assert_eq!(p.number_of_open_sites(), 1);
    }

    #[test]
    fn full_sites_still_count_as_open() {
        let mut p = PercolationDFS::new(3).unwrap();
        p.open(0, 1).unwrap();
        assert_eq!(p.state(0, 1).unwrap(), CellState::Full);
        assert!(p.is_open(0, 1).unwrap());
        assert!(p.is_full(0, 1).unwrap());
        p.open(0, 1).unwrap();
        assert_eq!(p.number_of_open_sites(), 1);
    }

    #[test]
    fn fill_reaches_cells_below_existing_full_region() {
        let mut p = PercolationDFS::new(3).unwrap();
        p.open(0, 0).unwrap();
        p.open(1, 0).unwrap();
        assert!(p.is_full(1, 0).unwrap());
        assert!(!p.percolates());
        p.open(2, 0).unwrap();
        assert!(p.is_full(2, 0).unwrap());
        assert!(p.percolates());
    }

    #[test]
    fn isolated_cell_fills_when_bridged() {
        let mut p = PercolationDFS::new(3).unwrap();
        p.open(2, 2).unwrap();
        p.open(1, 2).unwrap();
        assert!(!p.is_full(2, 2).unwrap());
        p.open(0, 2).unwrap();
        assert!(p.is_full(2, 2).unwrap());
        assert!(p.percolates());
        assert_eq!(p.to_string(), "##~\n##~\n##~\n");
    }

    #[test]
    fn winding_path_is_followed_upwards() {
        // the fill has to climb back up from row 2 to reach (1,2)
        let mut p = PercolationDFS::new(4).unwrap();
        for &(r, c) in [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2)].iter() {
            p.open(r, c).unwrap();
        }
        assert!(p.is_full(1, 2).unwrap());
        assert!(!p.percolates());
        assert_eq!(p.to_string(), "~###\n~#~#\n~~~#\n####\n");
    }

    #[test]
    fn percolates_is_stable_when_repeated() {
        let mut p = PercolationDFS::new(2).unwrap();
        p.open(0, 0).unwrap();
        p.open(1, 1).unwrap();
        assert!(!p.percolates());
        assert!(!p.percolates());
        assert!(p.is_full(0, 0).unwrap());
        assert!(!p.is_full(1, 1).unwrap());
    }
}
