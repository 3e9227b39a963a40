extern crate pathfinding;
extern crate percolation;
extern crate rand;

use std::collections::HashSet;

use pathfinding::prelude::bfs_reach;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use percolation::{shuffled_sites, Percolate, PercolationDFS, PercolationError, PercolationUF, QuickFind, Site};

/// Full sites computed independently: breadth-first reach from a virtual
/// node sitting above the open cells of row 0.
fn reachable_from_top(n: usize, open: &HashSet<Site>) -> HashSet<Site> {
    let start: Option<Site> = None;
    bfs_reach(start, |node| {
        let next: Vec<Option<Site>> = match node {
            None => (0..n).map(|col| Site::new(0, col)).filter(|s| open.contains(s)).map(Some).collect(),
            Some(site) => site.neighbors(n).filter(|s| open.contains(s)).map(Some).collect(),
        };
        next
    })
    .flatten()
    .collect()
}

fn models(n: isize) -> Vec<Box<dyn Percolate>> {
    vec![
        Box::new(PercolationUF::new(n).unwrap()),
        Box::new(PercolationUF::with_union_find(n, QuickFind::new(0)).unwrap()),
        Box::new(PercolationDFS::new(n).unwrap()),
    ]
}

fn assert_matches_oracle(models: &mut [Box<dyn Percolate>], open: &HashSet<Site>) {
    let n = models[0].size();
    let full = reachable_from_top(n, open);
    let percolates = full.iter().any(|s| s.row == n - 1);
    for model in models.iter_mut() {
        assert_eq!(model.number_of_open_sites(), open.len());
        assert_eq!(model.percolates(), percolates);
        for row in 0..n {
            for col in 0..n {
                let site = Site::new(row, col);
                let (r, c) = (row as isize, col as isize);
                assert_eq!(model.is_open(r, c).unwrap(), open.contains(&site), "open {:?}", site);
                assert_eq!(model.is_full(r, c).unwrap(), full.contains(&site), "full {:?}", site);
            }
        }
    }
}

#[test]
fn variants_agree_after_every_open() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let mut ms = models(5);
        let mut open = HashSet::new();
        for site in shuffled_sites(5, &mut rng) {
            for m in ms.iter_mut() {
                m.open(site.row as isize, site.col as isize).unwrap();
            }
            open.insert(site);
            assert_matches_oracle(&mut ms, &open);
        }
    }
}

#[test]
fn repeated_opens_and_bad_coordinates_change_nothing() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut ms = models(5);
    let mut open = HashSet::new();
    for _ in 0..60 {
        let row = rng.gen_range(-1..6isize);
        let col = rng.gen_range(-1..6isize);
        let in_bounds = row >= 0 && row < 5 && col >= 0 && col < 5;
        for m in ms.iter_mut() {
            let result = m.open(row, col);
            if in_bounds {
                assert_eq!(result, Ok(()));
            } else {
                assert_eq!(result, Err(PercolationError::IndexOutOfRange { row, col, n: 5 }));
            }
        }
        if in_bounds {
            open.insert(Site::new(row as usize, col as usize));
        }
        assert_matches_oracle(&mut ms, &open);
    }
}

#[test]
fn percolation_never_reverts() {
    let mut rng = StdRng::seed_from_u64(31);
    for m in models(7).iter_mut() {
        let mut seen = false;
        for site in shuffled_sites(7, &mut rng) {
            m.open(site.row as isize, site.col as isize).unwrap();
            let now = m.percolates();
            assert!(now || !seen);
            seen = now;
        }
        assert!(seen);
    }
}

#[test]
fn identical_sequences_give_identical_state() {
    let sites = shuffled_sites(6, &mut StdRng::seed_from_u64(8));
    let mut a = PercolationDFS::new(6).unwrap();
    let mut b = PercolationDFS::new(6).unwrap();
    for site in sites.iter().take(20) {
        a.open(site.row as isize, site.col as isize).unwrap();
        b.open(site.row as isize, site.col as isize).unwrap();
    }
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a.percolates(), b.percolates());
}

#[test]
fn union_find_handles_large_grid() {
    let n = 200;
    let mut p = PercolationUF::new(n).unwrap();
    for row in 0..n {
        p.open(row, n / 2).unwrap();
    }
    assert!(p.percolates());
    assert_eq!(p.number_of_open_sites(), n as usize);
}

#[test]
fn flood_fill_survives_long_snake() {
    // one serpentine path covering half the grid
    let n: isize = 80;
    let mut p = PercolationDFS::new(n).unwrap();
    for row in (0..n).step_by(2) {
        for col in 0..n {
            p.open(row, col).unwrap();
        }
        if row + 1 < n {
            let link = if (row / 2) % 2 == 0 { n - 1 } else { 0 };
            p.open(row + 1, link).unwrap();
        }
    }
    assert!(p.percolates());
    assert!(p.is_full(n - 1, 0).unwrap());
}
