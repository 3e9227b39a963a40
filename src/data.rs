/// A grid coordinate, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    /// Neighbor one step in `dir`, or None if it falls off an `n`x`n` grid.
    pub fn step(&self, dir: Direction, n: usize) -> Option<Site> {
        let (dr, dc) = dir.offset();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 || row >= n as isize || col >= n as isize {
            None
        } else {
            Some(Site::new(row as usize, col as usize))
        }
    }

    pub fn neighbors(&self, n: usize) -> impl Iterator<Item = Site> {
        let origin = *self;
        Direction::adjacent_directions()
            .into_iter()
            .filter_map(move |dir| origin.step(dir, n))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellState {
    Blocked,
    Open,
    Full,
}

impl CellState {
    pub fn get_char_encoding(&self) -> char {
        match self {
            CellState::Blocked => '#',
            CellState::Open => '.',
            CellState::Full => '~',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up, Left, Right, Down,
}

impl Direction {
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    // fixed order keeps flood fills reproducible
    pub fn adjacent_directions() -> Vec<Direction> {
        vec![Direction::Up, Direction::Left,
        Direction::Right, Direction::Down]
    }
}

/// Converts caller coordinates to a `Site`, or None if outside `n`x`n`.
pub fn checked_site(row: isize, col: isize, n: usize) -> Option<Site> {
    if row < 0 || col < 0 || row as usize >= n || col as usize >= n {
        None
    } else {
        Some(Site::new(row as usize, col as usize))
    }
}
