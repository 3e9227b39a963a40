use crate::data::CellState;
use crate::error::Result;

/// Common contract of every percolation model. Coordinates are signed so
/// that callers can pass anything and get `IndexOutOfRange` back.
pub trait Percolate {
	/// Opens (row, col). Opening an already open site does nothing.
	fn open(&mut self, row: isize, col: isize) -> Result<()>;
	fn is_open(&self, row: isize, col: isize) -> Result<bool>;
	/// Open and connected to the top row through open sites.
	fn is_full(&mut self, row: isize, col: isize) -> Result<bool>;
	fn number_of_open_sites(&self) -> usize;
	fn percolates(&mut self) -> bool;
	/// Grid side length.
	fn size(&self) -> usize;

	/// One line per row: `#` blocked, `.` open, `~` full.
	fn render(&mut self) -> String {
		let n = self.size() as isize;
		let mut out = String::new();
		for row in 0..n {
			for col in 0..n {
				let state = match (self.is_open(row, col), self.is_full(row, col)) {
					(_, Ok(true)) => CellState::Full,
					(Ok(true), _) => CellState::Open,
					_ => CellState::Blocked,
				};
				out.push(state.get_char_encoding());
			}
			out.push('\n');
		}
		out
	}
}
