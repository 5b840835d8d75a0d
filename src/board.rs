use crate::{Error, Pos2};
use std::fmt;

/// The state of a single cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}
impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}
impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// The smallest side length that still leaves an interior cell
pub const MIN_SIDE: usize = 3;

/// A fixed-size grid of cells surrounded by a one cell wide dead border
///
/// Only interior cells can be set; the border exists so every interior cell
/// has eight neighbours without edge handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all dead board
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Creates a board where only the given (interior) positions are alive
    pub fn with_alive(width: usize, height: usize, alive: &[Pos2]) -> Result<Self, Error> {
        let mut board = Self::new(width, height)?;
        for &pos in alive {
            board.set(pos, Cell::Alive)?;
        }
        Ok(board)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The row-major index of `pos`, or [`None`] if it is off the board
    #[inline]
    pub(crate) fn index(&self, pos: Pos2) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[inline]
    pub fn get(&self, pos: Pos2) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Whether `pos` is alive; positions off the board count as dead
    #[inline]
    pub fn is_alive(&self, pos: Pos2) -> bool {
        self.get(pos).is_some_and(Cell::is_alive)
    }

    pub fn is_interior(&self, pos: Pos2) -> bool {
        let x_range = 1..self.width as i32 - 1;
        let y_range = 1..self.height as i32 - 1;
        x_range.contains(&pos.x) && y_range.contains(&pos.y)
    }

    /// Sets an interior cell, rejecting any position on or beyond the border
    pub fn set(&mut self, pos: Pos2, cell: Cell) -> Result<(), Error> {
        if !self.is_interior(pos) {
            return Err(Error::OutsideInterior(pos));
        }
        let i = self.index(pos).ok_or(Error::OutsideInterior(pos))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Every interior position in row-major order
    pub fn interior(&self) -> impl Iterator<Item = Pos2> + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Pos2::new(x, y)))
    }

    /// Every live position in row-major order
    pub fn alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.interior().filter(|&pos| self.is_alive(pos))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

fn check_size(width: usize, height: usize) -> Result<(), Error> {
    // i32::MAX keeps every position representable as a Pos2
    let fits = |side: usize| (MIN_SIDE..=i32::MAX as usize).contains(&side);
    if fits(width) && fits(height) {
        Ok(())
    } else {
        Err(Error::GridTooSmall { width, height })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "█" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_is_rejected() {
        assert_eq!(
            Board::new(2, 5),
            Err(Error::GridTooSmall {
                width: 2,
                height: 5
            })
        );
        assert!(Board::new(5, 0).is_err());
        assert!(Board::new(3, 3).is_ok());
    }

    #[test]
    fn border_cannot_be_set() {
        let mut board = Board::new(4, 4).expect("board");

        for pos in [Pos2::new(0, 1), Pos2::new(3, 2), Pos2::new(1, 0), Pos2::new(2, 3)] {
            assert_eq!(board.set(pos, Cell::Alive), Err(Error::OutsideInterior(pos)));
        }
        assert!(board.set(Pos2::new(-1, 1), Cell::Alive).is_err());
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn interior_excludes_border() {
        let board = Board::new(4, 3).expect("board");
        let interior: Vec<_> = board.interior().collect();

        assert_eq!(interior, vec![Pos2::new(1, 1), Pos2::new(2, 1)]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let board = Board::with_alive(3, 3, &[Pos2::new(1, 1)]).expect("board");

        assert_eq!(board.get(Pos2::new(1, 1)), Some(Cell::Alive));
        assert_eq!(board.get(Pos2::new(0, 0)), Some(Cell::Dead));
        assert_eq!(board.get(Pos2::new(3, 0)), None);
        assert_eq!(board.get(Pos2::new(0, -1)), None);
        assert!(!board.is_alive(Pos2::new(-1, -1)));
    }

    #[test]
    fn alive_lists_live_cells() {
        let alive = vec![Pos2::new(2, 1), Pos2::new(1, 2)];
        let board = Board::with_alive(4, 4, &alive).expect("board");

        assert_eq!(board.alive().collect::<Vec<_>>(), alive);
        assert_eq!(board.alive_count(), 2);
    }

    #[test]
    fn display_draws_rows() {
        let board = Board::with_alive(3, 3, &[Pos2::new(1, 1)]).expect("board");

        assert_eq!(board.to_string(), "   \n █ \n   \n");
    }
}
