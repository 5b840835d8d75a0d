use crate::{Board, Pos2};
use rayon::prelude::*;

/// Live-neighbour counts for every cell of a board
///
/// Laid out like the [`Board`] it was counted from. Only interior entries are
/// ever written; border entries stay zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    width: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            counts: vec![0; width * height],
        }
    }

    /// The count at `pos`, or [`None`] if `pos` is outside the grid
    pub fn get(&self, pos: Pos2) -> Option<u8> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x >= self.width {
            return None;
        }
        self.counts.get(y * self.width + x).copied()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    /// Overwrites every interior count from the current state of `board`
    pub fn recount(&mut self, board: &Board) {
        self.check_shape(board);
        let width = self.width;
        for (y, row) in self.counts.chunks_mut(width).enumerate() {
            count_row(board, y, row);
        }
    }

    /// Same as [`NeighborCounts::recount`], but with one rayon task per row
    ///
    /// `board` is only borrowed immutably, so every row reads the same
    /// generation no matter how the rows are scheduled.
    pub fn recount_parallel(&mut self, board: &Board) {
        self.check_shape(board);
        let width = self.width;
        self.counts
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| count_row(board, y, row));
    }

    fn check_shape(&self, board: &Board) {
        debug_assert_eq!(self.width, board.width(), "count grid width mismatch");
        debug_assert_eq!(
            self.counts.len(),
            board.width() * board.height(),
            "count grid height mismatch"
        );
    }
}

/// Counts the interior cells of row `y`, leaving border entries untouched
fn count_row(board: &Board, y: usize, row: &mut [u8]) {
    if y == 0 || y + 1 >= board.height() {
        return;
    }
    let last = row.len() - 1;
    for (x, count) in row.iter_mut().enumerate().take(last).skip(1) {
        let center = Pos2::new(x as i32, y as i32);
        *count = center.moore().filter(|&pos| board.is_alive(pos)).count() as u8;
    }
}

/// Counts the live neighbours of every interior cell of `board`
pub fn count_neighbors(board: &Board) -> NeighborCounts {
    let mut counts = NeighborCounts::new(board.width(), board.height());
    counts.recount(board);
    counts
}
