// grid.rs - Pixel grid state for LED matrix editing

use crate::error::{GridError, Result};
use crate::export::{BitExport, DEFAULT_CHUNK_WIDTH, validate_chunk_width};

pub const DEFAULT_GRID_SIZE: usize = 32;   // Matches a 32x32 LED panel

pub type TRow = Vec<bool>;
pub type TGrid = Vec<TRow>;

/// Direction of a one-step wrap-around scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up    => "Scroll Up",
            Direction::Down  => "Scroll Down",
            Direction::Left  => "Scroll Left",
            Direction::Right => "Scroll Right",
        }
    }
}

/// Square matrix of on/off cells, indexed `[row][col]`.
///
/// The grid always holds exactly `size` rows of `size` columns. Accesses
/// outside `0..size` are reported as [`GridError::IndexOutOfBounds`] and
/// never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: usize,
    cells: TGrid,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: vec![vec![false; DEFAULT_GRID_SIZE]; DEFAULT_GRID_SIZE],
        }
    }
}

impl PixelGrid {
    /// Creates a `size` x `size` grid with every cell off.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![vec![false; size]; size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(GridError::IndexOutOfBounds { row, col, size: self.size });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, on: bool) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = on;
        Ok(())
    }

    /// Flips a single cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        *cell = !*cell;
        Ok(*cell)
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    pub fn fill(&mut self) {
        for row in &mut self.cells {
            row.fill(true);
        }
    }

    pub fn invert(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = !*cell;
        }
    }

    // The shifts rotate whole rows (or whole rows' contents) in place, so a
    // value written during a pass is never read again in the same pass.

    /// Row `r` takes row `r + 1`; the top row wraps to the bottom.
    pub fn shift_up(&mut self) {
        self.cells.rotate_left(1);
    }

    /// Row `r` takes row `r - 1`; the bottom row wraps to the top.
    pub fn shift_down(&mut self) {
        self.cells.rotate_right(1);
    }

    /// Column `c` takes column `c + 1`; the first column wraps to the last.
    pub fn shift_left(&mut self) {
        for row in &mut self.cells {
            row.rotate_left(1);
        }
    }

    /// Column `c` takes column `c - 1`; the last column wraps to the first.
    pub fn shift_right(&mut self) {
        for row in &mut self.cells {
            row.rotate_right(1);
        }
    }

    pub fn shift(&mut self, direction: Direction) {
        match direction {
            Direction::Up    => self.shift_up(),
            Direction::Down  => self.shift_down(),
            Direction::Left  => self.shift_left(),
            Direction::Right => self.shift_right(),
        }
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&on| on).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Row-major bits grouped into the default 16-bit chunks.
    pub fn export(&self) -> BitExport {
        BitExport::from_rows(self.rows(), self.size * self.size, DEFAULT_CHUNK_WIDTH)
    }

    pub fn export_with(&self, chunk_width: usize) -> Result<BitExport> {
        validate_chunk_width(chunk_width)?;
        Ok(BitExport::from_rows(self.rows(), self.size * self.size, chunk_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_cells(grid: &PixelGrid) -> Vec<(usize, usize)> {
        let mut lit = Vec::new();
        for (row, cells) in grid.rows().enumerate() {
            for (col, &on) in cells.iter().enumerate() {
                if on {
                    lit.push((row, col));
                }
            }
        }
        lit
    }

    #[test]
    fn new_grid_is_dark() {
        let grid = PixelGrid::new(5).unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.lit_count(), 0);
        assert_eq!(grid.rows().count(), 5);
        assert!(grid.rows().all(|row| row.len() == 5));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(PixelGrid::new(0), Err(GridError::InvalidSize { size: 0 }));
    }

    #[test]
    fn default_grid_is_32_square() {
        let grid = PixelGrid::default();
        assert_eq!(grid.size(), DEFAULT_GRID_SIZE);
        assert_eq!(grid, PixelGrid::new(32).unwrap());
    }

    #[test]
    fn toggle_flips_and_reports_state() {
        let mut grid = PixelGrid::new(3).unwrap();
        assert_eq!(grid.toggle(1, 2), Ok(true));
        assert_eq!(grid.get(1, 2), Ok(true));
        assert_eq!(grid.toggle(1, 2), Ok(false));
        assert_eq!(grid.get(1, 2), Ok(false));
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let mut grid = PixelGrid::new(3).unwrap();
        let err = GridError::IndexOutOfBounds { row: 3, col: 0, size: 3 };
        assert_eq!(grid.toggle(3, 0), Err(err));
        assert_eq!(grid.get(0, 7), Err(GridError::IndexOutOfBounds { row: 0, col: 7, size: 3 }));
        assert!(grid.set(9, 9, true).is_err());
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn shift_up_wraps_top_row_to_bottom() {
        let mut grid = PixelGrid::new(3).unwrap();
        grid.set(0, 1, true).unwrap();
        grid.set(2, 0, true).unwrap();
        grid.shift_up();
        assert_eq!(lit_cells(&grid), vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn shift_down_wraps_bottom_row_to_top() {
        let mut grid = PixelGrid::new(3).unwrap();
        grid.set(2, 2, true).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.shift_down();
        assert_eq!(lit_cells(&grid), vec![(0, 2), (1, 0)]);
    }

    #[test]
    fn shift_right_wraps_last_column_to_first() {
        let mut grid = PixelGrid::new(4).unwrap();
        grid.set(1, 3, true).unwrap();
        grid.set(1, 1, true).unwrap();
        grid.shift_right();
        assert_eq!(lit_cells(&grid), vec![(1, 0), (1, 2)]);
    }

    #[test]
    fn adjacent_lit_cells_are_not_smeared() {
        // A full row moving down must stay a single row.
        let mut grid = PixelGrid::new(4).unwrap();
        for col in 0..4 {
            grid.set(1, col, true).unwrap();
        }
        grid.shift_down();
        assert_eq!(grid.lit_count(), 4);
        assert!(grid.rows().nth(2).unwrap().iter().all(|&on| on));
    }

    #[test]
    fn shift_dispatch_matches_named_shifts() {
        let mut seeded = PixelGrid::new(5).unwrap();
        seeded.set(0, 0, true).unwrap();
        seeded.set(3, 1, true).unwrap();

        for direction in Direction::ALL {
            let mut via_enum = seeded.clone();
            via_enum.shift(direction);
            let mut named = seeded.clone();
            match direction {
                Direction::Up    => named.shift_up(),
                Direction::Down  => named.shift_down(),
                Direction::Left  => named.shift_left(),
                Direction::Right => named.shift_right(),
            }
            assert_eq!(via_enum, named, "{direction:?}");

            via_enum.shift(direction.opposite());
            assert_eq!(via_enum, seeded);
        }
    }

    #[test]
    fn fill_and_invert() {
        let mut grid = PixelGrid::new(4).unwrap();
        grid.fill();
        assert_eq!(grid.lit_count(), 16);
        grid.toggle(0, 0).unwrap();
        grid.invert();
        assert_eq!(lit_cells(&grid), vec![(0, 0)]);
    }

    #[test]
    fn single_cell_grid_shifts_onto_itself() {
        let mut grid = PixelGrid::new(1).unwrap();
        grid.toggle(0, 0).unwrap();
        for direction in Direction::ALL {
            grid.shift(direction);
            assert_eq!(grid.get(0, 0), Ok(true));
        }
    }
}
