use crate::PixelGrid;

/// A preset image, described as a predicate over `(row, col, size)`.
pub struct Pattern {
    pub name: &'static str,
    pub lit: fn(usize, usize, usize) -> bool,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Fill All",
        lit: |_, _, _| true,
    },
    Pattern {
        name: "Checkerboard",
        lit: |row, col, _| (row + col) % 2 == 0,
    },
    Pattern {
        name: "Border",
        lit: |row, col, size| row == 0 || col == 0 || row == size - 1 || col == size - 1,
    },
    Pattern {
        name: "Diagonal",
        lit: |row, col, _| row == col,
    },
];

pub fn apply_pattern(grid: &mut PixelGrid, pattern: &Pattern) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            // Coordinates come from the grid's own size.
            let _ = grid.set(row, col, (pattern.lit)(row, col, size));
        }
    }
    log::debug!("Applied pattern '{}' to {}x{} grid", pattern.name, size, size);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static Pattern {
        PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn patterns_replace_existing_content() {
        let mut grid = PixelGrid::new(4).unwrap();
        grid.fill();
        apply_pattern(&mut grid, pattern("Diagonal"));
        assert_eq!(grid.lit_count(), 4);
        assert_eq!(grid.get(2, 2), Ok(true));
        assert_eq!(grid.get(0, 1), Ok(false));
    }

    #[test]
    fn checkerboard_lights_half() {
        let mut grid = PixelGrid::new(6).unwrap();
        apply_pattern(&mut grid, pattern("Checkerboard"));
        assert_eq!(grid.lit_count(), 18);
        assert_eq!(grid.get(0, 0), Ok(true));
    }

    #[test]
    fn border_on_tiny_grids() {
        let mut grid = PixelGrid::new(1).unwrap();
        apply_pattern(&mut grid, pattern("Border"));
        assert_eq!(grid.lit_count(), 1);

        let mut grid = PixelGrid::new(5).unwrap();
        apply_pattern(&mut grid, pattern("Border"));
        assert_eq!(grid.lit_count(), 16);
    }
}
