// settings.rs - Editor layout and colors

use egui::Color32;

pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const DEFAULT_CELL_SPACING: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub grid_size: usize,
    pub chunk_width: usize,
    pub cell_size: f32,      // Edge length of a drawn cell
    pub spacing: f32,        // Gap on each side of a cell
    pub on_color: Color32,
    pub off_color: Color32,
    pub background: Color32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: pixel_grid::DEFAULT_GRID_SIZE,
            chunk_width: pixel_grid::DEFAULT_CHUNK_WIDTH,
            cell_size: DEFAULT_CELL_SIZE,
            spacing: DEFAULT_CELL_SPACING,
            on_color: Color32::BLUE,
            off_color: Color32::WHITE,
            background: Color32::GRAY,
        }
    }
}

impl EditorSettings {
    /// Distance between the origins of two neighbouring cells.
    pub fn pitch(&self) -> f32 {
        self.cell_size + 2.0 * self.spacing
    }

    /// Edge length of the whole canvas in pixels.
    pub fn side_length(&self) -> f32 {
        self.grid_size as f32 * self.pitch() + 1.0
    }

    /// Offset of cell `index` (row or column) from the canvas origin.
    pub fn cell_offset(&self, index: usize) -> f32 {
        self.spacing + index as f32 * self.pitch()
    }

    /// Maps a canvas-local position to the cell under it.
    ///
    /// Positions on the gaps between cells or outside the canvas hit nothing.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = self.axis_index(x)?;
        let row = self.axis_index(y)?;
        Some((row, col))
    }

    fn axis_index(&self, offset: f32) -> Option<usize> {
        if offset < 0.0 {
            return None;
        }
        let index = (offset / self.pitch()).floor() as usize;
        if index >= self.grid_size {
            return None;
        }
        let within = offset - index as f32 * self.pitch();
        (within >= self.spacing && within < self.spacing + self.cell_size).then_some(index)
    }
}
