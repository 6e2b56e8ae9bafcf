// main.rs - LED matrix editor
// Draw a monochrome image cell by cell and export it as binary literals.

use clap::Parser;
use eframe::egui;
use flexi_logger::Logger;
use pixel_grid::{Direction, PixelGrid, apply_pattern, patterns};

mod settings;
mod ui;

use settings::EditorSettings;

#[derive(Parser, Debug)]
#[command(version, about = "Draw LED matrix images and export them as binary literals", long_about = None)]
pub struct Args {
    /// Cells per side of the square grid
    #[arg(long, value_name = "CELLS", default_value_t = pixel_grid::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Bits per exported literal (1-64)
    #[arg(long, value_name = "BITS", default_value_t = pixel_grid::DEFAULT_CHUNK_WIDTH)]
    chunk_width: usize,

    /// Edge length of a cell in pixels
    #[arg(long, value_name = "PX", default_value_t = settings::DEFAULT_CELL_SIZE)]
    cell_size: f32,

    /// Gap around each cell in pixels
    #[arg(long, value_name = "PX", default_value_t = settings::DEFAULT_CELL_SPACING)]
    spacing: f32,
}

impl Args {
    fn settings(&self) -> pixel_grid::Result<EditorSettings> {
        pixel_grid::validate_chunk_width(self.chunk_width)?;
        Ok(EditorSettings {
            grid_size: self.size,
            chunk_width: self.chunk_width,
            cell_size: self.cell_size.max(1.0),
            spacing: self.spacing.max(0.0),
            ..Default::default()
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let _logger = match Logger::try_with_env_or_str("info, eframe=warn, egui_glow=warn, winit=warn")
        .and_then(|logger| logger.start())
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    };

    let settings = args.settings()?;
    let app = LedMatrixApp::new(settings)?;
    log::info!(
        "Starting LED Matrix editor: {0}x{0} grid, {1}-bit literals",
        app.grid.size(),
        app.settings.chunk_width
    );

    let side = app.settings.side_length();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 320.0, side + 90.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LED Matrix",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Editor session: the grid being drawn plus view state.
pub struct LedMatrixApp {
    pub grid: PixelGrid,
    pub settings: EditorSettings,
    pub selected_pattern: usize,
    pub last_export: Option<String>,
}

impl LedMatrixApp {
    pub fn new(settings: EditorSettings) -> pixel_grid::Result<Self> {
        Ok(Self {
            grid: PixelGrid::new(settings.grid_size)?,
            settings,
            selected_pattern: 0,
            last_export: None,
        })
    }
}

/// Commands the UI forwards into the grid.
pub trait MatrixEditor {
    fn toggle_cell(&mut self, row: usize, col: usize);
    fn scroll(&mut self, direction: Direction);
    fn clear_grid(&mut self);
    fn invert_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn save_to_bits(&mut self);
}

impl MatrixEditor for LedMatrixApp {
    fn toggle_cell(&mut self, row: usize, col: usize) {
        match self.grid.toggle(row, col) {
            Ok(on) => log::debug!("Cell ({row}, {col}) -> {}", if on { "on" } else { "off" }),
            Err(err) => log::warn!("Ignoring click: {err}"),
        }
    }

    fn scroll(&mut self, direction: Direction) {
        self.grid.shift(direction);
        log::debug!("{}", direction.label());
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        log::debug!("Grid cleared");
    }

    fn invert_grid(&mut self) {
        self.grid.invert();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            apply_pattern(&mut self.grid, pattern);
        }
    }

    fn save_to_bits(&mut self) {
        match self.grid.export_with(self.settings.chunk_width) {
            Ok(export) => {
                let text = export.to_string();
                print!("{text}");
                log::info!(
                    "Exported {} bits as {} literals{}",
                    export.bits().len(),
                    export.chunk_count(),
                    if export.is_padded() { " (last literal zero-padded)" } else { "" }
                );
                self.last_export = Some(text);
            }
            Err(err) => log::error!("Export failed: {err}"),
        }
    }
}
