//! This module draws grids and found shapes onto images.
//!
//! # Examples
//!
//! ```rust
//! use figsearch::{bitmap, drawing::*, search, Mode};
//!
//! let grid = bitmap![[1, 1, 1], [1, 0, 1], [1, 1, 1]].unwrap();
//! let shape = search(&grid, Mode::Square);
//!
//! let config = DrawingConfig::default();
//! let mut image = blank_image(&grid, &config).unwrap();
//! grid.draw(&mut image, &config).unwrap();
//! shape.draw(&mut image, &config).unwrap();
//! assert_eq!(image.width(), 3 * config.cell_size);
//! ```

use crate::{FoundShape, Grid, GridError};
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

/// Configuration for drawing grids and shapes.
///
/// # Examples
///
/// ```
/// use figsearch::drawing::DrawingConfig;
/// use image::Rgba;
///
/// let config = DrawingConfig {
///     cell_size: 8,
///     shape_color: Rgba([255, 0, 0, 255]), // Red for the found shape
///     ..DrawingConfig::default()
/// };
/// assert_eq!(config.padding, 1);
/// ```
#[derive(Debug, Clone)]
pub struct DrawingConfig {
    /// Width and height of one cell in pixels.
    pub cell_size: u32,
    /// Gap left around each cell.
    pub padding: u32,
    /// Fill behind the cells.
    pub background_color: Rgba<u8>,
    /// Fill of set cells.
    pub set_color: Rgba<u8>,
    /// Fill of unset cells.
    pub unset_color: Rgba<u8>,
    /// Fill of cells that belong to the found shape.
    pub shape_color: Rgba<u8>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        DrawingConfig {
            cell_size: 16,
            padding: 1,
            background_color: Rgba([40, 40, 40, 255]),  // Dark gray
            set_color: Rgba([200, 60, 60, 255]),        // Red
            unset_color: Rgba([230, 230, 230, 255]),    // Light gray
            shape_color: Rgba([60, 180, 75, 255]),      // Green
        }
    }
}

/// Trait for types that can be drawn on an image.
pub trait Drawable {
    /// Draws the object on the provided image using the given configuration.
    ///
    /// # Errors
    /// Returns [`GridError::ImageError`] if the object does not fit the image.
    fn draw(&self, image: &mut RgbaImage, config: &DrawingConfig) -> Result<(), GridError>;
}

/// Creates an image just large enough for `grid`, filled with the background color.
pub fn blank_image(grid: &Grid, config: &DrawingConfig) -> Result<RgbaImage, GridError> {
    let width = pixels(grid.columns(), config)?;
    let height = pixels(grid.rows(), config)?;
    Ok(RgbaImage::from_pixel(width, height, config.background_color))
}

fn pixels(cells: usize, config: &DrawingConfig) -> Result<u32, GridError> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(config.cell_size))
        .ok_or_else(|| GridError::ImageError(format!("{cells} cells do not fit an image")))
}

fn fill_cell(
    image: &mut RgbaImage,
    row: usize,
    col: usize,
    color: Rgba<u8>,
    config: &DrawingConfig,
) -> Result<(), GridError> {
    let left = pixels(col, config)? + config.padding;
    let top = pixels(row, config)? + config.padding;
    if left >= image.width() || top >= image.height() {
        return Err(GridError::ImageError(format!(
            "cell ({row}, {col}) is outside the image"
        )));
    }
    let size = config.cell_size.saturating_sub(2 * config.padding);

    // Draw the cell if there is room left after padding
    if size > 0 {
        let rect = Rect::at(left as i32, top as i32).of_size(size, size);
        draw_filled_rect_mut(image, rect, color);
    }
    Ok(())
}

impl Drawable for Grid {
    fn draw(&self, image: &mut RgbaImage, config: &DrawingConfig) -> Result<(), GridError> {
        for (row, cells) in self.row_slices().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let color = if cell {
                    config.set_color
                } else {
                    config.unset_color
                };
                fill_cell(image, row, col, color, config)?;
            }
        }
        Ok(())
    }
}

impl Drawable for FoundShape {
    fn draw(&self, image: &mut RgbaImage, config: &DrawingConfig) -> Result<(), GridError> {
        let Some((start, end)) = self.endpoints() else {
            return Ok(());
        };
        for row in start.row..=end.row {
            for col in start.col..=end.col {
                if self.covers(row, col) {
                    fill_cell(image, row, col, config.shape_color, config)?;
                }
            }
        }
        Ok(())
    }
}
