use crate::drawing::*;

use super::*;

/// Saves an image of the grid with the found shape drawn on it.
///
/// The image format follows the extension of `output_path`.
///
/// # Arguments
/// * `grid` - The grid to draw.
/// * `shape` - The shape to highlight; nothing is highlighted when it was not found.
/// * `output_path` - The path to save the output image.
/// * `config` - The drawing configuration.
///
/// # Errors
/// Returns [`GridError::ImageError`] if the grid is empty or drawing or saving fails.
pub fn save_image_with_shape(
    grid: &Grid,
    shape: &FoundShape,
    output_path: impl AsRef<std::path::Path>,
    config: &DrawingConfig,
) -> Result<(), GridError> {
    if grid.is_empty() {
        return Err(GridError::ImageError("cannot draw an empty grid".into()));
    }
    let mut image = blank_image(grid, config)?;
    grid.draw(&mut image, config)?;
    shape.draw(&mut image, config)?;
    image
        .save(output_path.as_ref())
        .map_err(|e| GridError::ImageError(e.to_string()))
}
