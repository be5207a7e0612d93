use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::{Result, SilhouetteError};
use crate::grid::RgbGrid;

/// Anything that can turn a path into an RGB grid.
pub trait ImageSource {
    fn load(&self, path: &Path) -> Result<RgbGrid>;
}

/// Decodes image files from disk with the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageFileSource;

impl ImageSource for ImageFileSource {
    fn load(&self, path: &Path) -> Result<RgbGrid> {
        load_rgb_grid(path)
    }
}

/// Load an image file into an RGB grid. Alpha is discarded.
pub fn load_rgb_grid(path: &Path) -> Result<RgbGrid> {
    let img = image::open(path).map_err(|e| SilhouetteError::ImageLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    RgbGrid::from_raw(w as usize, h as usize, rgb.into_raw())
}

/// Save a grid as 8-bit RGB PNG.
pub fn save_rgb_png(grid: &RgbGrid, path: &Path) -> Result<()> {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for ((row, col), &pixel) in grid.data().indexed_iter() {
        img.put_pixel(col as u32, row as u32, Rgb(pixel));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
