use ndarray::Array2;

use crate::consts::RGB_CHANNEL_COUNT;
use crate::error::{Result, SilhouetteError};

/// An RGB pixel, one byte per channel.
pub type Rgb = [u8; 3];

/// Immutable RGB image grid.
///
/// Pixel data is row-major with shape = (height, width). Public accessors take
/// `(x, y)` with `x` the column and `y` the row.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbGrid {
    data: Array2<Rgb>,
}

impl RgbGrid {
    /// Wrap an existing pixel array. Zero-sized arrays are accepted here and
    /// rejected by the counter before any work is done.
    pub fn new(data: Array2<Rgb>) -> Self {
        Self { data }
    }

    /// Build a grid from interleaved RGB bytes in row-major order.
    pub fn from_raw(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let actual = bytes.len();
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGB_CHANNEL_COUNT))
            .ok_or(SilhouetteError::InvalidBuffer {
                expected: usize::MAX,
                actual,
            })?;
        if actual != expected {
            return Err(SilhouetteError::InvalidBuffer { expected, actual });
        }

        let pixels: Vec<Rgb> = bytes
            .chunks_exact(RGB_CHANNEL_COUNT)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        let data = Array2::from_shape_vec((height, width), pixels)
            .map_err(|_| SilhouetteError::InvalidBuffer { expected, actual })?;
        Ok(Self { data })
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let data = Array2::from_shape_fn((height, width), |(row, col)| f(col, row));
        Self { data }
    }

    /// A grid where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            data: Array2::from_elem((height, width), color),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Total number of pixels (`width * height`).
    pub fn total_pixels(&self) -> usize {
        self.data.len()
    }

    /// Color at column `x`, row `y`. Panics when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.data[[y, x]]
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Underlying pixel array, shape = (height, width).
    pub fn data(&self) -> &Array2<Rgb> {
        &self.data
    }

    /// Grid from ASCII art: '#' is black, anything else white.
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: &[&str]) -> Self {
        let w = rows.first().map_or(0, |r| r.len());
        Self::from_fn(w, rows.len(), |x, y| {
            if rows[y].as_bytes()[x] == b'#' {
                [0, 0, 0]
            } else {
                [255, 255, 255]
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_layout_is_row_major() {
        // 2x1 image: red then blue.
        let grid = RgbGrid::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.pixel(0, 0), [255, 0, 0]);
        assert_eq!(grid.pixel(1, 0), [0, 0, 255]);
    }

    #[test]
    fn test_from_raw_rejects_short_buffer() {
        let err = RgbGrid::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::InvalidBuffer {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_from_raw_overflowing_dimensions() {
        let err = RgbGrid::from_raw(usize::MAX, 2, vec![0; 6]).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::InvalidBuffer {
                expected: usize::MAX,
                actual: 6
            }
        ));
    }

    #[test]
    fn test_from_ascii() {
        let grid = RgbGrid::from_ascii(&["#.", ".#"]);
        assert_eq!(grid.pixel(0, 0), [0, 0, 0]);
        assert_eq!(grid.pixel(1, 0), [255, 255, 255]);
        assert_eq!(grid.pixel(1, 1), [0, 0, 0]);
    }

    #[test]
    fn test_from_fn_uses_x_as_column() {
        let grid = RgbGrid::from_fn(3, 2, |x, y| [x as u8, y as u8, 0]);
        assert_eq!(grid.pixel(2, 1), [2, 1, 0]);
        assert_eq!(grid.data().dim(), (2, 3));
        assert!(grid.contains(2, 1));
        assert!(!grid.contains(3, 1));
    }
}
