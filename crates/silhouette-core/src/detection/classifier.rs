use crate::grid::RgbGrid;

/// Splits pixels into dark foreground and light background.
#[derive(Clone, Copy, Debug)]
pub struct PixelClassifier<'a> {
    grid: &'a RgbGrid,
    edge_threshold: u8,
}

impl<'a> PixelClassifier<'a> {
    pub fn new(grid: &'a RgbGrid, edge_threshold: u8) -> Self {
        Self {
            grid,
            edge_threshold,
        }
    }

    pub fn grid(&self) -> &'a RgbGrid {
        self.grid
    }

    /// Unweighted mean of the three channels, truncated.
    pub fn brightness(&self, x: usize, y: usize) -> u8 {
        let [r, g, b] = self.grid.pixel(x, y);
        ((r as u16 + g as u16 + b as u16) / 3) as u8
    }

    /// True if the pixel is at or below the edge threshold.
    ///
    /// `(x, y)` must be in bounds.
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.brightness(x, y) <= self.edge_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_truncates() {
        // (10 + 10 + 12) / 3 = 10.67 -> 10
        let grid = RgbGrid::filled(1, 1, [10, 10, 12]);
        let classifier = PixelClassifier::new(&grid, 10);
        assert_eq!(classifier.brightness(0, 0), 10);
        assert!(classifier.is_foreground(0, 0));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let grid = RgbGrid::from_raw(2, 1, vec![30, 0, 0, 33, 0, 0]).unwrap();
        let classifier = PixelClassifier::new(&grid, 10);
        // mean 10 -> foreground, mean 11 -> background
        assert!(classifier.is_foreground(0, 0));
        assert!(!classifier.is_foreground(1, 0));
    }

    #[test]
    fn test_white_never_foreground() {
        let grid = RgbGrid::filled(1, 1, [255, 255, 255]);
        assert_eq!(PixelClassifier::new(&grid, 255).brightness(0, 0), 255);
        assert!(!PixelClassifier::new(&grid, 254).is_foreground(0, 0));
        assert!(PixelClassifier::new(&grid, 255).is_foreground(0, 0));
    }
}
