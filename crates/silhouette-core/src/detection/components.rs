use ndarray::Array2;
use tracing::debug;

use crate::grid::RgbGrid;

use super::classifier::PixelClassifier;
use super::config::{Connectivity, DetectionConfig};

/// Result of labeling a grid.
#[derive(Clone, Debug)]
pub struct Labeling {
    /// Component label per pixel, shape = (height, width). 0 is background;
    /// components are numbered from 1 in discovery order.
    pub labels: Array2<u32>,
    /// Number of components found.
    pub component_count: u32,
}

impl Labeling {
    /// Label at column `x`, row `y`.
    pub fn label_at(&self, x: usize, y: usize) -> u32 {
        self.labels[[y, x]]
    }

    /// Number of labeled (foreground) pixels.
    pub fn foreground_pixels(&self) -> usize {
        self.labels.iter().filter(|&&l| l != 0).count()
    }
}

/// Connected component labeling by depth-first search on an explicit stack.
#[derive(Clone, Copy, Debug)]
pub struct ComponentLabeler {
    edge_threshold: u8,
    connectivity: Connectivity,
}

impl Default for ComponentLabeler {
    fn default() -> Self {
        Self::from_config(&DetectionConfig::default())
    }
}

impl ComponentLabeler {
    pub fn new(edge_threshold: u8, connectivity: Connectivity) -> Self {
        Self {
            edge_threshold,
            connectivity,
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(config.edge_threshold, config.connectivity)
    }

    /// Label every foreground pixel reachable from an unvisited seed.
    ///
    /// Seeds are taken in row-major order. Each pixel is marked visited and
    /// labeled exactly once, so total work is O(width * height).
    pub fn label(&self, grid: &RgbGrid) -> Labeling {
        let classifier = PixelClassifier::new(grid, self.edge_threshold);
        let (h, w) = (grid.height(), grid.width());

        let mut visited = Array2::from_elem((h, w), false);
        let mut labels = Array2::<u32>::zeros((h, w));
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut component_count: u32 = 0;

        for row in 0..h {
            for col in 0..w {
                if visited[[row, col]] || !classifier.is_foreground(col, row) {
                    continue;
                }
                component_count += 1;
                self.fill(
                    &classifier,
                    (col, row),
                    component_count,
                    &mut visited,
                    &mut labels,
                    &mut stack,
                );
            }
        }

        debug!(components = component_count, "Objects identified");
        Labeling {
            labels,
            component_count,
        }
    }

    /// Flood one component from `seed`. `stack` is empty on entry and exit;
    /// it is shared between seeds only to reuse its allocation.
    fn fill(
        &self,
        classifier: &PixelClassifier<'_>,
        seed: (usize, usize),
        label: u32,
        visited: &mut Array2<bool>,
        labels: &mut Array2<u32>,
        stack: &mut Vec<(usize, usize)>,
    ) {
        let grid = classifier.grid();
        let (w, h) = (grid.width() as isize, grid.height() as isize);

        let (sx, sy) = seed;
        visited[[sy, sx]] = true;
        labels[[sy, sx]] = label;
        stack.push(seed);

        while let Some((x, y)) = stack.pop() {
            for &(dx, dy) in self.connectivity.offsets() {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if visited[[ny, nx]] || !classifier.is_foreground(nx, ny) {
                    continue;
                }
                visited[[ny, nx]] = true;
                labels[[ny, nx]] = label;
                stack.push((nx, ny));
            }
        }
    }
}
