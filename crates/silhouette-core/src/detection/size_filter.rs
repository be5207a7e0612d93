use ndarray::Array2;

/// Drops components whose share of the image is too small.
#[derive(Clone, Copy, Debug)]
pub struct SizeFilter {
    min_relative_size: f64,
}

impl SizeFilter {
    pub fn new(min_relative_size: f64) -> Self {
        Self { min_relative_size }
    }

    /// Pixel count per component: index `i` holds the size of label `i + 1`.
    pub fn component_sizes(labels: &Array2<u32>, component_count: u32) -> Vec<usize> {
        let mut sizes = vec![0usize; component_count as usize];
        for &label in labels.iter() {
            if label != 0 {
                sizes[label as usize - 1] += 1;
            }
        }
        sizes
    }

    /// True if a component of `size` pixels is large relative to the image.
    pub fn is_large(&self, size: usize, total_pixels: usize) -> bool {
        size as f64 / total_pixels as f64 > self.min_relative_size
    }

    /// Number of sizes that pass [`Self::is_large`].
    pub fn count_large(&self, sizes: &[usize], total_pixels: usize) -> usize {
        sizes
            .iter()
            .filter(|&&size| self.is_large(size, total_pixels))
            .count()
    }

    /// Tally the label grid and count surviving components.
    pub fn filter(&self, labels: &Array2<u32>, component_count: u32, total_pixels: usize) -> usize {
        self.filter_with_sizes(labels, component_count, total_pixels).1
    }

    /// Like [`Self::filter`], also returning the per-component sizes.
    ///
    /// With no components the tally is skipped and the sizes are empty.
    pub fn filter_with_sizes(
        &self,
        labels: &Array2<u32>,
        component_count: u32,
        total_pixels: usize,
    ) -> (Vec<usize>, usize) {
        if component_count == 0 {
            return (Vec::new(), 0);
        }
        let sizes = Self::component_sizes(labels, component_count);
        let large = self.count_large(&sizes, total_pixels);
        (sizes, large)
    }
}
