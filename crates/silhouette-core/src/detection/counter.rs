use tracing::{debug, info};

use crate::error::{Result, SilhouetteError};
use crate::grid::RgbGrid;

use super::components::ComponentLabeler;
use super::config::DetectionConfig;
use super::size_filter::SizeFilter;

/// Outcome of one counting run.
#[derive(Clone, Debug, PartialEq)]
pub struct SilhouetteReport {
    pub width: usize,
    pub height: usize,
    /// Components found before size filtering.
    pub components: usize,
    /// Pixel count per component, in label order.
    pub component_sizes: Vec<usize>,
    /// Components larger than the configured relative size.
    pub large_objects: usize,
}

/// Counts large dark silhouettes on a light background.
///
/// Pipeline: classify -> label -> tally -> filter.
#[derive(Clone, Debug, Default)]
pub struct SilhouetteCounter {
    config: DetectionConfig,
}

impl SilhouetteCounter {
    /// Fails if the config does not validate.
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Number of large silhouettes in `grid`.
    pub fn count(&self, grid: &RgbGrid) -> Result<usize> {
        self.analyze(grid).map(|report| report.large_objects)
    }

    /// Run the full pipeline and keep the intermediate numbers.
    pub fn analyze(&self, grid: &RgbGrid) -> Result<SilhouetteReport> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(SilhouetteError::InvalidGrid { width, height });
        }
        debug!(width, height, "Image dimensions");

        let labeling = ComponentLabeler::from_config(&self.config).label(grid);
        let components = labeling.component_count as usize;

        let (component_sizes, large_objects) = SizeFilter::new(self.config.min_relative_size)
            .filter_with_sizes(
                &labeling.labels,
                labeling.component_count,
                grid.total_pixels(),
            );

        info!(components, large_objects, "Silhouette count complete");
        Ok(SilhouetteReport {
            width,
            height,
            components,
            component_sizes,
            large_objects,
        })
    }
}

/// Count large silhouettes with the given config.
pub fn count_silhouettes(grid: &RgbGrid, config: &DetectionConfig) -> Result<usize> {
    SilhouetteCounter::new(config.clone())?.count(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_rejected() {
        let grid = RgbGrid::filled(0, 5, [0, 0, 0]);
        let err = SilhouetteCounter::default().count(&grid).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::InvalidGrid {
                width: 0,
                height: 5
            }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DetectionConfig {
            min_relative_size: 1.5,
            ..DetectionConfig::default()
        };
        assert!(SilhouetteCounter::new(config).is_err());
    }

    #[test]
    fn test_report_for_full_foreground() {
        let grid = RgbGrid::filled(10, 10, [0, 0, 0]);
        let report = SilhouetteCounter::default().analyze(&grid).unwrap();
        assert_eq!(report.components, 1);
        assert_eq!(report.component_sizes, vec![100]);
        assert_eq!(report.large_objects, 1);
    }
}
