use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_EDGE_THRESHOLD, DEFAULT_MIN_RELATIVE_SIZE, NEIGHBOR_OFFSETS};
use crate::error::{Result, SilhouetteError};

/// Which neighbors join two foreground pixels into one component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Up, down, left, right.
    Four,
    /// Four-way plus the diagonals.
    #[default]
    Eight,
}

impl Connectivity {
    /// Neighbor offsets `(dx, dy)` for this connectivity.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &NEIGHBOR_OFFSETS[..4],
            Connectivity::Eight => &NEIGHBOR_OFFSETS,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Four => write!(f, "4-connected"),
            Connectivity::Eight => write!(f, "8-connected"),
        }
    }
}

/// Tunables for silhouette counting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectionConfig {
    /// Maximum mean-channel brightness (0-255) classified as foreground.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: u8,
    /// A component counts as large when `size / total_pixels` is strictly
    /// greater than this ratio.
    #[serde(default = "default_min_relative_size")]
    pub min_relative_size: f64,
    /// Neighborhood used by the labeler.
    #[serde(default)]
    pub connectivity: Connectivity,
}

fn default_edge_threshold() -> u8 {
    DEFAULT_EDGE_THRESHOLD
}
fn default_min_relative_size() -> f64 {
    DEFAULT_MIN_RELATIVE_SIZE
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            min_relative_size: DEFAULT_MIN_RELATIVE_SIZE,
            connectivity: Connectivity::default(),
        }
    }
}

impl DetectionConfig {
    /// Reject ratios that cannot be compared against a relative size.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.min_relative_size;
        if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
            return Err(SilhouetteError::InvalidConfig(format!(
                "min_relative_size must be in [0, 1), got {ratio}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectionConfig::default();
        assert_eq!(config.edge_threshold, 10);
        assert_eq!(config.min_relative_size, 0.01);
        assert_eq!(config.connectivity, Connectivity::Eight);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_offsets_len() {
        assert_eq!(Connectivity::Four.offsets().len(), 4);
        assert_eq!(Connectivity::Eight.offsets().len(), 8);
        for &(dx, dy) in Connectivity::Four.offsets() {
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        for ratio in [-0.1, 1.0, 2.5, f64::NAN, f64::INFINITY] {
            let config = DetectionConfig {
                min_relative_size: ratio,
                ..DetectionConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(SilhouetteError::InvalidConfig(_))),
                "ratio {ratio} accepted"
            );
        }
    }
}
