pub mod consts;
pub mod detection;
pub mod error;
pub mod grid;
pub mod io;

pub use detection::{count_silhouettes, DetectionConfig, SilhouetteCounter, SilhouetteReport};
pub use error::{Result, SilhouetteError};
pub use grid::RgbGrid;
