pub mod classifier;
pub mod components;
pub mod config;
pub mod counter;
pub mod size_filter;

pub use classifier::PixelClassifier;
pub use components::{ComponentLabeler, Labeling};
pub use config::{Connectivity, DetectionConfig};
pub use counter::{count_silhouettes, SilhouetteCounter, SilhouetteReport};
pub use size_filter::SizeFilter;
