pub mod image_io;

pub use image_io::{load_rgb_grid, save_rgb_png, ImageFileSource, ImageSource};
