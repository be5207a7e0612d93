/// Default maximum mean-channel brightness (0-255) of a foreground pixel.
pub const DEFAULT_EDGE_THRESHOLD: u8 = 10;

/// Default minimum relative size (component pixels / image pixels) of a
/// large object. Exclusive: a component at exactly this ratio is dropped.
pub const DEFAULT_MIN_RELATIVE_SIZE: f64 = 0.01;

/// Number of channels in an RGB pixel.
pub const RGB_CHANNEL_COUNT: usize = 3;

/// Image file used when no path is given on the command line.
pub const DEFAULT_IMAGE_PATH: &str = "test.jpg";

/// Neighbor offsets `(dx, dy)`. The first four are the 4-connected
/// neighbors; all eight form the 8-connected neighborhood.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
