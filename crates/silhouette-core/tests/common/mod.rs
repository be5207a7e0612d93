use silhouette_core::grid::{Rgb, RgbGrid};

pub const DARK: Rgb = [0, 0, 0];
pub const LIGHT: Rgb = [240, 240, 240];

/// Light grid of the given size with dark filled rectangles.
///
/// Each rectangle is `(x, y, width, height)`.
pub fn grid_with_rects(
    width: usize,
    height: usize,
    rects: &[(usize, usize, usize, usize)],
) -> RgbGrid {
    RgbGrid::from_fn(width, height, |x, y| {
        let inside = rects
            .iter()
            .any(|&(rx, ry, rw, rh)| x >= rx && x < rx + rw && y >= ry && y < ry + rh);
        if inside {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Light grid with a dark disk centered at `(cx, cy)`.
pub fn grid_with_disk(width: usize, height: usize, cx: f32, cy: f32, radius: f32) -> RgbGrid {
    RgbGrid::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        if (dx * dx + dy * dy).sqrt() <= radius {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Grid from ASCII art: '#' is dark, anything else light.
pub fn grid_from_rows(rows: &[&str]) -> RgbGrid {
    let h = rows.len();
    let w = rows[0].len();
    RgbGrid::from_fn(w, h, |x, y| {
        if rows[y].as_bytes()[x] == b'#' {
            DARK
        } else {
            LIGHT
        }
    })
}
