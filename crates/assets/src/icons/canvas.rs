use super::{BACKGROUND, IconSpec};
use crate::error::{AssetsError, AssetsErrorExt};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Paints the icon: background everywhere, accent over the inset square.
pub(super) fn draw(spec: &IconSpec) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(spec.size, spec.size, Rgba(BACKGROUND));
    let (start, end) = spec.inset();
    let accent = Rgba(spec.accent);

    for y in start..=end {
        for x in start..=end {
            canvas.put_pixel(x, y, accent);
        }
    }

    canvas
}

/// Draws `spec` and saves it to `path` as PNG, replacing any existing file.
pub(super) fn save(spec: &IconSpec, path: &Path) -> Result<(), AssetsError> {
    draw(spec)
        .save_with_format(path, ImageFormat::Png)
        .context(format!("Failed to save icon: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::ICON_SPECS;

    #[test]
    fn canvas_matches_spec_size() {
        for spec in &ICON_SPECS {
            let canvas = draw(spec);
            assert_eq!(canvas.dimensions(), (spec.size, spec.size));
        }
    }

    #[test]
    fn accent_square_edges_are_inclusive() {
        let spec = ICON_SPECS[0];
        let canvas = draw(&spec);
        let (start, end) = spec.inset();

        assert_eq!(canvas.get_pixel(start, start).0, spec.accent);
        assert_eq!(canvas.get_pixel(end, end).0, spec.accent);
        assert_eq!(canvas.get_pixel(start - 1, start).0, BACKGROUND);
        assert_eq!(canvas.get_pixel(end + 1, end).0, BACKGROUND);
    }

    #[test]
    fn corners_keep_background() {
        let spec = ICON_SPECS[1];
        let canvas = draw(&spec);
        let last = spec.size - 1;

        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(canvas.get_pixel(x, y).0, BACKGROUND);
        }
    }
}
