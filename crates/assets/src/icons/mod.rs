//! # Icon Generation
//!
//! Writes the square PWA icons referenced by the web manifest into an output directory.
//!
//! The work is split by [`Renderer`], chosen once at startup:
//!
//! * **Capable** (feature `draw`): a `size × size` RGBA canvas in [`BACKGROUND`] with the
//!   central 70% filled in the size's accent colour, saved as PNG.
//! * **Degraded**: the embedded placeholder PNG ([`fallback_icon`]) written verbatim under
//!   every filename. The placeholder is 64×64 regardless of the name it is saved under.
//!
//! ## Example
//!
//! ```rust
//! use bikemgr_assets::icons::{IconGenerator, Renderer};
//!
//! # let tmp = tempfile::tempdir().unwrap();
//! let written = IconGenerator::builder()
//!     .output_dir(tmp.path().join("icons"))
//!     .renderer(Renderer::Degraded)
//!     .build()
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(written.len(), 2);
//! assert!(written.iter().all(|icon| icon.path.exists()));
//! ```

mod builder;
#[cfg(feature = "draw")]
mod canvas;
mod fallback;
mod renderer;

pub use builder::{GeneratedIcon, IconGenerator, IconGeneratorBuilder};
pub use fallback::{FALLBACK_ICON_SIZE, fallback_icon};
pub use renderer::Renderer;

/// An RGBA colour.
pub type Rgba = [u8; 4];

/// Canvas fill shared by every icon.
pub const BACKGROUND: Rgba = [15, 76, 129, 255];

/// Icons produced on every run, in generation order.
pub const ICON_SPECS: [IconSpec; 2] = [
    IconSpec { size: 192, accent: [59, 130, 246, 255] },
    IconSpec { size: 512, accent: [37, 99, 235, 255] },
];

/// One icon of the manifest set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSpec {
    /// Edge length in pixels.
    pub size: u32,
    /// Fill of the inner square.
    pub accent: Rgba,
}

impl IconSpec {
    /// File name inside the output directory, e.g. `icon-192.png`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("icon-{}.png", self.size)
    }

    /// Inclusive pixel bounds of the accent square: 15% to 85% of the edge, floored.
    #[must_use]
    pub const fn inset(&self) -> (u32, u32) {
        (self.size * 15 / 100, self.size * 85 / 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_size() {
        let names: Vec<String> = ICON_SPECS.iter().map(IconSpec::file_name).collect();
        assert_eq!(names, ["icon-192.png", "icon-512.png"]);
    }

    #[test]
    fn inset_covers_central_seventy_percent() {
        assert_eq!(ICON_SPECS[0].inset(), (28, 163));
        assert_eq!(ICON_SPECS[1].inset(), (76, 435));
    }

    #[test]
    fn accents_differ_from_background() {
        assert!(ICON_SPECS.iter().all(|spec| spec.accent != BACKGROUND));
    }
}
