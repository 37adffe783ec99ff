use crate::config::RendererChoice;
use tracing::debug;

/// How icons are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Draws a canvas of the exact requested size.
    #[cfg(feature = "draw")]
    Capable,
    /// Writes the embedded placeholder under every filename.
    Degraded,
}

impl Renderer {
    /// Picks the best renderer compiled into this build.
    #[cfg(feature = "draw")]
    #[must_use]
    pub const fn detect() -> Self {
        Self::Capable
    }

    /// Picks the best renderer compiled into this build.
    #[cfg(not(feature = "draw"))]
    #[must_use]
    pub const fn detect() -> Self {
        Self::Degraded
    }

    /// Resolves a configured choice against what this build supports.
    ///
    /// Asking for `capable` in a build without the `draw` feature degrades with a warning.
    #[must_use]
    pub fn from_choice(choice: RendererChoice) -> Self {
        let renderer = match choice {
            RendererChoice::Auto => Self::detect(),
            RendererChoice::Degraded => Self::Degraded,
            #[cfg(feature = "draw")]
            RendererChoice::Capable => Self::Capable,
            #[cfg(not(feature = "draw"))]
            RendererChoice::Capable => {
                tracing::warn!("Drawing support is not compiled in (feature `draw`), using placeholder icons");
                Self::Degraded
            },
        };
        debug!(?choice, ?renderer, "Selected icon renderer");
        renderer
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::detect()
    }
}
