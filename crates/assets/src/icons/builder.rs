use super::{ICON_SPECS, Renderer, fallback};
use crate::config::IconsConfig;
use crate::error::{AssetsError, AssetsErrorExt};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_OUTPUT_DIR: &str = "icons";

/// A file written by [`IconGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Size the file is named after. Degraded output is smaller than this.
    pub size: u32,
    pub path: PathBuf,
    pub renderer: Renderer,
}

/// Writes `icon-<size>.png` for every entry of [`ICON_SPECS`].
#[derive(Debug, Clone)]
pub struct IconGenerator {
    output_dir: PathBuf,
    renderer: Renderer,
}

/// Fluent builder for [`IconGenerator`]. Unset fields fall back to `./icons` and
/// [`Renderer::detect`].
#[derive(Debug, Default)]
pub struct IconGeneratorBuilder {
    output_dir: Option<PathBuf>,
    renderer: Option<Renderer>,
}

impl IconGeneratorBuilder {
    #[must_use = "Sets the directory receiving the icon files"]
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    #[must_use = "Overrides renderer detection"]
    pub const fn renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    #[must_use]
    pub fn build(self) -> IconGenerator {
        IconGenerator {
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            renderer: self.renderer.unwrap_or_else(Renderer::detect),
        }
    }
}

impl IconGenerator {
    #[must_use = "Creates a new icon generator builder"]
    pub fn builder() -> IconGeneratorBuilder {
        IconGeneratorBuilder::default()
    }

    /// Creates a generator from loaded configuration, resolving the renderer choice.
    #[must_use]
    pub fn from_config(config: &IconsConfig) -> Self {
        Self::builder()
            .output_dir(&config.output_dir)
            .renderer(Renderer::from_choice(config.renderer))
            .build()
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub const fn renderer(&self) -> Renderer {
        self.renderer
    }

    /// Ensures the output directory exists and writes every icon into it.
    ///
    /// 1. **Directory**: created with any missing parents; an existing directory and its
    ///    unrelated contents are left alone.
    /// 2. **Icons**: each file is replaced, never appended to. Files written before a
    ///    failure stay on disk.
    ///
    /// # Returns
    /// The written files, in [`ICON_SPECS`] order.
    ///
    /// # Errors
    /// * [`AssetsError::Io`] if the directory cannot be created (permissions, a regular
    ///   file in the way) or a file cannot be written.
    /// * [`AssetsError::Fallback`] if the placeholder icon cannot be decoded.
    /// * [`AssetsError::Image`] if a drawn icon cannot be encoded.
    pub fn generate(&self) -> Result<Vec<GeneratedIcon>, AssetsError> {
        fs::create_dir_all(&self.output_dir).context(format!(
            "Failed to create icon directory: {}",
            self.output_dir.display()
        ))?;

        // Only decoded for the degraded renderer
        let placeholder = match self.renderer {
            Renderer::Degraded => fallback::fallback_icon()?,
            #[cfg(feature = "draw")]
            Renderer::Capable => Vec::new(),
        };

        let mut written = Vec::with_capacity(ICON_SPECS.len());

        for spec in &ICON_SPECS {
            let path = self.output_dir.join(spec.file_name());

            match self.renderer {
                Renderer::Degraded => write_placeholder(&placeholder, &path)?,
                #[cfg(feature = "draw")]
                Renderer::Capable => super::canvas::save(spec, &path)?,
            }

            info!(size = spec.size, path = %path.display(), renderer = ?self.renderer, "Wrote icon");
            written.push(GeneratedIcon { size: spec.size, path, renderer: self.renderer });
        }

        Ok(written)
    }
}

fn write_placeholder(bytes: &[u8], path: &Path) -> Result<(), AssetsError> {
    fs::write(path, bytes).context(format!("Failed to write icon: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererChoice;

    #[test]
    fn builder_defaults() {
        let generator = IconGenerator::builder().build();
        assert_eq!(generator.output_dir(), Path::new("icons"));
        assert_eq!(generator.renderer(), Renderer::detect());
    }

    #[test]
    fn from_config_resolves_choice() {
        let config = IconsConfig {
            output_dir: PathBuf::from("public/icons"),
            renderer: RendererChoice::Degraded,
        };
        let generator = IconGenerator::from_config(&config);
        assert_eq!(generator.output_dir(), Path::new("public/icons"));
        assert_eq!(generator.renderer(), Renderer::Degraded);
    }
}
