use crate::error::{AssetsError, AssetsErrorExt};
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `BIKEMGR__ICONS__OUTPUT_DIR`.
pub const ENV_PREFIX: &str = "BIKEMGR";

/// Top-level configuration for the asset tooling.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub icons: IconsConfig,
}

/// Icon generator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Directory receiving `icon-<size>.png`, relative to the working directory.
    pub output_dir: PathBuf,
    pub renderer: RendererChoice,
}

/// Renderer selection as written in configuration.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererChoice {
    /// Draw when the `draw` feature is compiled in, otherwise degrade.
    #[default]
    Auto,
    Capable,
    Degraded,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("icons"), renderer: RendererChoice::Auto }
    }
}

/// Loads configuration from an optional TOML file overlaid with environment variables.
///
/// Layers, lowest priority first:
/// 1. **Defaults** of `T` (all fields are `#[serde(default)]`).
/// 2. **File**: `path`, when given. The file must then exist.
/// 3. **Environment**: variables prefixed with `BIKEMGR__`, nested with `__`
///    (`BIKEMGR__ICONS__RENDERER=degraded` maps to `icons.renderer`).
///
/// # Errors
/// Returns [`AssetsError::Config`] if the file is missing or malformed, or the merged
/// values do not match `T`.
///
/// # Example
/// ```rust
/// use bikemgr_assets::config::{AssetsConfig, load_config};
///
/// let cfg: AssetsConfig = load_config(None).unwrap_or_default();
/// assert!(cfg.icons.output_dir.ends_with("icons"));
/// ```
pub fn load_config<T>(path: Option<&Path>) -> Result<T, AssetsError>
where
    T: DeserializeOwned,
{
    build_config(path, None)
}

fn build_config<T>(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<T, AssetsError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX).separator("__").source(env),
    );

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn defaults_without_sources() -> Result<(), AssetsError> {
        let cfg: AssetsConfig = build_config(None, Some(Map::new()))?;
        assert_eq!(cfg.icons.output_dir, PathBuf::from("icons"));
        assert_eq!(cfg.icons.renderer, RendererChoice::Auto);
        Ok(())
    }

    #[test]
    fn file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("assets.toml");
        fs::write(&path, "[icons]\noutput_dir = \"public/icons\"\nrenderer = \"degraded\"\n")?;

        let cfg: AssetsConfig = build_config(Some(&path), Some(Map::new()))?;
        assert_eq!(cfg.icons.output_dir, PathBuf::from("public/icons"));
        assert_eq!(cfg.icons.renderer, RendererChoice::Degraded);
        Ok(())
    }

    #[test]
    fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("assets.toml");
        fs::write(&path, "[icons]\noutput_dir = \"from-file\"\n")?;

        let cfg: AssetsConfig = build_config(
            Some(&path),
            Some(env(&[
                ("BIKEMGR__ICONS__OUTPUT_DIR", "from-env"),
                ("BIKEMGR__ICONS__RENDERER", "capable"),
            ])),
        )?;
        assert_eq!(cfg.icons.output_dir, PathBuf::from("from-env"));
        assert_eq!(cfg.icons.renderer, RendererChoice::Capable);
        Ok(())
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result: Result<AssetsConfig, _> =
            build_config(Some(Path::new("definitely/not/here.toml")), Some(Map::new()));
        assert!(matches!(result, Err(AssetsError::Config { .. })));
    }

    #[test]
    fn unknown_renderer_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("assets.toml");
        fs::write(&path, "[icons]\nrenderer = \"vector\"\n")?;

        let result: Result<AssetsConfig, _> = build_config(Some(&path), Some(Map::new()));
        assert!(matches!(result, Err(AssetsError::Config { .. })));
        Ok(())
    }
}
