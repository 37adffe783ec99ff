use anyhow::{Context, Result};
use bikemgr_assets::config::IconsConfig;
use bikemgr_assets::icons::IconGenerator;
use tracing::debug;

/// Generates the PWA icons described by `config`.
///
/// The renderer is resolved once here; nothing is printed to stdout on success.
///
/// # Errors
/// Returns an error if the output directory cannot be created or an icon cannot be written.
pub fn generate_icons(config: &IconsConfig) -> Result<()> {
    let generator = IconGenerator::from_config(config);

    let written = generator.generate().with_context(|| {
        format!("Failed to generate icons in {}", generator.output_dir().display())
    })?;

    debug!(count = written.len(), renderer = ?generator.renderer(), "Icon generation finished");
    Ok(())
}
