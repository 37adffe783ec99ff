use crate::error::{AssetsError, AssetsErrorExt};
use base64::{Engine as _, engine::general_purpose};

/// Nominal edge length of the placeholder icon.
pub const FALLBACK_ICON_SIZE: u32 = 64;

const FALLBACK_ICON_BASE64: &str = concat!(
    "iVBORw0KGgoAAAANSUhEUgAAAEAAAABACAYAAACqaXHeAAABM0lEQVR4nO3aPYrCMBQF0G/JAjtKoaKSo4Ch",
    "qGT3EL3HemfBSDLg8nKdCtwnMSJ5l7Hx61+OK8LAAAAAAAAAHg79rnQF90AWNf7AEc9y4NlXnj1+Qm5EJny+",
    "u/V0XqYji/U0kgKrv8snJjTT2H35PwHhtslz18kKwD9JviR5u8u7lFM+Ko7dFcN2cji3E7RjI/6RvmbwR6e4",
    "7Su3i32Z07IDXtS+EetuD40xP6H5m/FeXjjuB9j3d0vZGu+KevbA9bTuCs+y7L0v5mifix5nLbxvVv0Z4/hu",
    "uGJ8HvmL8sZ9ox3j7RkAAAAAAAAA8CErwwAAbqxS0wAAAABJRU5ErkJggg==",
);

/// Decodes the embedded placeholder PNG written by the degraded renderer.
///
/// # Errors
/// Returns [`AssetsError::Fallback`] if the embedded constant is not valid Base64.
pub fn fallback_icon() -> Result<Vec<u8>, AssetsError> {
    general_purpose::STANDARD
        .decode(FALLBACK_ICON_BASE64)
        .context("Decoding embedded placeholder icon")
}
