use std::borrow::Cow;

/// Errors raised while preparing assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetsError {
    /// Filesystem failure (directory creation, reads, writes).
    #[error("Asset I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// PNG encoding failure while saving a drawn icon.
    #[cfg(feature = "draw")]
    #[error("Image encoding failure{}: {source}", format_context(.context))]
    Image { source: image::ImageError, context: Option<Cow<'static, str>> },

    /// The embedded placeholder icon is not valid Base64.
    #[error("Fallback icon decoding failure{}: {source}", format_context(.context))]
    Fallback { source: base64::DecodeError, context: Option<Cow<'static, str>> },

    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl AssetsError {
    /// Replaces the context attached to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<Cow<'static, str>>) -> Self {
        let slot = match &mut self {
            Self::Io { context: slot, .. }
            | Self::Fallback { context: slot, .. }
            | Self::Config { context: slot, .. } => slot,
            #[cfg(feature = "draw")]
            Self::Image { context: slot, .. } => slot,
        };
        *slot = Some(context.into());
        self
    }
}

/// Adds `.context(...)` to any result whose error converts into [`AssetsError`].
pub trait AssetsErrorExt<T> {
    /// Wraps the error and attaches a human-readable context.
    ///
    /// # Errors
    /// Returns the original error converted into [`AssetsError`], carrying `context`.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, AssetsError>;
}

impl<T, E> AssetsErrorExt<T> for Result<T, E>
where
    E: Into<AssetsError>,
{
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, AssetsError> {
        self.map_err(|e| e.into().with_context(context))
    }
}

impl From<std::io::Error> for AssetsError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

#[cfg(feature = "draw")]
impl From<image::ImageError> for AssetsError {
    fn from(source: image::ImageError) -> Self {
        Self::Image { source, context: None }
    }
}

impl From<base64::DecodeError> for AssetsError {
    fn from(source: base64::DecodeError) -> Self {
        Self::Fallback { source, context: None }
    }
}

impl From<config::ConfigError> for AssetsError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
