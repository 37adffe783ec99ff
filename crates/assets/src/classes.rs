//! # Class Extraction
//!
//! A textual scan for utility classes referenced from markup. Only double-quoted
//! `class="..."` attributes are recognised; single-quoted attributes, templating syntax and
//! classes composed at runtime are invisible to it. The scan is literal, so `data-class="x"`
//! contributes `x` as well.
//!
//! Tokens are separated by Unicode whitespace and by the ASCII information separators
//! `U+001C..=U+001F`. Other control characters stay inside tokens.

use crate::error::{AssetsError, AssetsErrorExt};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern
    #[allow(clippy::expect_used)]
    Regex::new(r#"class="([^"]*)""#).expect("Invalid class attribute pattern")
});

/// Returns every distinct class token referenced by a `class="..."` attribute in `html`.
///
/// Attribute values are split on runs of separators; empty values contribute nothing.
/// Any text is accepted and the result is empty when nothing matches.
///
/// # Example
/// ```rust
/// use bikemgr_assets::classes::extract_classes;
///
/// let classes = extract_classes(r#"<div class="a b"><p class="b c"></p></div>"#);
/// assert_eq!(classes.len(), 3);
/// assert!(extract_classes("<div class='a b'>").is_empty());
/// ```
#[must_use]
pub fn extract_classes(html: &str) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();

    for captures in CLASS_ATTRIBUTE.captures_iter(html) {
        let Some(value) = captures.get(1) else { continue };
        classes.extend(
            value.as_str().split(is_separator).filter(|token| !token.is_empty()).map(str::to_owned),
        );
    }

    classes
}

/// Unicode `White_Space` plus the file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Classes collected from a set of markup files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassReport {
    /// Files that were scanned, in the order given.
    pub files: Vec<PathBuf>,
    /// Union of the classes found across all files.
    pub classes: BTreeSet<String>,
}

impl ClassReport {
    /// Number of distinct classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Reads every file in `paths` as UTF-8 text and unions their classes.
///
/// # Errors
/// Returns [`AssetsError::Io`] naming the offending path if a file cannot be read
/// or is not valid UTF-8.
pub fn scan_files<I, P>(paths: I) -> Result<ClassReport, AssetsError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = ClassReport::default();

    for path in paths {
        let path = path.as_ref();
        let html = fs::read_to_string(path)
            .context(format!("Failed to read markup: {}", path.display()))?;

        let found = extract_classes(&html);
        debug!(path = %path.display(), classes = found.len(), "Scanned markup");

        report.classes.extend(found);
        report.files.push(path.to_path_buf());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn nested_elements_are_unioned() {
        let classes = extract_classes(r#"<div class="a b"><p class="b c"></p></div>"#);
        assert_eq!(classes, set(&["a", "b", "c"]));
    }

    #[test]
    fn single_quotes_are_not_matched() {
        assert!(extract_classes("<div class='a b'>").is_empty());
    }

    #[test]
    fn blank_values_contribute_nothing() {
        assert!(extract_classes(r#"<i class=""></i><b class="  	 "></b>"#).is_empty());
    }

    #[test]
    fn whitespace_runs_and_newlines_split_tokens() {
        let html = "<div class=\"  grid\n\tgap-2   md:grid-cols-3 \"></div>";
        assert_eq!(extract_classes(html), set(&["gap-2", "grid", "md:grid-cols-3"]));
    }

    #[test]
    fn information_separators_split_tokens() {
        let html = "<div class=\"a\u{1f}b\u{1c}c\u{a0}d\"></div>";
        assert_eq!(extract_classes(html), set(&["a", "b", "c", "d"]));
    }

    #[test]
    fn other_control_characters_stay_inside_tokens() {
        let html = "<div class=\"a\u{1b}b\"></div>";
        assert_eq!(extract_classes(html), set(&["a\u{1b}b"]));
    }

    #[test]
    fn scan_is_textual() {
        let html = r#"<div data-class="x" class = "y"></div>"#;
        assert_eq!(extract_classes(html), set(&["x"]));
    }

    #[test]
    fn template_syntax_is_taken_literally() {
        let html = r#"<div class="btn ${active ? 'on' : 'off'}"></div>"#;
        assert_eq!(extract_classes(html), set(&["${active", "'off'}", "'on'", ":", "?", "btn"]));
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert!(extract_classes("no markup at all").is_empty());
        assert!(extract_classes("").is_empty());
    }
}
