//! # Asset Preparation
//!
//! Developer-side helpers that prepare static assets for the Bike Manager PWA.
//! Both components are one-shot and synchronous; they share nothing but the
//! error type.
//!
//! 1.  **Class extraction ([`classes`]):** collects every Tailwind utility class referenced
//!     through a double-quoted `class="..."` attribute, as input for pruning the CSS bundle.
//! 2.  **Icon generation ([`icons`]):** writes the `icon-192.png` / `icon-512.png` pair the
//!     web manifest points at. Real drawing lives behind the `draw` feature; without it the
//!     generator degrades to an embedded placeholder image.
//!
//! Configuration for the generator is loaded through [`config::load_config`].
//!
//! ## Example
//!
//! ```rust
//! use bikemgr_assets::classes::extract_classes;
//!
//! let classes = extract_classes(r#"<div class="flex p-4"><p class="p-4 text-sm"></p></div>"#);
//! assert_eq!(classes.into_iter().collect::<Vec<_>>(), ["flex", "p-4", "text-sm"]);
//! ```

pub mod classes;
pub mod config;
mod error;
pub mod icons;

pub use crate::error::{AssetsError, AssetsErrorExt};
