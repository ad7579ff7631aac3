//! # svg_sanitizer
//!
//! An allow-list SVG sanitizer for untrusted uploads.
//!
//! ## Overview
//!
//! `svg_sanitizer` parses SVG markup into a tree, removes every element and
//! attribute its [`Policy`] does not allow, and serializes the result. It
//! removes scripts, event handlers (`on*`), `javascript:` and other unsafe
//! URIs, external references, comments and processing instructions. Shapes,
//! text, gradients and filters are kept.
//!
//! Malformed XML and input over the configured depth or size limits are
//! rejected with an error. Policy violations are never errors: the offending
//! content is removed. Output is all-or-nothing.
//!
//! ## Quick start
//!
//! ```rust
//! use svg_sanitizer::SvgSanitizerBuilder;
//!
//! let sanitizer = SvgSanitizerBuilder::new()
//!     .max_tree_depth(128)
//!     .build();
//!
//! let clean = sanitizer
//!     .sanitize(r#"<svg><a href="javascript:alert(1)">x</a></svg>"#)
//!     .unwrap();
//! assert_eq!(clean, "<svg><a>x</a></svg>");
//! ```
//!
//! A single [`SvgSanitizer`] can be shared across threads; clones share the
//! same [`Policy`].

pub mod config;
pub mod error;
pub mod file;
pub mod parser;
pub mod policy;
pub mod sanitizer;
pub mod serializer;
pub mod tree;

pub use config::SvgSanitizerBuilder;
pub use error::{Result, SvgSanitizerError};
pub use file::sanitize_file;
pub use parser::{Limits, parse_document};
pub use policy::Policy;
pub use sanitizer::{SanitizeReport, Sanitizer, SvgSanitizer};
pub use serializer::serialize_document;
pub use tree::{Attribute, Document, Element, Node};

use std::sync::{LazyLock, OnceLock};

// Global state for the optional singleton pattern
static GLOBAL: OnceLock<SvgSanitizer> = OnceLock::new();

static DEFAULT: LazyLock<SvgSanitizer> = LazyLock::new(SvgSanitizer::default);

/// Install the process-wide [`SvgSanitizer`].
///
/// Call once at application startup. Afterwards any part of the application
/// can reach it through [`global()`], and [`sanitize()`] uses it.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(sanitizer: SvgSanitizer) -> &'static SvgSanitizer {
    GLOBAL
        .set(sanitizer)
        .unwrap_or_else(|_| panic!("Global SvgSanitizer already initialized"));
    global().unwrap_or_else(|| unreachable!("global sanitizer was just set"))
}

/// Retrieve the process-wide [`SvgSanitizer`] registered with [`init()`].
///
/// Returns `None` if [`init()`] has not been called.
pub fn global() -> Option<&'static SvgSanitizer> {
    GLOBAL.get()
}

/// Sanitize `svg` with the global sanitizer, or with the default policy if
/// [`init()`] has not been called.
pub fn sanitize(svg: &str) -> Result<String> {
    global().unwrap_or_else(|| &*DEFAULT).sanitize(svg)
}
