//! Sanitizing SVG files on disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::sanitizer::{Sanitizer, decode_utf8};

/// Sanitize the SVG file at `source` and write the result to `target`, or
/// back over `source` when `target` is `None`.
///
/// Returns `true` if the sanitized content differs from the original. An
/// unchanged file is not rewritten in place. Nothing is written when
/// sanitization fails. Intermediate directories of `target` are created.
///
/// The output goes to a temporary file next to `target` that is then renamed
/// over it, so `target` never holds a partial write.
///
/// # Example
///
/// ```rust,no_run
/// use svg_sanitizer::{SvgSanitizer, sanitize_file};
///
/// let changed = sanitize_file(&SvgSanitizer::default(), "upload.svg", None).unwrap();
/// ```
pub fn sanitize_file(
    sanitizer: &impl Sanitizer,
    source: impl AsRef<Path>,
    target: Option<&Path>,
) -> Result<bool> {
    let source = source.as_ref();
    let raw = std::fs::read(source)?;
    let original = decode_utf8(&raw)?;
    let sanitized = sanitizer.sanitize(original)?;
    let changed = sanitized != original;

    let target = target.unwrap_or(source);
    if !changed && target == source {
        tracing::debug!("{} is already clean", source.display());
        return Ok(false);
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(sanitized.as_bytes())?;
    if let Ok(existing) = std::fs::metadata(target) {
        file.as_file().set_permissions(existing.permissions())?;
    }
    file.persist(target).map_err(|e| e.error)?;

    tracing::debug!("Wrote {} bytes to {}", sanitized.len(), target.display());
    Ok(changed)
}
