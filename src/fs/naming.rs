//! Filename generation and manipulation.

use url::Url;

use crate::config::OptionsConfig;
use crate::error::{Error, Result};

/// Derive a save filename for an image URL.
///
/// Uses the last path segment of the URL when it yields a usable name;
/// otherwise falls back to a sequential synthetic name
/// (`image_<n>.<default_extension>`). Unrecognized extensions are replaced
/// with the configured default.
pub fn filename_for_url(image_url: &str, index: usize, options: &OptionsConfig) -> String {
    let synthetic = format!("image_{}.{}", index + 1, options.default_extension);

    let Some(segment) = url_basename(image_url) else {
        return synthetic;
    };

    // Names come from remote markup; anything sanitization rejects gets
    // the synthetic name instead.
    let Ok(sanitized) = sanitize_filename(&segment) else {
        return synthetic;
    };

    normalize_extension(&sanitized, options)
}

/// Last non-empty path segment of the URL, if it looks like a filename.
fn url_basename(image_url: &str) -> Option<String> {
    let parsed = Url::parse(image_url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;

    if !segment.contains('.') || segment.starts_with('.') {
        return None;
    }

    Some(segment.to_string())
}

/// Replace an unrecognized extension with the configured default.
pub fn normalize_extension(filename: &str, options: &OptionsConfig) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            if is_recognized_extension(ext, options) {
                filename.to_string()
            } else {
                format!("{}.{}", stem, options.default_extension)
            }
        }
        _ => format!(
            "{}.{}",
            filename.trim_matches('.'),
            options.default_extension
        ),
    }
}

/// Whether an extension is accepted as-is.
///
/// Membership in the configured list wins; beyond that, any extension
/// `mime_guess` resolves to an `image/*` type also passes, so the list
/// only needs to carry unusual cases.
pub fn is_recognized_extension(ext: &str, options: &OptionsConfig) -> bool {
    if options
        .recognized_extensions
        .iter()
        .any(|r| r.eq_ignore_ascii_case(ext))
    {
        return true;
    }

    mime_guess::from_ext(ext)
        .first()
        .map(|m| m.type_() == mime_guess::mime::IMAGE)
        .unwrap_or(false)
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> OptionsConfig {
        OptionsConfig::default()
    }

    #[test]
    fn test_filename_from_url_path() {
        assert_eq!(
            filename_for_url("http://example.com/photos/abc.jpg", 0, &options()),
            "abc.jpg"
        );
    }

    #[test]
    fn test_filename_ignores_query_string() {
        assert_eq!(
            filename_for_url(
                "https://cdn.example.com/v/t51/12345_n.jpg?efg=7&ccb=1-7",
                2,
                &options()
            ),
            "12345_n.jpg"
        );
    }

    #[test]
    fn test_synthetic_when_no_extension() {
        assert_eq!(
            filename_for_url("http://example.com/photos/abc", 0, &options()),
            "image_1.jpg"
        );
        assert_eq!(
            filename_for_url("http://example.com/", 4, &options()),
            "image_5.jpg"
        );
    }

    #[test]
    fn test_synthetic_when_unparsable() {
        assert_eq!(filename_for_url("not a url", 0, &options()), "image_1.jpg");
    }

    #[test]
    fn test_synthetic_when_sanitization_rejects() {
        assert_eq!(
            filename_for_url("http://example.com/a..b.jpg", 0, &options()),
            "image_1.jpg"
        );
    }

    #[test]
    fn test_unrecognized_extension_replaced() {
        assert_eq!(
            filename_for_url("http://example.com/photo.xyz", 0, &options()),
            "photo.jpg"
        );
    }

    #[test]
    fn test_recognized_extension_case_insensitive() {
        assert_eq!(
            filename_for_url("http://example.com/photo.JPG", 0, &options()),
            "photo.JPG"
        );
    }

    #[test]
    fn test_mime_guess_extends_whitelist() {
        // bmp is not in the default list but is a known image type
        assert_eq!(
            filename_for_url("http://example.com/photo.bmp", 0, &options()),
            "photo.bmp"
        );
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.jpg").unwrap(), "normal.jpg");
        assert_eq!(sanitize_filename("file:name.jpg").unwrap(), "file_name.jpg");
    }

    #[test]
    fn test_sanitize_filename_rejections() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("path/to/file.jpg").is_err());
        assert!(sanitize_filename("file\0name.jpg").is_err());
        assert!(sanitize_filename("   ").is_err());
    }
}
