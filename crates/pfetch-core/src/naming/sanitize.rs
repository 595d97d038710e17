//! Filesystem-safe name tokens for destination folders and filenames.

/// Maximum length of a sanitized folder name or filename.
pub const NAME_MAX_LEN: usize = 45;

/// Substituted when sanitizing leaves nothing usable.
pub const FALLBACK_NAME: &str = "no_name";

/// Extension used when neither the candidate nor the caller provides one.
pub const DEFAULT_EXTENSION: &str = "bin";

/// Longest extension kept by [`sanitize_filename`].
const EXT_MAX_LEN: usize = 8;

/// Sanitizes arbitrary human text (an entity name, a link title) into a
/// token of at most [`NAME_MAX_LEN`] characters from `[a-z0-9_]`.
///
/// - Replaces `&` with `and`
/// - Replaces every character outside ASCII `[A-Za-z0-9_]` with `_`
/// - Collapses consecutive underscores
/// - Lower-cases, truncates, then strips a trailing non-alphanumeric character
/// - Falls back to [`FALLBACK_NAME`] when nothing is left
///
/// Applying it twice yields the same result as applying it once.
pub fn sanitize_name(text: &str) -> String {
    sanitize_name_with_limit(text, NAME_MAX_LEN)
}

/// Like [`sanitize_name`] with a caller-chosen length cap. The cap is never
/// lower than the fallback name itself.
pub fn sanitize_name_with_limit(text: &str, limit: usize) -> String {
    let limit = limit.max(FALLBACK_NAME.len());

    let mut out = String::with_capacity(text.len() + 8);
    let mut prev_underscore = false;

    for c in text.replace('&', "and").chars() {
        let replacement = if c.is_ascii_alphanumeric() || c == '_' {
            c.to_ascii_lowercase()
        } else {
            '_'
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    // Only ASCII is pushed above, so any byte index is a char boundary.
    out.truncate(limit);
    if out.ends_with(|c: char| !c.is_ascii_alphanumeric()) {
        out.pop();
    }

    if out.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        out
    }
}

/// Sanitizes a candidate filename into `stem.ext`, at most [`NAME_MAX_LEN`]
/// characters in total.
///
/// The extension is taken from the last `.` of `text` (lower-case ASCII
/// alphanumerics, at most 8 characters); when missing, `default_ext` is used,
/// then [`DEFAULT_EXTENSION`]. The stem goes through [`sanitize_name_with_limit`].
pub fn sanitize_filename(text: &str, default_ext: &str) -> String {
    let (stem, ext) = match text.rsplit_once('.') {
        Some((stem, ext)) => (stem, sanitize_extension(ext)),
        None => (text, None),
    };
    let ext = ext
        .or_else(|| sanitize_extension(default_ext))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let stem = sanitize_name_with_limit(stem, NAME_MAX_LEN - 1 - ext.len());
    format!("{stem}.{ext}")
}

fn sanitize_extension(ext: &str) -> Option<String> {
    let ext: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(EXT_MAX_LEN)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
