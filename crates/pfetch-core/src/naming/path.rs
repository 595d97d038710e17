//! Filename hints from URL paths.

/// Extracts the last path segment from a URL for use as a filename hint.
///
/// The segment is percent-decoded. Returns `None` if the URL cannot be parsed
/// or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    let decoded = percent_decode(segment);
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// Lossy percent-decode; malformed escapes are kept as-is.
fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.push(b);
            continue;
        }
        let h = bytes.next();
        let l = bytes.next();
        match (h.and_then(hex_digit), l.and_then(hex_digit)) {
            (Some(high), Some(low)) => out.push(high << 4 | low),
            _ => {
                out.push(b'%');
                out.extend(h);
                out.extend(l);
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
