//! Markup escaping for text and attribute values.
//!
//! Escaping is NOT idempotent: `&amp;` escaped again becomes `&amp;amp;`.
//! Callers escape raw leaf text exactly once, right before it is written
//! into the output buffer, and never escape assembled markup.

/// URL schemes allowed to reach an `href`.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Appends `raw` to `out`, replacing the five markup-significant characters.
///
/// Single left-to-right pass, so an `&` produced by a replacement is never
/// revisited. Newlines and every other character pass through untouched.
pub fn escape_into(out: &mut String, raw: &str) {
    out.reserve(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
}

/// Returns `raw` with `& < > " '` replaced by their character references.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(&mut out, raw);
    out
}

/// Escapes a value for a double- or single-quoted attribute.
///
/// Both quote characters are already covered by [`escape_text`], so the two
/// produce identical output; this entry point exists so call sites say which
/// context they are writing into.
pub fn escape_attr(raw: &str) -> String {
    escape_text(raw)
}

/// Returns an escaped, attribute-safe link target, or `None` when the value
/// must not be used as a link.
///
/// Empty input and any explicit scheme outside `http`, `https`, `mailto` and
/// `tel` are rejected. A bare host such as `example.com/me` gets `https://`
/// so the link still works in a document opened from disk; paths and
/// fragments (`/cv`, `#top`) are kept as written.
pub fn safe_href(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Browsers ignore embedded whitespace and control characters in schemes,
    // so "java\tscript:" must be judged without them.
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match explicit_scheme(&compact) {
        Some(scheme) => {
            if !ALLOWED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
                return None;
            }
            Some(escape_attr(trimmed))
        }
        None if trimmed.starts_with(&['/', '#', '?', '.'][..]) => Some(escape_attr(trimmed)),
        None => Some(escape_attr(&format!("https://{trimmed}"))),
    }
}

/// Strips a leading `https://` or `http://` for display.
pub fn display_url(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed)
}

/// The text before the first `:` when that colon precedes any `/`, `?` or `#`.
///
/// `host:port` (digits only up to the path) is not a scheme. A malformed
/// prefix such as `1:x` is still returned so the caller rejects it.
fn explicit_scheme(url: &str) -> Option<&str> {
    let end = url.find(&['/', '?', '#'][..]).unwrap_or(url.len());
    let colon = url[..end].find(':')?;
    let scheme = &url[..colon];
    let port = &url[colon + 1..end];

    let is_host_port = !port.is_empty() && port.chars().all(|c| c.is_ascii_digit());
    if is_host_port && !scheme.is_empty() {
        return None;
    }
    Some(scheme)
}
