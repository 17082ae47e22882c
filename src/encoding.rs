//! Character encoding detection and transcoding for fetched guide pages.
//!
//! The HTTP `Content-Type` header wins when it names a charset. Otherwise the
//! page's own `<meta>` declaration is used, and UTF-8 is the default.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CONTENT_TYPE_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// `text/html; charset=...` in a header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i);\s*charset\s*=\s*"?([^";\s]+)"#).expect("valid regex"));

/// How many leading bytes are searched for a `<meta>` declaration.
const SNIFF_LEN: usize = 1024;

/// Charset named by a `Content-Type` header value, if encoding_rs knows it.
#[must_use]
pub fn charset_from_content_type(header: &str) -> Option<&'static Encoding> {
    let label = HEADER_CHARSET_RE.captures(header)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

/// Detect the encoding declared inside an HTML document.
///
/// Checks `<meta charset>` first, then the `http-equiv` form, within the
/// first 1024 bytes. Falls back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_META_RE]
        .into_iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)).map(|m| m.as_str().to_string()))
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode page bytes to UTF-8 using the declared encoding.
///
/// Invalid sequences become U+FFFD; this never fails.
///
/// # Examples
///
/// ```
/// use wow_shopping_lists::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><li>60x Peacebloom \x96 vendor</li>";
/// assert!(transcode_to_utf8(html, None).contains("Peacebloom \u{2013} vendor"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .unwrap_or_else(|| detect_encoding(html));

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
