//! HTML escaping.

use serde::Serialize;
use std::fmt;

/// Escapes `& < > " '` for safe insertion into HTML text or attribute values.
///
/// | Char | Entity |
/// |------|--------|
/// | `&` | `&amp;` |
/// | `<` | `&lt;` |
/// | `>` | `&gt;` |
/// | `"` | `&quot;` |
/// | `'` | `&#39;` |
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a resource reference, rejecting executable schemes.
///
/// Only `http`, `https` and relative references (no scheme) are kept; any
/// other scheme (`javascript:`, `data:`, `vbscript:`, ...) yields `None`.
///
/// ```
/// use nftlib::rendering::safe_url;
///
/// assert!(safe_url("images/aube.png").is_some());
/// assert!(safe_url("javascript:alert(1)").is_none());
/// ```
#[must_use]
pub fn safe_url(raw: &str) -> Option<Escaped> {
    let url = raw.trim();
    has_allowed_scheme(url).then(|| Escaped::new(url))
}

fn has_allowed_scheme(url: &str) -> bool {
    // Browsers drop tabs and newlines inside a scheme ("java\tscript:").
    let compact: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let end = compact.find(['/', '?', '#']).unwrap_or(compact.len());
    match compact[..end].split_once(':') {
        None => true,
        Some((scheme, _)) => {
            scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
        },
    }
}

/// Text that has already been HTML-escaped.
///
/// The only constructor escapes its input, so a value of this type is always
/// safe to interpolate into markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Escaped(String);

impl Escaped {
    /// Escapes raw text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    /// Returns the escaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the wrapper and returns the escaped text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
