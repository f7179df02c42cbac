//! Site-context text normalization.
//!
//! The same site name typed with CAPSLOCK or stray whitespace must produce
//! the same coordinates, so both context fields are normalized before
//! hashing. Case folding covers ASCII A–Z only: full Unicode case folding is
//! non-trivial and inconsistently available across languages, and consistent
//! algorithmic output wins over international support here. All other code
//! points pass through untouched.

/// Fold ASCII `A`–`Z` to `a`–`z`, leaving every other code point alone.
#[must_use]
pub fn to_lower_az(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Normalize a site-context field.
///
/// Trims leading/trailing whitespace, folds ASCII A–Z to lower case,
/// converts newlines, carriage returns, and tabs to single spaces, and
/// collapses runs of spaces to one. Idempotent:
/// `normalize_field(normalize_field(x)) == normalize_field(x)`.
#[must_use]
pub fn normalize_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;

    for c in s.trim().chars() {
        let c = match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_ascii_uppercase() => c.to_ascii_lowercase(),
            c => c,
        };

        if c == ' ' {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }

    out
}

/// Strip the scheme and path from a URL-looking string.
///
/// `"scheme://host:port/path?query"` becomes `"host:port"`. Strings without
/// a `://` (or with a bare triple slash) are returned verbatim.
#[must_use]
pub fn trim_url(s: &str) -> &str {
    let Some(scheme_end) = s.find("://") else {
        return s;
    };
    if scheme_end == 0 {
        return s;
    }

    let start = scheme_end.saturating_add(3);
    match s[start..].find('/') {
        // leave triple slash alone
        Some(0) => s,
        Some(rel_end) => &s[start..start.saturating_add(rel_end)],
        None => &s[start..],
    }
}
