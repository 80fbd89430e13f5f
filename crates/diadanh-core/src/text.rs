// crates/diadanh-core/src/text.rs

//! # Tone Normalizer
//!
//! Accent-insensitive folding for Vietnamese text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip Vietnamese tone and vowel marks for accent-insensitive comparison.
///
/// The steps are:
/// 1. Canonical decomposition (NFD), so `ộ` becomes `o` + two combining marks.
/// 2. Drop every combining mark.
/// 3. Map `đ`/`Đ` to `d`/`D`. This has to come after decomposition: `đ` is a
///    base letter with a stroke and has no decomposition of its own.
/// 4. Drop everything that is neither an ASCII word character
///    (`[A-Za-z0-9_]`) nor whitespace.
/// 5. Lower-case.
///
/// The function is total and idempotent: the output only ever contains
/// lower-case ASCII word characters and whitespace, which pass through every
/// step unchanged.
///
/// # Examples
///
/// ```rust
/// use diadanh_core::text::normalize;
///
/// assert_eq!(normalize("Đà Nẵng"), "da nang");
/// assert_eq!(normalize("Phường Ô Chợ Dừa"), "phuong o cho dua");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        let ch = match ch {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        };
        if is_word_char(ch) || ch.is_whitespace() {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// A query prepared once and matched against many field values.
///
/// Holds both comparison forms used by the engine:
/// - `lowered`: the raw query, lower-cased (the "with accents" check)
/// - `folded`: the query passed through [`normalize`] (the "without accents" check)
#[derive(Debug, Clone)]
pub struct FoldedQuery {
    lowered: String,
    folded: String,
}

impl FoldedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            lowered: query.to_lowercase(),
            folded: normalize(query),
        }
    }

    /// `true` if `value` contains the query, either as a case-insensitive raw
    /// substring or as a substring after both sides are normalized.
    pub fn matches(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.lowered) || normalize(value).contains(&self.folded)
    }

    /// `true` if any of `values` matches.
    pub fn matches_any<'v>(&self, values: impl IntoIterator<Item = &'v str>) -> bool {
        values.into_iter().any(|v| self.matches(v))
    }
}

/// One-shot form of [`FoldedQuery::matches`].
///
/// ```rust
/// use diadanh_core::text::contains_folded;
///
/// assert!(contains_folded("Phường Ô Chợ Dừa", "o cho dua"));
/// assert!(contains_folded("Hà Nội", "HÀ"));
/// assert!(!contains_folded("Hà Nội", "Huế"));
/// ```
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    FoldedQuery::new(needle).matches(haystack)
}

/// Number of characters in `s`, the unit used by every length threshold.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `true` when `s` is absent or only whitespace.
#[inline]
pub fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |v| v.trim().is_empty())
}
