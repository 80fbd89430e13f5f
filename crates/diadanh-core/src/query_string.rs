// crates/diadanh-core/src/query_string.rs

//! Mirror of the current query in a URL query string, so a lookup can be
//! shared as a link. Two parameters: `search` (free text) and `tinh`
//! (province filter).

use crate::model::SearchQuery;
use std::borrow::Cow;

pub const SEARCH_PARAM: &str = "search";
pub const PROVINCE_PARAM: &str = "tinh";

/// `search=...&tinh=...`, leaving out empty values. Empty query -> `""`.
///
/// ```rust
/// use diadanh_core::query_string::to_query_string;
/// use diadanh_core::SearchQuery;
///
/// let q = SearchQuery::new("o cho dua").with_province("Hà Nội");
/// assert_eq!(to_query_string(&q), "search=o%20cho%20dua&tinh=H%C3%A0%20N%E1%BB%99i");
/// ```
pub fn to_query_string(query: &SearchQuery) -> String {
    let mut parts = Vec::with_capacity(2);
    if !query.text.is_empty() {
        parts.push(format!("{SEARCH_PARAM}={}", urlencoding::encode(&query.text)));
    }
    if let Some(province) = query.province_filter() {
        parts.push(format!("{PROVINCE_PARAM}={}", urlencoding::encode(province)));
    }
    parts.join("&")
}

/// Reads `search` and `tinh` from a query string (leading `?` optional).
///
/// `+` decodes as a space. The first occurrence of a parameter wins,
/// undecodable values are skipped, other parameters are ignored.
pub fn parse_query_string(qs: &str) -> SearchQuery {
    let qs = qs.strip_prefix('?').unwrap_or(qs);
    let mut text: Option<String> = None;
    let mut province: Option<String> = None;

    for pair in qs.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let slot = match decode(name).as_deref() {
            Some(SEARCH_PARAM) => &mut text,
            Some(PROVINCE_PARAM) => &mut province,
            _ => continue,
        };
        if slot.is_some() {
            continue;
        }
        match decode(value) {
            Some(v) => *slot = Some(v.into_owned()),
            None => log::debug!("skipping undecodable query parameter {pair:?}"),
        }
    }

    SearchQuery {
        text: text.unwrap_or_default(),
        province: province.filter(|p| !p.is_empty()),
    }
}

fn decode(component: &str) -> Option<Cow<'_, str>> {
    if component.contains('+') {
        let spaced = component.replace('+', " ");
        return urlencoding::decode(&spaced).ok().map(|c| Cow::Owned(c.into_owned()));
    }
    urlencoding::decode(component).ok()
}
