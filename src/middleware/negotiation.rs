// src/middleware/negotiation.rs
use crate::shared::locale::{Locale, DEFAULT_LOCALE};

/// Cookie remembering the visitor's last explicit locale choice.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Pick a locale for an un-prefixed path: remembered cookie first, then the
/// best `Accept-Language` match, then the default.
pub fn negotiate_locale(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = cookie.and_then(Locale::parse) {
        return locale;
    }

    accept_language
        .and_then(best_match)
        .unwrap_or(DEFAULT_LOCALE)
}

fn best_match(header: &str) -> Option<Locale> {
    let mut ranges = parse_accept_language(header);
    // stable: equal weights keep header order
    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranges.into_iter().find_map(|(tag, _)| {
        let primary = tag.split('-').next().unwrap_or_default();
        Locale::from_segment(&primary.to_ascii_lowercase())
    })
}

/// `en-US,en;q=0.9,ka;q=0.8` → `[("en-US", 1.0), ("en", 0.9), ("ka", 0.8)]`.
/// Wildcards and ranges with `q=0` are dropped; malformed weights count as 1.
fn parse_accept_language(header: &str) -> Vec<(String, f32)> {
    header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let weight = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .next()
                .map(|q| q.trim().parse::<f32>().unwrap_or(1.0))
                .unwrap_or(1.0);

            (weight > 0.0).then(|| (tag.to_string(), weight))
        })
        .collect()
}
