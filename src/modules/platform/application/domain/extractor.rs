use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::entities::PlatformSummary;

/// Largest facet returned by any strategy.
pub const MAX_PLATFORMS: usize = 12;

static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid regex"));

static HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://(?:www\.)?([^/?#]+)").expect("valid regex"));

static TLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:com|ge|net|org|io)$").expect("valid regex"));

/// Lower-cased platform id for a `homepage` value, either a plain URL or a
/// JSON object with a `url` member. Anything else yields `None`.
pub fn extract_platform_id(homepage: &str) -> Option<String> {
    platform_stem(homepage).map(|stem| stem.to_lowercase())
}

/// Host of the homepage without `www.` and the known TLD suffix, original
/// casing kept.
pub fn platform_stem(homepage: &str) -> Option<String> {
    let url = homepage_url(homepage)?;
    let host = HOST_RE.captures(&url)?.get(1)?.as_str();
    let stem = TLD_RE.replace(host, "");

    if stem.is_empty() {
        None
    } else {
        Some(stem.into_owned())
    }
}

fn homepage_url(homepage: &str) -> Option<String> {
    let trimmed = homepage.trim();

    if HTTP_URL_RE.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    if trimmed.starts_with('{') {
        let parsed: serde_json::Value = serde_json::from_str(trimmed).ok()?;
        let url = parsed.get("url")?.as_str()?.trim();
        if HTTP_URL_RE.is_match(url) {
            return Some(url.to_string());
        }
    }

    None
}

/// Folds raw `(homepage, titles)` pairs into a ranked facet: ids are merged
/// across spellings, single-title platforms are dropped, the rest ordered
/// by count descending and capped at [`MAX_PLATFORMS`].
pub fn aggregate_homepages<I>(rows: I) -> Vec<PlatformSummary>
where
    I: IntoIterator<Item = (String, i64)>,
{
    let mut merged: HashMap<String, (String, i64)> = HashMap::new();

    for (homepage, titles) in rows {
        let Some(stem) = platform_stem(&homepage) else {
            continue;
        };
        merged
            .entry(stem.to_lowercase())
            .and_modify(|(_, count)| *count += titles)
            .or_insert((stem, titles));
    }

    let mut platforms: Vec<PlatformSummary> = merged
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|(id, (name, count))| PlatformSummary::new(id, name, count))
        .collect();

    platforms.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.platform_id.cmp(&b.platform_id))
    });
    platforms.truncate(MAX_PLATFORMS);
    platforms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url() {
        assert_eq!(
            extract_platform_id("https://www.netflix.com/title/123"),
            Some("netflix".to_string())
        );
        assert_eq!(
            extract_platform_id("http://adjaranet.ge"),
            Some("adjaranet".to_string())
        );
        assert_eq!(
            extract_platform_id("HTTPS://WWW.HBO.COM/max"),
            Some("hbo".to_string())
        );
    }

    #[test]
    fn test_json_embedded_url() {
        assert_eq!(
            extract_platform_id(r#"{"url": "https://www.imovies.ge/movies/1"}"#),
            Some("imovies".to_string())
        );
    }

    #[test]
    fn test_malformed_input_yields_none() {
        assert_eq!(extract_platform_id(""), None);
        assert_eq!(extract_platform_id("netflix.com"), None);
        assert_eq!(extract_platform_id("{not json"), None);
        assert_eq!(extract_platform_id(r#"{"url": 42}"#), None);
        assert_eq!(extract_platform_id(r#"{"url": "ftp://x.com"}"#), None);
        assert_eq!(extract_platform_id(r#"{}"#), None);
        assert_eq!(extract_platform_id("https://"), None);
        assert_eq!(extract_platform_id("https://.com"), None);
    }

    #[test]
    fn test_only_known_suffix_is_stripped() {
        assert_eq!(
            extract_platform_id("https://tv.apple.com/show"),
            Some("tv.apple".to_string())
        );
        assert_eq!(
            extract_platform_id("https://www.crunchyroll.tv"),
            Some("crunchyroll.tv".to_string())
        );
    }

    #[test]
    fn test_stem_keeps_casing() {
        assert_eq!(
            platform_stem("https://www.iMovies.ge/x"),
            Some("iMovies".to_string())
        );
    }

    #[test]
    fn test_aggregate_merges_and_filters() {
        let rows = vec![
            ("https://www.netflix.com/title/1".to_string(), 2),
            ("https://netflix.com/title/2".to_string(), 1),
            (r#"{"url":"https://www.netflix.com/x"}"#.to_string(), 1),
            ("https://www.hbo.com/a".to_string(), 2),
            ("https://lonely.org".to_string(), 1),
            ("garbage".to_string(), 40),
        ];

        let platforms = aggregate_homepages(rows);

        let ids: Vec<&str> = platforms.iter().map(|p| p.platform_id.as_str()).collect();
        assert_eq!(ids, vec!["netflix", "hbo"]);
        assert_eq!(platforms[0].count, 4);
        assert_eq!(platforms[0].display_name, "Netflix");
    }

    #[test]
    fn test_aggregate_caps_result() {
        let rows = (0..20).map(|i| (format!("https://site{i:02}.com"), 2 + i as i64));

        let platforms = aggregate_homepages(rows);

        assert_eq!(platforms.len(), MAX_PLATFORMS);
        assert_eq!(platforms[0].platform_id, "site19");
    }
}
