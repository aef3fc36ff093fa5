use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// External title tables a platform facet can be derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCatalog {
    Movies,
    TvSeries,
}

impl MediaCatalog {
    pub fn table(&self) -> &'static str {
        match self {
            MediaCatalog::Movies => "movies",
            MediaCatalog::TvSeries => "tv_series",
        }
    }

    /// Cache key under which the aggregated facet lives.
    pub fn cache_tag(&self) -> &'static str {
        match self {
            MediaCatalog::Movies => "platforms",
            MediaCatalog::TvSeries => "tv-platforms",
        }
    }

    /// JSON key carrying the per-platform title count.
    pub fn count_key(&self) -> &'static str {
        match self {
            MediaCatalog::Movies => "movie_count",
            MediaCatalog::TvSeries => "series_count",
        }
    }
}

impl std::fmt::Display for MediaCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// One streaming platform with the number of titles linking to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub platform_id: String,
    pub platform_name: String,
    pub display_name: String,
    pub count: i64,
}

impl PlatformSummary {
    pub fn new(platform_id: impl Into<String>, platform_name: impl Into<String>, count: i64) -> Self {
        let platform_name = platform_name.into();
        Self {
            platform_id: platform_id.into(),
            display_name: display_name(&platform_name),
            platform_name,
            count,
        }
    }

    /// Serializes with the catalog's count key in place of `count`.
    pub fn for_catalog(&self, catalog: MediaCatalog) -> CatalogPlatform<'_> {
        CatalogPlatform {
            summary: self,
            count_key: catalog.count_key(),
        }
    }
}

pub struct CatalogPlatform<'a> {
    summary: &'a PlatformSummary,
    count_key: &'static str,
}

impl Serialize for CatalogPlatform<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("platform_id", &self.summary.platform_id)?;
        map.serialize_entry("platform_name", &self.summary.platform_name)?;
        map.serialize_entry("display_name", &self.summary.display_name)?;
        map.serialize_entry(self.count_key, &self.summary.count)?;
        map.end()
    }
}

/// Which link of the strategy chain produced a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformSource {
    Database,
    HomepageScan,
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformListing {
    pub platforms: Vec<PlatformSummary>,
    pub source: PlatformSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

pub const STATIC_NOTICE: &str = "Live platform data is unavailable, showing default platforms";

/// Name with its first character upper-cased.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fixed facet served when every live strategy failed.
pub fn static_platforms(catalog: MediaCatalog) -> Vec<PlatformSummary> {
    let rows: &[(&str, &str, i64)] = match catalog {
        MediaCatalog::Movies => &[
            ("adjaranet", "Adjaranet", 12),
            ("imovies", "iMovies", 10),
            ("netflix", "Netflix", 8),
            ("amazon", "Amazon Prime", 6),
            ("hbo", "HBO Max", 5),
            ("disney", "Disney+", 4),
        ],
        MediaCatalog::TvSeries => &[
            ("netflix", "Netflix", 12),
            ("amazon", "Amazon Prime", 10),
            ("hbo", "HBO Max", 8),
            ("disneyplus", "Disney+", 7),
            ("paramount", "Paramount+", 6),
            ("appletv", "Apple TV+", 5),
        ],
    };

    rows.iter()
        .map(|(id, display, count)| PlatformSummary {
            platform_id: id.to_string(),
            platform_name: id.to_string(),
            display_name: display.to_string(),
            count: *count,
        })
        .collect()
}
