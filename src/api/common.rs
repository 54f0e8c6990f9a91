//! Response pieces shared by several resources.
//!
//! Field names follow the service's JSON format. Every type tolerates
//! missing fields, and lists accept a single object in place of an array.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::de;

/// Artwork URL at one size (`small`, `medium`, `large`, `extralarge`, `mega`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Image {
    pub size: String,
    #[serde(rename = "#text")]
    pub url: String,
}

/// Streaming availability. Sent as `"0"` or as `{"#text": "0", "fulltrack": "0"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Streamable {
    #[serde(rename = "#text")]
    pub text: String,
    pub fulltrack: String,
}

impl<'de> Deserialize<'de> for Streamable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(String),
            Object {
                #[serde(rename = "#text", default)]
                text: String,
                #[serde(default)]
                fulltrack: String,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(text) => Self {
                text,
                fulltrack: String::new(),
            },
            Raw::Object { text, fulltrack } => Self { text, fulltrack },
        })
    }
}

/// Minimal artist reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistRef {
    pub name: String,
    pub mbid: String,
    pub url: String,
}

/// A tag, optionally with how often it was applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub url: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub count: u64,
}

/// Plain tag list (`{"tag": [...]}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TagList {
    #[serde(deserialize_with = "de::one_or_many")]
    pub tag: Vec<Tag>,
}

/// Tag list with the entity it was requested for
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tags {
    #[serde(deserialize_with = "de::one_or_many")]
    pub tag: Vec<Tag>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TagsAttr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TagsAttr {
    pub artist: String,
    pub album: String,
    pub track: String,
    pub user: String,
    pub tag: String,
}

/// Long-form description
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Wiki {
    pub published: String,
    pub summary: String,
    pub content: String,
}

/// Pagination info carried in `@attr` of paged lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageAttr {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub page: u64,
    #[serde(rename = "perPage", deserialize_with = "de::lenient_u64")]
    pub per_page: u64,
    #[serde(rename = "totalPages", deserialize_with = "de::lenient_u64")]
    pub total_pages: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub total: u64,
    pub user: String,
    pub artist: String,
    pub tag: String,
    pub country: String,
}

/// Position in a ranked list (`@attr.rank`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankAttr {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub rank: u64,
}

/// Date range of a weekly chart, in unix time
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartRange {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub from: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub to: u64,
}

/// Available weekly charts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyChartList {
    #[serde(deserialize_with = "de::one_or_many")]
    pub chart: Vec<ChartRange>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TagsAttr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyChartListResponse {
    #[serde(rename = "weeklychartlist", deserialize_with = "de::empty_as_default")]
    pub weekly_chart_list: WeeklyChartList,
}

/// Unix timestamp with its human-readable form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Date {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub uts: u64,
    #[serde(rename = "#text")]
    pub text: String,
}

/// OpenSearch query echo
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenSearchQuery {
    pub role: String,
    #[serde(rename = "searchTerms")]
    pub search_terms: String,
    #[serde(rename = "startPage", deserialize_with = "de::lenient_u64")]
    pub start_page: u64,
}

/// Search results; `matches` holds the `albummatches`, `artistmatches` or
/// `trackmatches` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, bound(deserialize = "M: DeserializeOwned + Default"))]
pub struct SearchResults<M> {
    #[serde(rename = "opensearch:Query", deserialize_with = "de::empty_as_default")]
    pub query: OpenSearchQuery,
    #[serde(rename = "opensearch:totalResults", deserialize_with = "de::lenient_u64")]
    pub total_results: u64,
    #[serde(rename = "opensearch:startIndex", deserialize_with = "de::lenient_u64")]
    pub start_index: u64,
    #[serde(rename = "opensearch:itemsPerPage", deserialize_with = "de::lenient_u64")]
    pub items_per_page: u64,
    #[serde(
        alias = "albummatches",
        alias = "artistmatches",
        alias = "trackmatches",
        deserialize_with = "de::empty_as_default"
    )]
    pub matches: M,
}

/// Listening period for user charts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    Overall,
    Week,
    Month,
    ThreeMonths,
    SixMonths,
    Year,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::Week => "7day",
            Period::Month => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::Year => "12month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overall" => Ok(Period::Overall),
            "7day" => Ok(Period::Week),
            "1month" => Ok(Period::Month),
            "3month" => Ok(Period::ThreeMonths),
            "6month" => Ok(Period::SixMonths),
            "12month" => Ok(Period::Year),
            other => Err(format!(
                "unknown period {other:?} (expected overall, 7day, 1month, 3month, 6month or 12month)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streamable_both_shapes() {
        let flag: Streamable = serde_json::from_str(r#""1""#).unwrap();
        assert_eq!(flag.text, "1");
        let obj: Streamable = serde_json::from_str(r##"{"#text":"0","fulltrack":"1"}"##).unwrap();
        assert_eq!(obj.fulltrack, "1");
    }

    #[test]
    fn test_search_results_matches_alias() {
        #[derive(Debug, Default, Deserialize, PartialEq)]
        struct M {
            #[serde(default)]
            n: u32,
        }
        let json = r##"{
            "opensearch:totalResults": "42",
            "opensearch:startIndex": "0",
            "opensearch:itemsPerPage": "30",
            "opensearch:Query": {"#text": "", "role": "request", "searchTerms": "believe", "startPage": "1"},
            "artistmatches": {"n": 3}
        }"##;
        let results: SearchResults<M> = serde_json::from_str(json).unwrap();
        assert_eq!(results.total_results, 42);
        assert_eq!(results.query.search_terms, "believe");
        assert_eq!(results.matches.n, 3);
    }

    #[test]
    fn test_tags_single_object() {
        let json = r#"{"tag": {"name": "grunge", "url": "u", "count": 100}, "@attr": {"artist": "Soundgarden"}}"#;
        let tags: Tags = serde_json::from_str(json).unwrap();
        assert_eq!(tags.tag.len(), 1);
        assert_eq!(tags.tag[0].count, 100);
        assert_eq!(tags.attr.artist, "Soundgarden");
    }

    #[test]
    fn test_period_round_trip_strings() {
        for p in ["overall", "7day", "1month", "3month", "6month", "12month"] {
            assert_eq!(p.parse::<Period>().unwrap().as_str(), p);
        }
        assert!("fortnight".parse::<Period>().is_err());
    }
}
