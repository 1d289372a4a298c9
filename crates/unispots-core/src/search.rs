//! Search filters and the raw search result returned by the model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Example queries offered to a user who has not typed anything yet.
pub const SUGGESTED_SEARCHES: [&str; 8] = [
    "Aesthetic cafe with outlets",
    "Late night study spot near U of T",
    "Cheap eats for group lunch",
    "Quiet library open on weekends",
    "Hidden gem for a coffee date",
    "Best thrift stores in Kensington",
    "Escape room for 4 people",
    "Chill park for a picnic",
];

/// Desired ambience. Only shapes the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Vibe {
    #[default]
    Any,
    Aesthetic,
    Chill,
    Social,
    Nature,
    Industrial,
    Cozy,
    Date,
    Group,
}

impl Vibe {
    pub const ALL: [Vibe; 9] = [
        Vibe::Any,
        Vibe::Aesthetic,
        Vibe::Chill,
        Vibe::Social,
        Vibe::Nature,
        Vibe::Industrial,
        Vibe::Cozy,
        Vibe::Date,
        Vibe::Group,
    ];

    /// Human-readable label, embedded verbatim in the prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Vibe::Any => "Any Vibe",
            Vibe::Aesthetic => "Aesthetic & Cute",
            Vibe::Chill => "Quiet & Focus",
            Vibe::Social => "Loud & Social",
            Vibe::Nature => "Green & Outdoors",
            Vibe::Industrial => "Modern & Industrial",
            Vibe::Cozy => "Warm & Cozy",
            Vibe::Date => "Date Spot",
            Vibe::Group => "Group Friendly",
        }
    }

    /// Short command-line friendly name.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Vibe::Any => "any",
            Vibe::Aesthetic => "aesthetic",
            Vibe::Chill => "chill",
            Vibe::Social => "social",
            Vibe::Nature => "nature",
            Vibe::Industrial => "industrial",
            Vibe::Cozy => "cozy",
            Vibe::Date => "date",
            Vibe::Group => "group",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Vibe {
    type Err = String;

    /// Accepts either the slug (`chill`) or the label (`Quiet & Focus`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Vibe::ALL
            .into_iter()
            .find(|v| {
                v.slug().eq_ignore_ascii_case(needle) || v.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown vibe '{s}'"))
    }
}

/// Kind of place being looked for. Only shapes the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Any,
    Cafe,
    BubbleTea,
    Library,
    Coworking,
    Restaurant,
    Bar,
    Park,
    Bookstore,
    ArtSpace,
    Mall,
    Shopping,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Any,
        Category::Cafe,
        Category::BubbleTea,
        Category::Library,
        Category::Coworking,
        Category::Restaurant,
        Category::Bar,
        Category::Park,
        Category::Bookstore,
        Category::ArtSpace,
        Category::Mall,
        Category::Shopping,
        Category::Entertainment,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Any => "Anything",
            Category::Cafe => "Cafe",
            Category::BubbleTea => "Bubble Tea Shop",
            Category::Library => "Library/Study Hall",
            Category::Coworking => "Coworking Space",
            Category::Restaurant => "Restaurant/Diner",
            Category::Bar => "Bar/Pub",
            Category::Park => "Park/Outdoor",
            Category::Bookstore => "Bookstore",
            Category::ArtSpace => "Art/Creative Space",
            Category::Mall => "Shopping Mall",
            Category::Shopping => "Thrift/Retail Store",
            Category::Entertainment => "Entertainment (Escape Room/Arcade)",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Any => "any",
            Category::Cafe => "cafe",
            Category::BubbleTea => "bubble-tea",
            Category::Library => "library",
            Category::Coworking => "coworking",
            Category::Restaurant => "restaurant",
            Category::Bar => "bar",
            Category::Park => "park",
            Category::Bookstore => "bookstore",
            Category::ArtSpace => "art-space",
            Category::Mall => "mall",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.slug().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Search radius. The token (`5km`) is what goes into the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Radius {
    Km1,
    #[default]
    Km5,
    Km10,
    Km25,
}

impl Radius {
    pub const ALL: [Radius; 4] = [Radius::Km1, Radius::Km5, Radius::Km10, Radius::Km25];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Radius::Km1 => "1km",
            Radius::Km5 => "5km",
            Radius::Km10 => "10km",
            Radius::Km25 => "25km",
        }
    }

    /// Label shown in pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Radius::Km1 => "1 km",
            Radius::Km5 => "5 km",
            Radius::Km10 => "10 km",
            Radius::Km25 => "GTA (25km)",
        }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Radius {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.split_whitespace().collect::<String>().to_ascii_lowercase();
        Radius::ALL
            .into_iter()
            .find(|r| r.as_str() == compact)
            .ok_or_else(|| format!("unknown radius '{s}' (expected one of 1km, 5km, 10km, 25km)"))
    }
}

/// Independent must-have toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub open_late: bool,
    pub wifi: bool,
    pub cheap_eats: bool,
    pub power_outlets: bool,
}

impl Features {
    /// Prompt phrases for every enabled flag, in a fixed order.
    #[must_use]
    pub fn must_haves(&self) -> Vec<&'static str> {
        [
            (self.open_late, "Must be open late"),
            (self.wifi, "Must have good Wifi"),
            (self.cheap_eats, "Affordable/Student friendly prices"),
            (self.power_outlets, "Available power outlets/charging"),
        ]
        .into_iter()
        .filter_map(|(on, phrase)| on.then_some(phrase))
        .collect()
    }
}

/// Everything the user picked for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub vibe: Vibe,
    pub category: Category,
    pub radius: Radius,
    pub features: Features,
}

impl SearchParams {
    /// One-line recap of the filters, e.g. `All Spots • Any Vibe`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let category = match self.category {
            Category::Any => "All Spots",
            other => other.label(),
        };
        format!("{category} • {}", self.vibe.label())
    }
}

/// Raw reply of one search: the model's text plus any grounding citations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub text: String,
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

/// One grounding citation attached to a model reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<MapsSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsSource {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_answer_sources: Option<PlaceAnswerSources>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceAnswerSources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_snippets: Option<Vec<ReviewSnippet>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSnippet {
    #[serde(default)]
    pub content: String,
}
