use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One catalogued bot as returned by the directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bot {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub description: String,
    pub warn: Option<String>,
    pub msg: String,
    pub category: Vec<String>,
    pub groups: bool,
    pub inline: bool,
    /// `0` for official or unknown developers.
    pub developer_id: i64,
    pub stars: u64,
    pub votes: u64,
    pub vote: f64,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub offline: bool,
    pub photo: bool,
    /// Only derived on the by-id and search endpoints, never on category listings.
    pub photo_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum Category {
    #[serde(rename = "music")]
    Music,
    #[serde(rename = "utility")]
    Utility,
    #[serde(rename = "games")]
    Games,
    #[serde(rename = "stats")]
    Statistics,
    #[serde(rename = "poll")]
    Poll,
    #[serde(rename = "Telegram")]
    Telegram,
    #[serde(rename = "file")]
    Files,
    #[serde(rename = "entertainment")]
    Fun,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "notifications")]
    Notification,
    #[serde(rename = "manager")]
    Managing,
    #[serde(rename = "media")]
    Media,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Music,
        Category::Utility,
        Category::Games,
        Category::Statistics,
        Category::Poll,
        Category::Telegram,
        Category::Files,
        Category::Fun,
        Category::Info,
        Category::Notification,
        Category::Managing,
        Category::Media,
    ];

    /// Code sent to the API. Case-sensitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Utility => "utility",
            Category::Games => "games",
            Category::Statistics => "stats",
            Category::Poll => "poll",
            Category::Telegram => "Telegram",
            Category::Files => "file",
            Category::Fun => "entertainment",
            Category::Info => "info",
            Category::Notification => "notifications",
            Category::Managing => "manager",
            Category::Media => "media",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category code `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category filter: a known category or any raw code the API may accept.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CategoryQuery {
    Known(Category),
    Raw(String),
}

impl CategoryQuery {
    pub fn code(&self) -> &str {
        match self {
            CategoryQuery::Known(c) => c.as_str(),
            CategoryQuery::Raw(s) => s,
        }
    }
}

impl From<Category> for CategoryQuery {
    fn from(c: Category) -> Self {
        CategoryQuery::Known(c)
    }
}

impl From<String> for CategoryQuery {
    fn from(s: String) -> Self {
        CategoryQuery::Raw(s)
    }
}

impl From<&str> for CategoryQuery {
    fn from(s: &str) -> Self {
        CategoryQuery::Raw(s.to_string())
    }
}

/// Answer of the user vote endpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteOutcome {
    /// The user's cast vote.
    Voted(i64),
    /// Bot known but no vote recorded for this user.
    NotVoted,
    /// Response matched none of the known shapes.
    Unknown,
}

impl VoteOutcome {
    pub fn vote(&self) -> Option<i64> {
        match self {
            VoteOutcome::Voted(v) => Some(*v),
            _ => None,
        }
    }
}
