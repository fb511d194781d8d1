use pulse_sdk::GroundingSource;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The three tools offered by the sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiRequestKind {
    LatestNews,
    Alternatives,
    Sentiment,
}

impl AiRequestKind {
    pub const ALL: [Self; 3] = [Self::LatestNews, Self::Alternatives, Self::Sentiment];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LatestNews => "LATEST_NEWS",
            Self::Alternatives => "ALTERNATIVES",
            Self::Sentiment => "SENTIMENT",
        }
    }

    /// Caption of the sidebar button that selects this tool.
    pub fn label(self) -> &'static str {
        match self {
            Self::LatestNews => "Check Updates",
            Self::Alternatives => "Find Books",
            Self::Sentiment => "Impact",
        }
    }

    /// Name used for tracing spans and log fields.
    pub fn operation_name(self) -> &'static str {
        match self {
            Self::LatestNews => "latest_news",
            Self::Alternatives => "alternatives",
            Self::Sentiment => "sentiment",
        }
    }

    /// Shown when the provider answers without any text.
    pub fn empty_text(self) -> &'static str {
        match self {
            Self::LatestNews => "No updates found.",
            Self::Alternatives => "No alternatives found.",
            Self::Sentiment => "Could not analyze sentiment.",
        }
    }

    /// Shown in place of an answer when the provider call fails.
    pub fn failure_text(self) -> &'static str {
        match self {
            Self::LatestNews => "Failed to fetch updates. Please try again later.",
            Self::Alternatives => "Failed to find alternatives.",
            Self::Sentiment => "Error analyzing sentiment.",
        }
    }
}

impl fmt::Display for AiRequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAiRequestKindError(String);

impl fmt::Display for ParseAiRequestKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sidebar tool '{}', expected one of latest_news, alternatives, sentiment",
            self.0
        )
    }
}

impl std::error::Error for ParseAiRequestKindError {}

impl FromStr for AiRequestKind {
    type Err = ParseAiRequestKindError;

    /// Accepts `LATEST_NEWS`, `latest_news` and `latest-news` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseAiRequestKindError(s.to_string()))
    }
}

/// Normalized outcome of a gateway call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AiResult {
    pub text: String,
    /// Citations in provider ranking order.
    pub sources: Vec<GroundingSource>,
}

impl AiResult {
    pub fn new(text: impl Into<String>, sources: Vec<GroundingSource>) -> Self {
        Self {
            text: text.into(),
            sources,
        }
    }

    /// A result carrying only text, as produced by sentiment analysis and
    /// failures.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }
}
