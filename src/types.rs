// =============================================================================
// Shared types consumed by the squeeze signal engine
// =============================================================================
//
// All records are plain values supplied fresh by the caller for a single
// scoring call.  Timestamps are milliseconds since the Unix epoch; wire names
// are camelCase to match the market-data layer that produces them.

use serde::{Deserialize, Serialize};

/// One daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDataPoint {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceDataPoint {
    /// Convenience constructor for a bar whose open/high/low all equal `close`.
    pub fn flat(timestamp: i64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }
}

/// Scoring view of a regulatory filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecFiling {
    /// Form type as published, e.g. `S-1` or `8-K`.
    #[serde(rename = "type")]
    pub filing_type: String,
    pub filed_at: i64,
    #[serde(default)]
    pub description: String,
}

/// Editorial tone of a news article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for NewsSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Scoring view of a news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub title: String,
    pub published_at: i64,
    pub source: String,
    pub sentiment: NewsSentiment,
    #[serde(default)]
    pub summary: String,
}

/// Social network a post was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Reddit,
    Twitter,
    Stocktwits,
    /// Any platform without a dedicated weight.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reddit => write!(f, "reddit"),
            Self::Twitter => write!(f, "twitter"),
            Self::Stocktwits => write!(f, "stocktwits"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Market stance expressed by a social post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for PostSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish"),
            Self::Bearish => write!(f, "bearish"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Raw interaction counts on a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Scoring view of a social media post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPost {
    pub platform: SocialPlatform,
    pub timestamp: i64,
    pub engagement: Engagement,
    pub sentiment: PostSentiment,
    pub is_verified: bool,
}

/// Everything the orchestrator needs to score one stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqueezeSignalInput {
    pub current_volume: f64,
    /// Chronological, oldest first.
    #[serde(default)]
    pub price_history: Vec<PriceDataPoint>,
    /// Percentage on a 0-100 scale.
    pub short_interest_percent: f64,
    pub market_cap: f64,
    pub avg_volume: f64,
    #[serde(default)]
    pub recent_filings: Vec<SecFiling>,
    #[serde(default)]
    pub recent_news: Vec<NewsArticle>,
    #[serde(default)]
    pub recent_social_posts: Vec<SocialMediaPost>,
}
