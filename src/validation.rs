// =============================================================================
// Input Validation — Contract checks run before the engine
// =============================================================================
//
// The scorers assume well-formed records and only guard against numeric
// degeneracies.  Anything that breaks the data contract (non-finite numbers,
// inverted OHLC bars, unordered history, missing identifiers) is rejected
// here with the offending field named, never coerced into a score.

use thiserror::Error;

use crate::types::{NewsArticle, PriceDataPoint, SecFiling, SocialMediaPost, SqueezeSignalInput};

/// A data-contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    /// Path of the offending field, e.g. `priceHistory[3].close`.
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn for_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

type Result<T> = std::result::Result<T, ValidationError>;

fn finite(value: f64, field: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::for_field(
            format!("{field} must be a finite number"),
            field,
        ))
    }
}

fn non_negative(value: f64, field: &str) -> Result<()> {
    if finite(value, field)? < 0.0 {
        return Err(ValidationError::for_field(
            format!("{field} must be non-negative"),
            field,
        ));
    }
    Ok(())
}

fn positive_timestamp(value: i64, field: &str) -> Result<()> {
    if value <= 0 {
        return Err(ValidationError::for_field("Invalid timestamp", field));
    }
    Ok(())
}

/// Ticker symbols are 1-5 uppercase ASCII letters.
pub fn validate_symbol(symbol: &str) -> Result<()> {
    let ok = (1..=5).contains(&symbol.len()) && symbol.bytes().all(|b| b.is_ascii_uppercase());
    if !ok {
        return Err(ValidationError::for_field("Invalid symbol format", "symbol"));
    }
    Ok(())
}

/// Check a single OHLCV bar. `path` prefixes reported field names.
pub fn validate_price_point(point: &PriceDataPoint, path: &str) -> Result<()> {
    positive_timestamp(point.timestamp, &format!("{path}.timestamp"))?;

    for (name, value) in [
        ("open", point.open),
        ("high", point.high),
        ("low", point.low),
        ("close", point.close),
    ] {
        let field = format!("{path}.{name}");
        if !(finite(value, &field)? > 0.0) {
            return Err(ValidationError::for_field(
                format!("{name} must be a positive number"),
                field,
            ));
        }
    }

    non_negative(point.volume, &format!("{path}.volume"))?;

    if point.high < point.low {
        return Err(ValidationError::for_field(
            "High price cannot be less than low price",
            format!("{path}.high"),
        ));
    }
    if point.open < point.low || point.open > point.high {
        return Err(ValidationError::for_field(
            "Open price must be between low and high",
            format!("{path}.open"),
        ));
    }
    if point.close < point.low || point.close > point.high {
        return Err(ValidationError::for_field(
            "Close price must be between low and high",
            format!("{path}.close"),
        ));
    }
    Ok(())
}

fn validate_filing(filing: &SecFiling, path: &str) -> Result<()> {
    if filing.filing_type.trim().is_empty() {
        return Err(ValidationError::for_field(
            "Filing type must be a non-empty string",
            format!("{path}.type"),
        ));
    }
    positive_timestamp(filing.filed_at, &format!("{path}.filedAt"))
}

fn validate_article(article: &NewsArticle, path: &str) -> Result<()> {
    if article.source.trim().is_empty() {
        return Err(ValidationError::for_field(
            "Source must be a non-empty string",
            format!("{path}.source"),
        ));
    }
    positive_timestamp(article.published_at, &format!("{path}.publishedAt"))
}

fn validate_post(post: &SocialMediaPost, path: &str) -> Result<()> {
    positive_timestamp(post.timestamp, &format!("{path}.timestamp"))
}

/// Check everything the engine assumes about a scoring bundle.
pub fn validate_input(input: &SqueezeSignalInput) -> Result<()> {
    non_negative(input.current_volume, "currentVolume")?;
    non_negative(input.market_cap, "marketCap")?;
    non_negative(input.avg_volume, "avgVolume")?;

    let pct = finite(input.short_interest_percent, "shortInterestPercent")?;
    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::for_field(
            "Short interest percent must be between 0 and 100",
            "shortInterestPercent",
        ));
    }

    for (i, point) in input.price_history.iter().enumerate() {
        validate_price_point(point, &format!("priceHistory[{i}]"))?;
    }
    if let Some(i) = input
        .price_history
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        return Err(ValidationError::for_field(
            "Price history must be in chronological order",
            format!("priceHistory[{}].timestamp", i + 1),
        ));
    }

    for (i, filing) in input.recent_filings.iter().enumerate() {
        validate_filing(filing, &format!("recentFilings[{i}]"))?;
    }
    for (i, article) in input.recent_news.iter().enumerate() {
        validate_article(article, &format!("recentNews[{i}]"))?;
    }
    for (i, post) in input.recent_social_posts.iter().enumerate() {
        validate_post(post, &format!("recentSocialPosts[{i}]"))?;
    }
    Ok(())
}
