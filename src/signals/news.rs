// =============================================================================
// News Scorer — Source- and sentiment-weighted coverage
// =============================================================================
//
// Every article is worth 5 points, scaled by how reputable the outlet is, by
// its tone, and by a 7-day linear decay.

use crate::types::{NewsArticle, NewsSentiment};

use super::decay::{age_days, clamp_score, linear_decay};

/// Ceiling of [`news_score`].
pub const NEWS_SCORE_MAX: f64 = 15.0;

/// Freshness window for articles, in days.
pub const NEWS_WINDOW_DAYS: f64 = 7.0;

const ARTICLE_BASE_SCORE: f64 = 5.0;

/// Weight applied to outlets without a dedicated entry.
pub const DEFAULT_SOURCE_WEIGHT: f64 = 1.0;

/// Outlet weight by exact, case-sensitive name.
pub fn source_weight(source: &str) -> f64 {
    match source {
        "Bloomberg" | "Reuters" | "Wall Street Journal" => 1.5,
        "CNBC" | "MarketWatch" => 1.3,
        "Seeking Alpha" | "Benzinga" => 1.2,
        "Yahoo Finance" => 1.1,
        _ => DEFAULT_SOURCE_WEIGHT,
    }
}

impl NewsSentiment {
    /// Multiplier applied to an article of this tone.
    pub fn weight(self) -> f64 {
        match self {
            Self::Positive => 1.2,
            Self::Neutral => 1.0,
            Self::Negative => 0.8,
        }
    }
}

/// Score recent news coverage in `[0, 15]` as of `now_ms`.
pub fn news_score(articles: &[NewsArticle], now_ms: i64) -> f64 {
    if articles.is_empty() {
        return 0.0;
    }

    let total: f64 = articles
        .iter()
        .map(|article| {
            let decay = linear_decay(age_days(now_ms, article.published_at), NEWS_WINDOW_DAYS);
            ARTICLE_BASE_SCORE * source_weight(&article.source) * article.sentiment.weight() * decay
        })
        .sum();

    clamp_score(total, NEWS_SCORE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;
    const DAY_MS: i64 = 86_400_000;

    fn article(source: &str, sentiment: NewsSentiment, days_ago: i64) -> NewsArticle {
        NewsArticle {
            title: format!("Test article from {source}"),
            published_at: NOW - days_ago * DAY_MS,
            source: source.to_string(),
            sentiment,
            summary: format!("This is a {sentiment} article about the stock."),
        }
    }

    fn expected(source_w: f64, sentiment_w: f64, days: f64) -> f64 {
        5.0 * source_w * sentiment_w * (1.0 - days / 7.0)
    }

    #[test]
    fn no_news_scores_zero() {
        assert_eq!(news_score(&[], NOW), 0.0);
    }

    #[test]
    fn reputable_positive_coverage_is_capped() {
        let articles = [
            article("Bloomberg", NewsSentiment::Positive, 1),
            article("Reuters", NewsSentiment::Positive, 2),
            article("Wall Street Journal", NewsSentiment::Positive, 1),
        ];
        assert_eq!(news_score(&articles, NOW), 15.0);
    }

    #[test]
    fn mixed_coverage_sums_weighted_articles() {
        let articles = [
            article("CNBC", NewsSentiment::Positive, 1),
            article("MarketWatch", NewsSentiment::Neutral, 2),
            article("Yahoo Finance", NewsSentiment::Negative, 3),
        ];
        let want = expected(1.3, 1.2, 1.0) + expected(1.3, 1.0, 2.0) + expected(1.1, 0.8, 3.0);
        let score = news_score(&articles, NOW);
        assert!((score - want).abs() < 1e-9);
        assert!(score > 0.0 && score < 15.0);
    }

    #[test]
    fn older_articles_decay() {
        let articles = [
            article("Bloomberg", NewsSentiment::Positive, 6),
            article("Reuters", NewsSentiment::Positive, 7),
        ];
        let score = news_score(&articles, NOW);
        assert!((score - expected(1.5, 1.2, 6.0)).abs() < 1e-9);
        assert!(score < 2.0);
    }

    #[test]
    fn window_boundary() {
        assert_eq!(news_score(&[article("Bloomberg", NewsSentiment::Positive, 7)], NOW), 0.0);
        assert_eq!(news_score(&[article("Bloomberg", NewsSentiment::Positive, 8)], NOW), 0.0);
        assert!(news_score(&[article("Bloomberg", NewsSentiment::Positive, 6)], NOW) > 0.0);
    }

    #[test]
    fn unknown_source_uses_default_weight() {
        let score = news_score(&[article("Unknown Source", NewsSentiment::Positive, 1)], NOW);
        assert!((score - expected(1.0, 1.2, 1.0)).abs() < 1e-9);
    }

    #[test]
    fn source_match_is_case_sensitive() {
        assert_eq!(source_weight("bloomberg"), DEFAULT_SOURCE_WEIGHT);
        assert_eq!(source_weight("Bloomberg"), 1.5);
        assert_eq!(source_weight("Seeking Alpha"), 1.2);
    }

    #[test]
    fn future_article_contributes_nothing() {
        let mut future = article("Bloomberg", NewsSentiment::Positive, 0);
        future.published_at = NOW + 1_000_000;
        assert_eq!(news_score(&[future], NOW), 0.0);
    }

    #[test]
    fn sentiment_weights() {
        assert_eq!(NewsSentiment::Positive.weight(), 1.2);
        assert_eq!(NewsSentiment::Neutral.weight(), 1.0);
        assert_eq!(NewsSentiment::Negative.weight(), 0.8);
    }
}
