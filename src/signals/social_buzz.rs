// =============================================================================
// Social Buzz Scorer — Engagement-weighted retail chatter
// =============================================================================
//
// Per post:
//
//   engagement = likes * 0.4 + comments * 0.4 + shares * 0.2
//   score      = engagement * platform * sentiment * verified * decay(72h)
//
// The summed post scores are mapped onto [0, 15] against a fixed reference of
// 1000 engagement points.

use crate::types::{Engagement, PostSentiment, SocialMediaPost, SocialPlatform};

use super::decay::{age_hours, clamp_score, linear_decay};

/// Ceiling of [`social_buzz_score`].
pub const SOCIAL_BUZZ_SCORE_MAX: f64 = 15.0;

/// Freshness window for posts, in hours.
pub const SOCIAL_WINDOW_HOURS: f64 = 3.0 * 24.0;

/// Summed engagement that maps to the full 15 points.
pub const ENGAGEMENT_NORMALISATION: f64 = 1000.0;

const VERIFIED_BONUS: f64 = 1.2;

impl SocialPlatform {
    /// Multiplier applied to posts from this platform.
    pub fn weight(self) -> f64 {
        match self {
            Self::Reddit => 1.3,
            Self::Twitter => 1.2,
            Self::Stocktwits => 1.1,
            Self::Other => 1.0,
        }
    }
}

impl PostSentiment {
    /// Multiplier applied to a post with this stance.
    pub fn weight(self) -> f64 {
        match self {
            Self::Bullish => 1.2,
            Self::Neutral => 1.0,
            Self::Bearish => 0.8,
        }
    }
}

impl Engagement {
    /// Blended interaction count: likes and comments 40% each, shares 20%.
    pub fn weighted(&self) -> f64 {
        self.likes as f64 * 0.4 + self.comments as f64 * 0.4 + self.shares as f64 * 0.2
    }
}

/// Decayed engagement score of a single post as of `now_ms`.
pub fn post_score(post: &SocialMediaPost, now_ms: i64) -> f64 {
    let mut score = post.engagement.weighted() * post.platform.weight() * post.sentiment.weight();
    if post.is_verified {
        score *= VERIFIED_BONUS;
    }
    score * linear_decay(age_hours(now_ms, post.timestamp), SOCIAL_WINDOW_HOURS)
}

/// Score social buzz in `[0, 15]` as of `now_ms`.
pub fn social_buzz_score(posts: &[SocialMediaPost], now_ms: i64) -> f64 {
    if posts.is_empty() {
        return 0.0;
    }

    let total: f64 = posts.iter().map(|post| post_score(post, now_ms)).sum();
    let normalised = (total / ENGAGEMENT_NORMALISATION) * SOCIAL_BUZZ_SCORE_MAX;

    clamp_score(normalised, SOCIAL_BUZZ_SCORE_MAX)
}
