// =============================================================================
// Weighted Squeeze Scorer — Fixed-weight aggregation of the six components
// =============================================================================
//
//   component       weight   ceiling
//   volume           0.25      30
//   short interest   0.25      40
//   trading flow     0.15      15
//   SEC filings      0.10      15
//   news             0.15      15
//   social buzz      0.10      15
//
// The weighted sum is normalised by the weighted sum of ceilings and scaled
// to 0-100.  Leaf scores are already clamped by their own scorers.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::SqueezeSignalInput;

use super::decay::{clamp_score, now_ms};
use super::news::{news_score, NEWS_SCORE_MAX};
use super::sec_filing::{sec_filing_score, SEC_FILING_SCORE_MAX};
use super::short_interest::{short_interest_score, SHORT_INTEREST_SCORE_MAX};
use super::social_buzz::{social_buzz_score, SOCIAL_BUZZ_SCORE_MAX};
use super::trading_flow::{trading_flow_score, TRADING_FLOW_SCORE_MAX};
use super::volume::{volume_score, VOLUME_SCORE_MAX};

pub const VOLUME_WEIGHT: f64 = 0.25;
pub const SHORT_INTEREST_WEIGHT: f64 = 0.25;
pub const TRADING_FLOW_WEIGHT: f64 = 0.15;
pub const SEC_FILING_WEIGHT: f64 = 0.10;
pub const NEWS_WEIGHT: f64 = 0.15;
pub const SOCIAL_BUZZ_WEIGHT: f64 = 0.10;

/// Weighted sum of every component at its ceiling.
pub const MAX_WEIGHTED_SCORE: f64 = VOLUME_SCORE_MAX * VOLUME_WEIGHT
    + SHORT_INTEREST_SCORE_MAX * SHORT_INTEREST_WEIGHT
    + TRADING_FLOW_SCORE_MAX * TRADING_FLOW_WEIGHT
    + SEC_FILING_SCORE_MAX * SEC_FILING_WEIGHT
    + NEWS_SCORE_MAX * NEWS_WEIGHT
    + SOCIAL_BUZZ_SCORE_MAX * SOCIAL_BUZZ_WEIGHT;

/// Ceiling of the final squeeze signal.
pub const SQUEEZE_SIGNAL_MAX: f64 = 100.0;

/// One of the six sub-signals feeding the squeeze score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalComponent {
    Volume,
    ShortInterest,
    TradingFlow,
    SecFiling,
    News,
    SocialBuzz,
}

impl SignalComponent {
    /// Every component, in scoring order.
    pub const ALL: [SignalComponent; 6] = [
        Self::Volume,
        Self::ShortInterest,
        Self::TradingFlow,
        Self::SecFiling,
        Self::News,
        Self::SocialBuzz,
    ];

    pub fn weight(self) -> f64 {
        match self {
            Self::Volume => VOLUME_WEIGHT,
            Self::ShortInterest => SHORT_INTEREST_WEIGHT,
            Self::TradingFlow => TRADING_FLOW_WEIGHT,
            Self::SecFiling => SEC_FILING_WEIGHT,
            Self::News => NEWS_WEIGHT,
            Self::SocialBuzz => SOCIAL_BUZZ_WEIGHT,
        }
    }

    /// Upper bound of the component's leaf score.
    pub fn max_score(self) -> f64 {
        match self {
            Self::Volume => VOLUME_SCORE_MAX,
            Self::ShortInterest => SHORT_INTEREST_SCORE_MAX,
            Self::TradingFlow => TRADING_FLOW_SCORE_MAX,
            Self::SecFiling => SEC_FILING_SCORE_MAX,
            Self::News => NEWS_SCORE_MAX,
            Self::SocialBuzz => SOCIAL_BUZZ_SCORE_MAX,
        }
    }

    /// Run this component's leaf scorer against `input`.
    pub fn score(self, input: &SqueezeSignalInput, now_ms: i64) -> f64 {
        match self {
            Self::Volume => volume_score(input.current_volume, &input.price_history),
            Self::ShortInterest => short_interest_score(
                input.short_interest_percent,
                input.market_cap,
                input.avg_volume,
            ),
            Self::TradingFlow => trading_flow_score(&input.price_history),
            Self::SecFiling => sec_filing_score(&input.recent_filings, now_ms),
            Self::News => news_score(&input.recent_news, now_ms),
            Self::SocialBuzz => social_buzz_score(&input.recent_social_posts, now_ms),
        }
    }
}

impl std::fmt::Display for SignalComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Volume => write!(f, "volume"),
            Self::ShortInterest => write!(f, "short_interest"),
            Self::TradingFlow => write!(f, "trading_flow"),
            Self::SecFiling => write!(f, "sec_filing"),
            Self::News => write!(f, "news"),
            Self::SocialBuzz => write!(f, "social_buzz"),
        }
    }
}

/// The contribution of a single component to the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScore {
    pub component: SignalComponent,
    /// Leaf score in `[0, max_score]`.
    pub raw_score: f64,
    pub max_score: f64,
    pub weight: f64,
    /// Points this component adds on the 0-100 scale.
    pub contribution: f64,
}

/// Final squeeze score together with its per-component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqueezeSignal {
    pub score: f64,
    pub components: Vec<ComponentScore>,
}

impl SqueezeSignal {
    /// Breakdown entry for `component`.
    pub fn component(&self, component: SignalComponent) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.component == component)
    }
}

fn leaf_scores(input: &SqueezeSignalInput, now_ms: i64) -> [(SignalComponent, f64); 6] {
    SignalComponent::ALL.map(|component| (component, component.score(input, now_ms)))
}

fn normalise(weighted_sum: f64) -> f64 {
    clamp_score(
        weighted_sum / MAX_WEIGHTED_SCORE * SQUEEZE_SIGNAL_MAX,
        SQUEEZE_SIGNAL_MAX,
    )
}

/// Squeeze signal in `[0, 100]` as of `now_ms`.
pub fn squeeze_signal(input: &SqueezeSignalInput, now_ms: i64) -> f64 {
    let weighted_sum: f64 = leaf_scores(input, now_ms)
        .iter()
        .map(|(component, raw)| raw * component.weight())
        .sum();
    normalise(weighted_sum)
}

/// [`squeeze_signal`] evaluated against the wall clock.
pub fn squeeze_signal_now(input: &SqueezeSignalInput) -> f64 {
    squeeze_signal(input, now_ms())
}

/// Score `input` and report how each component contributed.
///
/// `score` is bit-for-bit what [`squeeze_signal`] returns for the same
/// arguments.
pub fn score_breakdown(input: &SqueezeSignalInput, now_ms: i64) -> SqueezeSignal {
    let leaves = leaf_scores(input, now_ms);

    let weighted_sum: f64 = leaves
        .iter()
        .map(|(component, raw)| raw * component.weight())
        .sum();
    let score = normalise(weighted_sum);

    let components = leaves
        .iter()
        .map(|&(component, raw_score)| {
            let weight = component.weight();
            ComponentScore {
                component,
                raw_score,
                max_score: component.max_score(),
                weight,
                contribution: raw_score * weight / MAX_WEIGHTED_SCORE * SQUEEZE_SIGNAL_MAX,
            }
        })
        .collect();

    trace!(score, weighted_sum, "squeeze signal computed");

    SqueezeSignal { score, components }
}
