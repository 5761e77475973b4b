// =============================================================================
// Signals Module
// =============================================================================
//
// The squeeze signal engine.  Six independent leaf scorers, each a pure
// function clamped to its own range, feed a fixed-weight aggregator:
//
// - Volume surge            [0, 30]
// - Short interest          [0, 40]
// - Trading flow momentum   [0, 15]
// - SEC filing recency      [0, 15]
// - News coverage           [0, 15]
// - Social buzz             [0, 15]
//
// No scorer holds state or performs I/O; all are safe to call concurrently.

pub mod decay;
pub mod news;
pub mod sec_filing;
pub mod short_interest;
pub mod social_buzz;
pub mod trading_flow;
pub mod volume;
pub mod weighted_score;
pub mod window;

pub use news::news_score;
pub use sec_filing::sec_filing_score;
pub use short_interest::short_interest_score;
pub use social_buzz::social_buzz_score;
pub use trading_flow::trading_flow_score;
pub use volume::volume_score;
pub use weighted_score::{
    score_breakdown, squeeze_signal, squeeze_signal_now, ComponentScore, SignalComponent,
    SqueezeSignal,
};
