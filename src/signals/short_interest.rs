// =============================================================================
// Short Interest Scorer — Pressure from crowded short positions
// =============================================================================
//
// Base score from the short-interest percentage (0-100 scale):
//
//   p >= 50        =>  40
//   40 <= p < 50   =>  35 + (p - 40) * 0.5
//   30 <= p < 40   =>  25 + (p - 30)
//   20 <= p < 30   =>  15 + (p - 20)
//   10 <= p < 20   =>  (p - 10) * 1.5
//   otherwise      =>  0
//
// Adjusted by days-to-cover: >= 5 days x1.2, >= 3 days x1.1, <= 1 day x0.8.
//
// NOTE: days-to-cover multiplies the percentage by the dollar market cap and
// divides by share volume.  The units do not agree; existing scores depend on
// this exact arithmetic, so do not rescale it.

use super::decay::clamp_score;

/// Ceiling of [`short_interest_score`].
pub const SHORT_INTEREST_SCORE_MAX: f64 = 40.0;

/// Score short-interest pressure in `[0, 40]`.
pub fn short_interest_score(short_interest_percent: f64, market_cap: f64, avg_volume: f64) -> f64 {
    // Also rejects NaN.
    if !(short_interest_percent > 0.0) {
        return 0.0;
    }

    let mut score = percent_score(short_interest_percent);

    let dtc = days_to_cover(short_interest_percent, market_cap, avg_volume);
    if dtc >= 5.0 {
        score *= 1.2;
    } else if dtc >= 3.0 {
        score *= 1.1;
    } else if dtc <= 1.0 {
        score *= 0.8;
    }

    clamp_score(score, SHORT_INTEREST_SCORE_MAX)
}

fn percent_score(p: f64) -> f64 {
    if p >= 50.0 {
        40.0
    } else if p >= 40.0 {
        35.0 + (p - 40.0) * 0.5
    } else if p >= 30.0 {
        25.0 + (p - 30.0)
    } else if p >= 20.0 {
        15.0 + (p - 20.0)
    } else if p >= 10.0 {
        (p - 10.0) * 1.5
    } else {
        0.0
    }
}

/// Approximate days to cover; 0 when there is no average volume.
pub fn days_to_cover(short_interest_percent: f64, market_cap: f64, avg_volume: f64) -> f64 {
    if !(avg_volume > 0.0) {
        return 0.0;
    }
    let short_interest_shares = (short_interest_percent / 100.0) * market_cap;
    short_interest_shares / avg_volume
}
