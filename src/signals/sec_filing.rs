// =============================================================================
// SEC Filing Scorer — Recency-weighted regulatory activity
// =============================================================================
//
// Each filing contributes its form weight scaled by a 30-day linear decay.
// Registration statements (S-1, S-3) signal possible dilution and dominate;
// routine periodic reports barely register.

use crate::types::SecFiling;

use super::decay::{age_days, clamp_score, linear_decay};

/// Ceiling of [`sec_filing_score`].
pub const SEC_FILING_SCORE_MAX: f64 = 15.0;

/// Freshness window for filings, in days.
pub const FILING_WINDOW_DAYS: f64 = 30.0;

/// Weight applied to any form type without a dedicated entry.
pub const DEFAULT_FILING_WEIGHT: f64 = 1.0;

/// Base weight of a filing by exact form type.
pub fn filing_weight(filing_type: &str) -> f64 {
    match filing_type {
        "S-1" => 15.0,
        "S-3" => 10.0,
        "8-K" => 5.0,
        "10-K" => 3.0,
        "10-Q" => 2.0,
        _ => DEFAULT_FILING_WEIGHT,
    }
}

/// Score recent filings in `[0, 15]` as of `now_ms`.
pub fn sec_filing_score(filings: &[SecFiling], now_ms: i64) -> f64 {
    if filings.is_empty() {
        return 0.0;
    }

    let total: f64 = filings
        .iter()
        .map(|filing| {
            let decay = linear_decay(age_days(now_ms, filing.filed_at), FILING_WINDOW_DAYS);
            filing_weight(&filing.filing_type) * decay
        })
        .sum();

    clamp_score(total, SEC_FILING_SCORE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;
    const DAY_MS: i64 = 86_400_000;

    fn filing(filing_type: &str, days_ago: i64) -> SecFiling {
        SecFiling {
            filing_type: filing_type.to_string(),
            filed_at: NOW - days_ago * DAY_MS,
            description: format!("Test {filing_type} filing"),
        }
    }

    #[test]
    fn no_filings_scores_zero() {
        assert_eq!(sec_filing_score(&[], NOW), 0.0);
    }

    #[test]
    fn one_day_old_registration() {
        let score = sec_filing_score(&[filing("S-1", 1)], NOW);
        assert!((score - 15.0 * (1.0 - 1.0 / 30.0)).abs() < 1e-9);
        assert!((score - 14.5).abs() < 1e-9);
    }

    #[test]
    fn several_recent_filings_are_capped() {
        let filings = [filing("S-3", 5), filing("8-K", 2), filing("10-K", 1)];
        assert_eq!(sec_filing_score(&filings, NOW), 15.0);
    }

    #[test]
    fn older_filings_decay() {
        let filings = [filing("S-1", 15), filing("S-3", 20)];
        let expected = 15.0 * 0.5 + 10.0 * (1.0 - 20.0 / 30.0);
        assert!((sec_filing_score(&filings, NOW) - expected).abs() < 1e-9);
    }

    #[test]
    fn window_boundary() {
        assert_eq!(sec_filing_score(&[filing("S-1", 30)], NOW), 0.0);
        assert_eq!(sec_filing_score(&[filing("S-1", 31)], NOW), 0.0);
        assert_eq!(sec_filing_score(&[filing("S-1", 100)], NOW), 0.0);
        assert!(sec_filing_score(&[filing("S-1", 29)], NOW) > 0.0);
    }

    #[test]
    fn unknown_form_uses_default_weight() {
        let score = sec_filing_score(&[filing("UNKNOWN", 1)], NOW);
        assert!((score - (1.0 - 1.0 / 30.0)).abs() < 1e-9);
        assert_eq!(filing_weight("s-1"), DEFAULT_FILING_WEIGHT);
    }

    #[test]
    fn future_filing_contributes_nothing() {
        let future = SecFiling {
            filing_type: "S-1".to_string(),
            filed_at: NOW + 1_000_000,
            description: "Invalid filing".to_string(),
        };
        assert_eq!(sec_filing_score(&[future], NOW), 0.0);
    }

    #[test]
    fn form_weights() {
        assert_eq!(filing_weight("S-1"), 15.0);
        assert_eq!(filing_weight("S-3"), 10.0);
        assert_eq!(filing_weight("8-K"), 5.0);
        assert_eq!(filing_weight("10-K"), 3.0);
        assert_eq!(filing_weight("10-Q"), 2.0);
    }
}
