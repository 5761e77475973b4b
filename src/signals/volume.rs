// =============================================================================
// Volume Scorer — Relative trading-volume surge
// =============================================================================
//
// Ratio of today's volume to the history average, mapped piecewise-linearly:
//
//   ratio >= 3.0        =>  30
//   2.0 <= ratio < 3.0  =>  20 + (ratio - 2.0) * 10
//   1.5 <= ratio < 2.0  =>  10 + (ratio - 1.5) * 20
//   1.2 <= ratio < 1.5  =>  (ratio - 1.2) * 33.33
//   otherwise           =>  0
//
// A rising 5-bar volume trend boosts the result by 20%, a fading one trims it
// by 20%.

use crate::types::PriceDataPoint;

use super::decay::clamp_score;
use super::window::{mean_by, trailing_windows, window_mean};

/// Ceiling of [`volume_score`].
pub const VOLUME_SCORE_MAX: f64 = 30.0;

const TREND_WINDOW: usize = 5;

/// Score a volume surge in `[0, 30]`.
pub fn volume_score(current_volume: f64, price_history: &[PriceDataPoint]) -> f64 {
    let Some(average_volume) = mean_by(price_history, |p| p.volume) else {
        return 0.0;
    };
    if average_volume <= 0.0 {
        return 0.0;
    }

    let mut score = ratio_score(current_volume / average_volume);

    if let Some(trend) = volume_trend(price_history) {
        if trend > 1.5 {
            score *= 1.2;
        } else if trend < 0.8 {
            score *= 0.8;
        }
    }

    clamp_score(score, VOLUME_SCORE_MAX)
}

fn ratio_score(ratio: f64) -> f64 {
    if ratio >= 3.0 {
        30.0
    } else if ratio >= 2.0 {
        20.0 + (ratio - 2.0) * 10.0
    } else if ratio >= 1.5 {
        10.0 + (ratio - 1.5) * 20.0
    } else if ratio >= 1.2 {
        (ratio - 1.2) * 33.33
    } else {
        0.0
    }
}

/// Volume of the last five bars over the five before them, each summed and
/// divided by five. `None` when there is no earlier window or it traded
/// nothing.
pub fn volume_trend(price_history: &[PriceDataPoint]) -> Option<f64> {
    let (previous, recent) = trailing_windows(price_history, TREND_WINDOW);
    let last = window_mean(recent, TREND_WINDOW, |p| p.volume)?;
    let prev = window_mean(previous, TREND_WINDOW, |p| p.volume)?;
    if prev <= 0.0 {
        return None;
    }
    Some(last / prev)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;

    fn history(volumes: &[f64]) -> Vec<PriceDataPoint> {
        volumes
            .iter()
            .enumerate()
            .map(|(i, &v)| PriceDataPoint::flat(1_700_000_000_000 + i as i64 * DAY_MS, 1.0, v))
            .collect()
    }

    fn flat_history(volume: f64, len: usize) -> Vec<PriceDataPoint> {
        history(&vec![volume; len])
    }

    #[test]
    fn triple_volume_scores_maximum() {
        let h = flat_history(1_000_000.0, 30);
        assert_eq!(volume_score(3_000_000.0, &h), 30.0);
    }

    #[test]
    fn below_threshold_scores_zero() {
        let h = flat_history(1_000_000.0, 30);
        assert_eq!(volume_score(1_100_000.0, &h), 0.0);
        assert_eq!(volume_score(0.0, &h), 0.0);
    }

    #[test]
    fn double_volume_scores_twenty() {
        let h = flat_history(1_000_000.0, 30);
        assert_eq!(volume_score(2_000_000.0, &h), 20.0);
    }

    #[test]
    fn interpolates_between_breakpoints() {
        let h = flat_history(1_000_000.0, 30);
        assert!((volume_score(1_500_000.0, &h) - 10.0).abs() < 1e-9);
        assert!((volume_score(2_500_000.0, &h) - 25.0).abs() < 1e-9);
        assert!((volume_score(1_350_000.0, &h) - 0.15 * 33.33).abs() < 1e-6);
    }

    #[test]
    fn rising_trend_boosts_score() {
        // prev5 = 1M, last5 = 2M, average 1.25M.
        let mut volumes = vec![1_000_000.0; 15];
        volumes.extend(vec![2_000_000.0; 5]);
        let h = history(&volumes);
        assert_eq!(volume_trend(&h), Some(2.0));
        assert!((volume_score(2_500_000.0, &h) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn fading_trend_trims_score() {
        // prev5 = 2M, last5 = 1M, average 1.75M.
        let mut volumes = vec![2_000_000.0; 15];
        volumes.extend(vec![1_000_000.0; 5]);
        let h = history(&volumes);
        assert!((volume_score(3_500_000.0, &h) - 16.0).abs() < 1e-9);
    }

    #[test]
    fn boosted_score_is_capped() {
        let mut volumes = vec![1_000_000.0; 15];
        volumes.extend(vec![2_000_000.0; 5]);
        let h = history(&volumes);
        assert_eq!(volume_score(10_000_000.0, &h), 30.0);
    }

    #[test]
    fn short_history_has_neutral_trend() {
        let h = flat_history(1_000_000.0, 3);
        assert_eq!(volume_trend(&h), None);
        assert_eq!(volume_score(2_000_000.0, &h), 20.0);
    }

    #[test]
    fn partial_previous_window_counts_missing_bars_as_zero() {
        // 7 flat bars: prev5 = 2M / 5 = 400k, last5 = 1M, trend 2.5.
        let h = flat_history(1_000_000.0, 7);
        assert!((volume_trend(&h).unwrap() - 2.5).abs() < 1e-12);
        assert!((volume_score(2_000_000.0, &h) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_histories_score_zero() {
        assert_eq!(volume_score(1_000_000.0, &[]), 0.0);
        let silent = flat_history(0.0, 10);
        assert_eq!(volume_score(1_000_000.0, &silent), 0.0);
    }

    #[test]
    fn silent_previous_window_has_neutral_trend() {
        let mut volumes = vec![0.0; 5];
        volumes.extend(vec![1_000_000.0; 5]);
        let h = history(&volumes);
        assert_eq!(volume_trend(&h), None);
        // average 500k, ratio 4 => 30 without any trend adjustment.
        assert_eq!(volume_score(2_000_000.0, &h), 30.0);
    }

    #[test]
    fn monotonic_in_current_volume() {
        let mut volumes = vec![1_000_000.0; 25];
        volumes.extend(vec![1_800_000.0; 5]);
        let h = history(&volumes);
        let mut last = 0.0;
        for step in 0..=400 {
            let current = 1_000_000.0 + step as f64 * 10_000.0;
            let score = volume_score(current, &h);
            assert!(score >= last, "score fell at volume {current}");
            assert!((0.0..=VOLUME_SCORE_MAX).contains(&score));
            last = score;
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let h = flat_history(750_000.0, 12);
        assert_eq!(volume_score(1_900_000.0, &h), volume_score(1_900_000.0, &h));
    }
}
