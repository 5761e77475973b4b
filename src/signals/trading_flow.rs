// =============================================================================
// Trading Flow Scorer — Price/volume momentum over the last two weeks
// =============================================================================
//
// Compares the last 5 bars against the 5 bars before them.  Both windows are
// summed and divided by 5, so a short earlier window pulls its mean down:
//
//   price momentum > 10%        =>  15
//   price momentum in (5, 10]%  =>  10
//   price momentum in (0, 5]%   =>   5
//   otherwise                   =>   0
//
// Volume momentum > 50% x1.2, > 20% x1.1, < -20% x0.8.
// Close-to-close volatility (RMS) > 10% x1.2, < 2% x0.8.

use crate::types::PriceDataPoint;

use super::decay::clamp_score;
use super::window::{relative_change, trailing_windows, window_mean};

/// Ceiling of [`trading_flow_score`].
pub const TRADING_FLOW_SCORE_MAX: f64 = 15.0;

const FLOW_WINDOW: usize = 5;

/// Score recent trading momentum in `[0, 15]`.
pub fn trading_flow_score(price_history: &[PriceDataPoint]) -> f64 {
    if price_history.len() < FLOW_WINDOW {
        return 0.0;
    }

    let (previous, recent) = trailing_windows(price_history, FLOW_WINDOW);

    let price_momentum = relative_change(
        window_mean(recent, FLOW_WINDOW, |p| p.close),
        window_mean(previous, FLOW_WINDOW, |p| p.close),
    );
    let volume_momentum = relative_change(
        window_mean(recent, FLOW_WINDOW, |p| p.volume),
        window_mean(previous, FLOW_WINDOW, |p| p.volume),
    );
    let volatility = price_volatility(recent);

    let mut score = if price_momentum > 0.10 {
        15.0
    } else if price_momentum > 0.05 {
        10.0
    } else if price_momentum > 0.0 {
        5.0
    } else {
        0.0
    };

    if volume_momentum > 0.5 {
        score *= 1.2;
    } else if volume_momentum > 0.2 {
        score *= 1.1;
    } else if volume_momentum < -0.2 {
        score *= 0.8;
    }

    if volatility > 0.10 {
        score *= 1.2;
    } else if volatility < 0.02 {
        score *= 0.8;
    }

    clamp_score(score, TRADING_FLOW_SCORE_MAX)
}

/// Root-mean-square of bar-over-bar fractional close changes. The first bar
/// contributes a zero change; so does any bar following a zero close.
pub fn price_volatility(window: &[PriceDataPoint]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = window
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 {
                return 0.0;
            }
            let prev = window[i - 1].close;
            if prev > 0.0 {
                let change = (p.close - prev) / prev;
                change * change
            } else {
                0.0
            }
        })
        .sum();
    (sum_sq / window.len() as f64).sqrt()
}
