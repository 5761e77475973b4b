// =============================================================================
// Signal Decay — Linear freshness windows and score clamping
// =============================================================================
//
// Every time-sensitive scorer weights an item by how far it sits inside its
// freshness window:
//
//   decay = max(0, 1 - age / window)
//
// Items stamped in the future (negative age) carry no weight, so decay always
// lies in [0, 1].

use chrono::Utc;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Linear decay of an item `age` units old over a `window` of the same unit.
pub fn linear_decay(age: f64, window: f64) -> f64 {
    // Also rejects NaN ages.
    if !(age >= 0.0) || window <= 0.0 {
        return 0.0;
    }
    (1.0 - age / window).max(0.0)
}

/// Age of `at_ms` relative to `now_ms`, in days.
pub fn age_days(now_ms: i64, at_ms: i64) -> f64 {
    now_ms.saturating_sub(at_ms) as f64 / MS_PER_DAY
}

/// Age of `at_ms` relative to `now_ms`, in hours.
pub fn age_hours(now_ms: i64, at_ms: i64) -> f64 {
    now_ms.saturating_sub(at_ms) as f64 / MS_PER_HOUR
}

/// Clamp a raw score into `[0, max]`. `NaN` collapses to 0.
pub fn clamp_score(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_is_one_at_age_zero() {
        assert!((linear_decay(0.0, 30.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn decay_hits_zero_at_window_boundary() {
        assert_eq!(linear_decay(7.0, 7.0), 0.0);
        assert_eq!(linear_decay(100.0, 7.0), 0.0);
    }

    #[test]
    fn decay_is_linear_inside_window() {
        assert!((linear_decay(15.0, 30.0) - 0.5).abs() < 1e-12);
        assert!((linear_decay(36.0, 72.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn future_items_do_not_decay_above_one() {
        assert_eq!(linear_decay(-0.5, 30.0), 0.0);
        assert_eq!(linear_decay(f64::NAN, 30.0), 0.0);
    }

    #[test]
    fn ages_are_measured_in_days_and_hours() {
        let now = 1_700_000_000_000;
        assert!((age_days(now, now - 2 * 86_400_000) - 2.0).abs() < 1e-12);
        assert!((age_hours(now, now - 5 * 3_600_000) - 5.0).abs() < 1e-12);
        assert!(age_days(now, now + 1_000) < 0.0);
    }

    #[test]
    fn age_does_not_overflow_on_extreme_timestamps() {
        assert!(age_days(i64::MIN, i64::MAX) < 0.0);
        assert!(age_days(i64::MAX, i64::MIN) > 0.0);
    }

    #[test]
    fn clamp_handles_nan_and_infinity() {
        assert_eq!(clamp_score(f64::NAN, 15.0), 0.0);
        assert_eq!(clamp_score(f64::INFINITY, 15.0), 15.0);
        assert_eq!(clamp_score(-3.0, 15.0), 0.0);
        assert_eq!(clamp_score(7.5, 15.0), 7.5);
    }
}
