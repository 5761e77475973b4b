// =============================================================================
// Trailing windows over a chronological price history
// =============================================================================

/// Split `history` into `(previous, recent)`: `recent` holds the last `size`
/// points and `previous` the up-to-`size` points immediately before them.
pub fn trailing_windows<T>(history: &[T], size: usize) -> (&[T], &[T]) {
    let recent_start = history.len().saturating_sub(size);
    let previous_start = recent_start.saturating_sub(size);
    (
        &history[previous_start..recent_start],
        &history[recent_start..],
    )
}

/// Arithmetic mean of `f` over `items`, or `None` when `items` is empty.
pub fn mean_by<T>(items: &[T], f: impl Fn(&T) -> f64) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    Some(items.iter().map(f).sum::<f64>() / items.len() as f64)
}

/// Sum of `f` over `items` divided by the nominal window `size`, so a
/// partially filled window counts its missing bars as zero. `None` when
/// `items` is empty.
pub fn window_mean<T>(items: &[T], size: usize, f: impl Fn(&T) -> f64) -> Option<f64> {
    if items.is_empty() || size == 0 {
        return None;
    }
    Some(items.iter().map(f).sum::<f64>() / size as f64)
}

/// Fractional change from `previous` to `recent`; 0 when there is no usable
/// (positive) baseline.
pub fn relative_change(recent: Option<f64>, previous: Option<f64>) -> f64 {
    match (recent, previous) {
        (Some(r), Some(p)) if p > 0.0 => (r - p) / p,
        _ => 0.0,
    }
}
