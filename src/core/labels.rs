/// Stride between shown labels so at most about `max_labels` remain visible.
///
/// Returns `0` for an empty label set.
#[must_use]
pub fn label_step(label_count: usize, max_labels: usize) -> usize {
    if label_count == 0 {
        return 0;
    }
    label_count.div_ceil(max_labels.max(1))
}

/// Indices of the labels kept after thinning: `0, step, 2*step, ...`.
pub fn thinned_label_indices(label_count: usize, max_labels: usize) -> impl Iterator<Item = usize> {
    let step = label_step(label_count, max_labels).max(1);
    (0..label_count).step_by(step)
}

/// Fixed two-decimal rendering used for value-axis labels.
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    // Avoid printing "-0.00" for a negative zero produced by tick arithmetic.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}
