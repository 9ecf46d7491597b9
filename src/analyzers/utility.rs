/// Computes the arithmetic mean of a slice of scores. Returns `None` for empty input.
///
/// Scores are summed as `i128`, so any mix of `i64` values is safe.
pub fn average(scores: &[i64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let total: i128 = scores.iter().map(|&s| i128::from(s)).sum();
    Some(total as f64 / scores.len() as f64)
}
