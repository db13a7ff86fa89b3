//! Gini impurity and label counting.
//!
//! Label counts are kept in first-encounter order so that every majority
//! decision in the crate resolves ties the same deterministic way: the
//! earliest label among those tied for the maximum wins.
use crate::data::LabeledPoint;

/// Count labels, preserving the order in which they are first seen.
pub(crate) fn label_counts<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

/// The most frequent label, or `None` for an empty input.
///
/// A label only replaces the running best on a strictly higher count, so
/// ties resolve to the first-encountered label.
pub(crate) fn majority_label<'a>(labels: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in label_counts(labels) {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Gini impurity of a set of labeled points.
///
/// Returns 0 for an empty set or a set where every point shares one label,
/// otherwise `1 - sum(p_l^2)` over the empirical label distribution. The
/// result lies in `[0, 1 - 1/L]` for `L` distinct labels.
pub fn gini_impurity(points: &[LabeledPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total = points.len() as f64;
    let mut impurity = 1.0;
    for (_, count) in label_counts(points.iter().map(|p| p.label.as_str())) {
        let probability = count as f64 / total;
        impurity -= probability * probability;
    }
    impurity
}
