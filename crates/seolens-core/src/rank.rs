//! Descending rank with stable ties and truncation.

use std::cmp::Ordering;

/// Sorts items descending by score and keeps the top `limit`.
///
/// The sort is stable, so items with equal scores keep their original
/// (first-encounter) order. Pure: empty input yields empty output, and
/// re-ranking an already ranked list is a no-op apart from truncation.
pub fn top_ranked<T, F>(mut items: Vec<T>, score: F, limit: usize) -> Vec<T>
where
    F: Fn(&T) -> f32,
{
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
    items.truncate(limit);
    items
}
