//! Frequency helpers shared by the reporters.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Count occurrences, most frequent first. Equal counts keep ascending
/// value order.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut tally: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *tally.entry(v).or_insert(0) += 1;
    }

    let mut counts: Vec<ValueCount<T>> = tally
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // stable: ties stay in ascending value order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Most frequent value; ties resolve to the smallest one. `None` when empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|vc| vc.value)
}
