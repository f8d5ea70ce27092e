//! Membership search by structural equality.

/// Returns every index whose element equals `item`, and whether there was
/// at least one.
#[must_use]
pub fn indexes_of<T: PartialEq>(values: &[T], item: &T) -> (Vec<usize>, bool) {
    let indexes: Vec<usize> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| (v == item).then_some(i))
        .collect();
    let found = !indexes.is_empty();
    (indexes, found)
}

/// Alias of [`indexes_of`].
#[must_use]
pub fn contains_item<T: PartialEq>(values: &[T], item: &T) -> (Vec<usize>, bool) {
    indexes_of(values, item)
}

/// Returns the first index whose element equals `item`.
#[must_use]
pub fn index_of<T: PartialEq>(values: &[T], item: &T) -> Option<usize> {
    values.iter().position(|v| v == item)
}

/// Alias of [`index_of`].
#[must_use]
pub fn contains_item_once<T: PartialEq>(values: &[T], item: &T) -> Option<usize> {
    index_of(values, item)
}

/// Returns the last index whose element equals `item`.
#[must_use]
pub fn last_index_of<T: PartialEq>(values: &[T], item: &T) -> Option<usize> {
    values.iter().rposition(|v| v == item)
}
