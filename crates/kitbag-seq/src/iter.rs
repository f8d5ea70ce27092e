//! Per-element iteration with access to the whole slice.

/// Calls `f(element, whole_slice, index)` for every element in order and
/// collects each `Some` result, in call order.
pub fn for_each<T, U, F>(values: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, &[T], usize) -> Option<U>,
{
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| f(v, values, i))
        .collect()
}

/// Calls `f(element, whole_slice, index)` for every element in order.
pub fn visit_each<T, F>(values: &[T], mut f: F)
where
    F: FnMut(&T, &[T], usize),
{
    for (i, v) in values.iter().enumerate() {
        f(v, values, i);
    }
}
