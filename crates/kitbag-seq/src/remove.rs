//! Index-based removal from vectors.

use kitbag_core::error::UsageError;

fn check_index<T>(values: &[T], index: usize) -> Result<(), UsageError> {
    if index < values.len() {
        Ok(())
    } else {
        Err(UsageError::IndexOutOfRange {
            index,
            len: values.len(),
        })
    }
}

/// Removes and returns the element at `index` in O(1) by moving the last
/// element into its slot. Order is not preserved.
///
/// # Errors
///
/// Returns `UsageError::IndexOutOfRange` if `index >= values.len()`; the
/// vector is left untouched.
pub fn remove_unordered<T>(values: &mut Vec<T>, index: usize) -> Result<T, UsageError> {
    check_index(values, index)?;
    Ok(values.swap_remove(index))
}

/// Removes and returns the element at `index`, shifting later elements left.
/// O(n); order is preserved.
///
/// # Errors
///
/// Returns `UsageError::IndexOutOfRange` if `index >= values.len()`; the
/// vector is left untouched.
pub fn remove_ordered<T>(values: &mut Vec<T>, index: usize) -> Result<T, UsageError> {
    check_index(values, index)?;
    Ok(values.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_ordered_preserves_order() {
        let mut values = vec!['a', 'b', 'c'];
        assert_eq!(remove_ordered(&mut values, 1), Ok('b'));
        assert_eq!(values, vec!['a', 'c']);
    }

    #[test]
    fn test_remove_unordered_moves_last_into_slot() {
        let mut values = vec!['a', 'b', 'c'];
        assert_eq!(remove_unordered(&mut values, 0), Ok('a'));
        assert_eq!(values, vec!['c', 'b']);
    }

    #[test]
    fn test_remove_unordered_last_element() {
        let mut values = vec![1, 2, 3];
        assert_eq!(remove_unordered(&mut values, 2), Ok(3));
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_remove_only_element_leaves_empty() {
        let mut values = vec![String::from("x")];
        assert_eq!(remove_ordered(&mut values, 0), Ok(String::from("x")));
        assert!(values.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_rejected_without_change() {
        let mut values = vec![1, 2, 3];

        let ordered = remove_ordered(&mut values, 3);
        let unordered = remove_unordered(&mut values, 10);

        assert_eq!(ordered, Err(UsageError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(unordered, Err(UsageError::IndexOutOfRange { index: 10, len: 3 }));
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_from_empty_is_rejected() {
        let mut values: Vec<u8> = Vec::new();
        assert_eq!(
            remove_unordered(&mut values, 0),
            Err(UsageError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
