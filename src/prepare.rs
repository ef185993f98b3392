//! Input normalization for [`Tree`][crate::Tree] construction.
//!
//! A balanced tree can only be built from a strictly ascending sequence, so
//! arbitrary input goes through [`prepare`] first: a stable merge sort
//! followed by removal of adjacent duplicates.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::prepare::prepare;
//!
//! assert_eq!(prepare(vec![3, 1, 3, 2, 1]), vec![1, 2, 3]);
//! assert!(prepare(Vec::<i32>::new()).is_empty());
//! ```

/// Sorts `values` ascending and removes duplicates.
pub fn prepare<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    dedup_sorted(merge_sort(values.into_iter().collect()))
}

/// A stable, top-down merge sort. Equal elements keep their input order.
///
/// # Examples
///
/// ```
/// use balanced_bst::prepare::merge_sort;
///
/// assert_eq!(merge_sort(vec![5, 2, 4, 1]), vec![1, 2, 4, 5]);
/// ```
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }

    let right = values.split_off(values.len() / 2);
    merge(merge_sort(values), merge_sort(right))
}

/// Merges two sorted runs. Ties are taken from `left` first which is what
/// makes [`merge_sort`] stable.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

/// Removes consecutive equal elements. On sorted input this leaves every
/// distinct value exactly once.
pub fn dedup_sorted<T: PartialEq>(mut values: Vec<T>) -> Vec<T> {
    values.dedup();
    values
}
