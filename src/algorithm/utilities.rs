//! # Utilities
//!
//! Helper functions for algorithms.

/// Reduce the size of the vector by removing values.
///
/// # Arguments
///
/// * `vector`: `Vec` to remove indices from.
/// * `indices`: A set of indices to remove from the vector, assumed sorted and deduplicated.
pub(crate) fn remove_indices<T>(vector: &mut Vec<T>, indices: &[usize]) {
    debug_assert!(indices.len() <= vector.len());
    debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    debug_assert!(indices.iter().all(|&i| i < vector.len()));

    let mut to_remove = indices.iter().peekable();
    let mut index = 0;
    vector.retain(|_| {
        let keep = to_remove.next_if_eq(&&index).is_none();
        index += 1;
        keep
    });
}
