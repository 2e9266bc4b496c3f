// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drag-and-drop list reordering.

use crate::error::SelectError;

/// Moves the element at `source` to the drop position `target`, returning a
/// new list.
///
/// Matches drag semantics: on a forward move (`source < target`) the
/// element lands at `target - 1` and everything originally in
/// `(source, target]` shifts left by one; on a backward move it lands at
/// `target` and everything in `[target, source)` shifts right by one.
/// `source == target` returns the list unchanged.
///
/// The input is never mutated; the surrounding reactive UI state expects a
/// fresh list on every reorder.
///
/// # Errors
///
/// Returns an error if either index is outside the list. Invalid drag
/// indices are a caller bug; they are never clamped.
pub fn reorder<T: Clone>(
    items: &[T],
    source: usize,
    target: usize,
) -> Result<Vec<T>, SelectError> {
    let len = items.len();
    for index in [source, target] {
        if index >= len {
            return Err(SelectError::IndexOutOfBounds { index, len });
        }
    }

    let mut reordered = items.to_vec();
    if source == target {
        return Ok(reordered);
    }

    let item = reordered.remove(source);
    let landing = if source < target { target - 1 } else { target };
    reordered.insert(landing, item);

    Ok(reordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<&'static str> {
        vec!["a", "b", "c", "d"]
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_forward_move_lands_before_target() {
        let reordered = reorder(&items(), 0, 2).expect("should succeed");
        assert_eq!(reordered, vec!["b", "a", "c", "d"]);
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_forward_move_to_list_end() {
        let reordered = reorder(&items(), 0, 3).expect("should succeed");
        assert_eq!(reordered, vec!["b", "c", "a", "d"]);
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_backward_move_lands_at_target() {
        let reordered = reorder(&items(), 2, 0).expect("should succeed");
        assert_eq!(reordered, vec!["c", "a", "b", "d"]);
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_same_index_is_identity() {
        let reordered = reorder(&items(), 1, 1).expect("should succeed");
        assert_eq!(reordered, items());
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_forward_move_is_undone_by_backward_move() {
        // A forward drag 0 -> 2 lands at index 1; dragging it back from 1
        // to 0 restores the original order.
        let moved = reorder(&items(), 0, 2).expect("should succeed");
        let restored = reorder(&moved, 1, 0).expect("should succeed");
        assert_eq!(restored, items());
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_every_valid_pair_is_a_permutation() {
        let original = items();
        for source in 0..original.len() {
            for target in 0..original.len() {
                let mut reordered =
                    reorder(&original, source, target).expect("should succeed");
                reordered.sort_unstable();
                let mut sorted = original.clone();
                sorted.sort_unstable();
                assert_eq!(reordered, sorted);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_indices_are_rejected() {
        assert_eq!(
            reorder(&items(), 4, 0),
            Err(SelectError::IndexOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            reorder(&items(), 0, 7),
            Err(SelectError::IndexOutOfBounds { index: 7, len: 4 })
        );
        assert_eq!(
            reorder::<&str>(&[], 0, 0),
            Err(SelectError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[allow(clippy::expect_used)]
    #[test]
    fn test_input_is_not_mutated() {
        let original = items();
        let _reordered = reorder(&original, 0, 3).expect("should succeed");
        assert_eq!(original, items());
    }
}
