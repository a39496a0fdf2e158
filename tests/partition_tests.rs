//! Unit tests for partitioning and bounded extraction.
//!
//! Tests for slices, group_by, and take_strict.

#![cfg(feature = "partition")]

use iterkit::IterError;
use iterkit::partition::{group_by, slices, take_strict};
use rstest::rstest;

// =============================================================================
// slices tests
// =============================================================================

#[test]
fn test_slices_produces_chunks_with_short_tail() {
    let mut chunks = Vec::new();
    slices(&[1, 2, 3, 4, 5], 2, |slice, _, _| {
        chunks.push(slice.to_vec());
    })
    .unwrap();
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn test_slices_exact_division_has_no_short_tail() {
    let mut chunks = Vec::new();
    slices(&[1, 2, 3, 4], 2, |slice, _, _| chunks.push(slice.to_vec())).unwrap();
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_slices_reports_slice_indices() {
    let mut indices = Vec::new();
    slices(&[1, 2, 3, 4, 5, 6, 7], 3, |_, index, _| indices.push(index)).unwrap();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[rstest]
#[case(5, 2, 3)]
#[case(6, 2, 3)]
#[case(6, 3, 2)]
#[case(1, 10, 1)]
#[case(10, 1, 10)]
fn test_slices_count_is_ceiling_of_length_over_n(
    #[case] length: usize,
    #[case] n: usize,
    #[case] expected: usize,
) {
    let seq: Vec<usize> = (0..length).collect();
    let mut visits = 0;
    slices(&seq, n, |_, _, _| visits += 1).unwrap();
    assert_eq!(visits, expected);
}

#[test]
fn test_slices_on_empty_sequence_visits_nothing() {
    let empty: [i32; 0] = [];
    let mut visits = 0;
    slices(&empty, 3, |_, _, _| visits += 1).unwrap();
    assert_eq!(visits, 0);
}

#[test]
fn test_slices_zero_size_is_rejected() {
    let result = slices(&[1, 2, 3], 0, |_: &[i32], _, _| {});
    assert!(matches!(
        result,
        Err(IterError::InvalidArgument {
            function: "slices",
            ..
        })
    ));
}

#[test]
fn test_slices_borrow_from_the_original_sequence() {
    let seq = [1, 2, 3, 4];
    slices(&seq, 3, |slice, index, original| {
        assert_eq!(original, &seq);
        match index {
            0 => assert_eq!(slice, &seq[0..3]),
            1 => assert_eq!(slice, &seq[3..4]),
            _ => panic!("unexpected slice index {index}"),
        }
    })
    .unwrap();
}

// =============================================================================
// group_by tests
// =============================================================================

#[test]
fn test_group_by_partitions_by_key_equality() {
    let groups = group_by(&[1, 2, 3, 4, 5, 6], |element| element % 3);
    assert_eq!(groups, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
}

#[test]
fn test_group_by_orders_groups_by_first_occurrence() {
    let groups = group_by(&["bb", "a", "ccc", "dd", "e"], |word| word.len());
    assert_eq!(
        groups,
        vec![vec!["bb", "dd"], vec!["a", "e"], vec!["ccc"]]
    );
}

#[test]
fn test_group_by_preserves_element_order_within_groups() {
    let groups = group_by(&[4, 1, 2, 3, 6, 5], |element| element % 2);
    assert_eq!(groups, vec![vec![4, 2, 6], vec![1, 3, 5]]);
}

#[test]
fn test_group_by_constant_key_yields_one_group() {
    let groups = group_by(&[1, 2, 3], |_| 0);
    assert_eq!(groups, vec![vec![1, 2, 3]]);
}

#[test]
fn test_group_by_unique_keys_yield_singleton_groups() {
    let groups = group_by(&[1, 2, 3], |element| *element);
    assert_eq!(groups, vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn test_group_by_on_empty_sequence_is_empty() {
    let empty: [i32; 0] = [];
    let groups = group_by(&empty, |element| *element);
    assert!(groups.is_empty());
}

#[test]
fn test_group_by_flattened_is_a_permutation_of_the_input() {
    let seq = [3, 1, 4, 1, 5, 9, 2, 6];
    let groups = group_by(&seq, |element| element % 2);
    let mut flattened: Vec<i32> = groups.into_iter().flatten().collect();
    let mut original = seq.to_vec();
    flattened.sort_unstable();
    original.sort_unstable();
    assert_eq!(flattened, original);
}

// =============================================================================
// take_strict tests
// =============================================================================

#[test]
fn test_take_strict_returns_a_prefix() {
    assert_eq!(take_strict(&[1, 2, 3, 4], 2, false).unwrap(), &[1, 2]);
}

#[test]
fn test_take_strict_from_end_returns_a_suffix() {
    assert_eq!(
        take_strict(&[1, 2, 3, 4, 5, 6, 10], 5, true).unwrap(),
        &[3, 4, 5, 6, 10]
    );
}

#[test]
fn test_take_strict_whole_sequence() {
    assert_eq!(take_strict(&[1, 2, 3], 3, false).unwrap(), &[1, 2, 3]);
    assert_eq!(take_strict(&[1, 2, 3], 3, true).unwrap(), &[1, 2, 3]);
}

#[test]
fn test_take_strict_zero_elements_is_empty() {
    let taken: &[i32] = take_strict(&[1, 2, 3], 0, false).unwrap();
    assert!(taken.is_empty());
}

#[test]
fn test_take_strict_fails_when_too_few_elements() {
    let result = take_strict(&[1, 2, 3], 4, false);
    assert_eq!(
        result,
        Err(IterError::InsufficientElements {
            requested: 4,
            available: 3,
        })
    );
}

#[test]
fn test_take_strict_from_end_fails_when_too_few_elements() {
    let result = take_strict(&[1, 2], 3, true);
    assert_eq!(
        result,
        Err(IterError::InsufficientElements {
            requested: 3,
            available: 2,
        })
    );
}

#[test]
fn test_take_strict_fails_on_empty_sequence_with_nonzero_request() {
    let empty: [i32; 0] = [];
    assert!(take_strict(&empty, 1, false).is_err());
    assert!(take_strict(&empty, 0, false).is_ok());
}

#[test]
fn test_take_strict_result_aliases_the_input() {
    let seq = [1, 2, 3, 4];
    let taken = take_strict(&seq, 2, true).unwrap();
    assert!(std::ptr::eq(taken.as_ptr(), seq[2..].as_ptr()));
}
