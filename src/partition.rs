//! Partitioning and bounded extraction: fixed-size slicing, equivalence
//! grouping, and all-or-nothing prefix/suffix extraction.
//!
//! `slices` and `take_strict` hand out borrowed subslices of the input, so
//! neither copies elements. `group_by` is the one function in the toolkit
//! whose natural shape is "produce the full partition": a group cannot be
//! finalized until the whole input has been scanned, so it returns owned
//! groups rather than driving a visitor.

use crate::error::{IterError, IterResult};

/// Visits consecutive, non-overlapping subslices of length `n`, in order,
/// covering `seq` exactly once.
///
/// The final slice has length `seq.len() % n` when that remainder is
/// non-zero, otherwise length `n`. The number of visits is
/// `ceil(seq.len() / n)`; an empty sequence yields no visits. The visitor
/// receives `(slice, slice_index, seq)`, where `slice` borrows from `seq`.
///
/// Concatenating the visited slices in order reconstructs `seq` exactly.
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] if `n == 0`.
///
/// # Examples
///
/// ```rust
/// use iterkit::partition::slices;
///
/// let mut chunks = Vec::new();
/// slices(&[1, 2, 3, 4, 5], 2, |slice, _, _| chunks.push(slice.to_vec()))?;
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn slices<'a, T, F>(seq: &'a [T], n: usize, mut visit: F) -> IterResult<()>
where
    F: FnMut(&'a [T], usize, &'a [T]),
{
    if n == 0 {
        return Err(IterError::InvalidArgument {
            function: "slices",
            message: "slice size must be greater than zero",
        });
    }

    let count = seq.len().div_ceil(n);
    for slice_index in 0..count {
        let start = slice_index * n;
        let end = usize::min(start + n, seq.len());
        visit(&seq[start..end], slice_index, seq);
    }
    Ok(())
}

/// Partitions `seq` into ordered groups of elements whose keys compare equal.
///
/// Two elements belong to the same group iff `key_fn(a) == key_fn(b)`. Group
/// order follows the first occurrence of each distinct key; within a group,
/// elements keep their relative order from `seq`. The key function is called
/// exactly once per element.
///
/// # Examples
///
/// ```rust
/// use iterkit::partition::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5, 6], |element| element % 3);
/// assert_eq!(groups, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
///
/// Grouping by a derived property:
///
/// ```rust
/// use iterkit::partition::group_by;
///
/// let words = ["apple", "avocado", "banana", "cherry", "cranberry"];
/// let by_initial = group_by(&words, |word| word.chars().next());
/// assert_eq!(
///     by_initial,
///     vec![
///         vec!["apple", "avocado"],
///         vec!["banana"],
///         vec!["cherry", "cranberry"],
///     ]
/// );
/// ```
pub fn group_by<T, K, F>(seq: &[T], key_fn: F) -> Vec<Vec<T>>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let keys: Vec<K> = seq.iter().map(&key_fn).collect();

    let mut group_keys: Vec<&K> = Vec::new();
    let mut groups: Vec<Vec<T>> = Vec::new();

    for (element, key) in seq.iter().zip(keys.iter()) {
        match group_keys.iter().position(|known| *known == key) {
            Some(group_index) => groups[group_index].push(element.clone()),
            None => {
                group_keys.push(key);
                groups.push(vec![element.clone()]);
            }
        }
    }
    groups
}

/// Returns the first `n` elements of `seq` (or the last `n` with `from_end`)
/// as a borrowed subslice, preserving relative order.
///
/// The length check happens before any output is constructed, so the call is
/// all-or-nothing: on failure no partial result exists anywhere.
///
/// # Errors
///
/// Returns [`IterError::InsufficientElements`] if `seq.len() < n`.
///
/// # Examples
///
/// ```rust
/// use iterkit::partition::take_strict;
///
/// assert_eq!(take_strict(&[1, 2, 3, 4, 5, 6, 10], 5, true)?, &[3, 4, 5, 6, 10]);
/// assert_eq!(take_strict(&[1, 2, 3], 2, false)?, &[1, 2]);
/// assert!(take_strict(&[1, 2, 3], 4, false).is_err());
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn take_strict<T>(seq: &[T], n: usize, from_end: bool) -> IterResult<&[T]> {
    if seq.len() < n {
        return Err(IterError::InsufficientElements {
            requested: n,
            available: seq.len(),
        });
    }

    if from_end {
        Ok(&seq[seq.len() - n..])
    } else {
        Ok(&seq[..n])
    }
}
