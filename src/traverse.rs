//! Visitor-driven traversals: cyclic repetition, deduplication, and strided
//! selection.
//!
//! Every function here walks its input slice exactly once per contract and
//! hands each produced element to a caller-supplied closure along with its
//! position and the originating slice. The closures capture whatever context
//! they need; nothing in this module allocates intermediate results.
//!
//! # Examples
//!
//! ```rust
//! use iterkit::traverse::{cycle, distinct, take_nth};
//!
//! let mut seen = Vec::new();
//! distinct(&[1, 1, 2, 3], |element, _, _| seen.push(*element));
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

use crate::equality::SameValue;
use crate::error::{IterError, IterResult};

/// Visits elements of `seq` in order, wrapping around to the start after the
/// last element, for exactly `n` total visits.
///
/// The visitor receives `(element, wrapped_index, seq)`. `n = 0` visits
/// nothing and succeeds even for an empty sequence.
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] if `seq` is empty and `n > 0`:
/// there is no element to wrap onto.
///
/// # Examples
///
/// ```rust
/// use iterkit::traverse::cycle;
///
/// let mut visited = Vec::new();
/// cycle(&[1, 2, 3], 5, |element, index, _| visited.push((*element, index)))?;
/// assert_eq!(visited, vec![(1, 0), (2, 1), (3, 2), (1, 0), (2, 1)]);
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn cycle<'a, T, F>(seq: &'a [T], n: usize, mut visit: F) -> IterResult<()>
where
    F: FnMut(&'a T, usize, &'a [T]),
{
    if n == 0 {
        return Ok(());
    }
    if seq.is_empty() {
        return Err(IterError::InvalidArgument {
            function: "cycle",
            message: "cannot cycle over an empty sequence",
        });
    }

    let mut index = 0;
    for _ in 0..n {
        visit(&seq[index], index, seq);
        index = (index + 1) % seq.len();
    }
    Ok(())
}

/// Visits each element of `seq` exactly once, in first-occurrence order,
/// skipping elements whose [`SameValue`]-equal counterpart was already
/// visited.
///
/// The visitor receives `(element, first_occurrence_index, seq)`. With
/// same-value semantics a run of `NaN`s is visited once, while `0.0` and
/// `-0.0` are visited separately.
///
/// Seen-tracking is a linear scan over the elements already visited, so the
/// whole traversal is `O(n * d)` for `d` distinct elements. The only bound on
/// the element type is [`SameValue`]; no hashing is required.
///
/// # Examples
///
/// ```rust
/// use iterkit::traverse::distinct;
///
/// let mut seen = Vec::new();
/// distinct(&[1, 1, 2, 3, 2], |element, index, _| seen.push((*element, index)));
/// assert_eq!(seen, vec![(1, 0), (2, 2), (3, 3)]);
/// ```
pub fn distinct<'a, T, F>(seq: &'a [T], mut visit: F)
where
    T: SameValue,
    F: FnMut(&'a T, usize, &'a [T]),
{
    let mut seen: Vec<&T> = Vec::new();

    for (index, element) in seq.iter().enumerate() {
        if seen.iter().any(|&known| known.same_value(element)) {
            continue;
        }
        seen.push(element);
        visit(element, index, seq);
    }
}

/// Visits every nth element of `seq`: the elements at 0-indexed positions
/// `n - 1, 2n - 1, 3n - 1, …`.
///
/// The visitor receives `(element, index, seq)`. If `n` exceeds the sequence
/// length, no visit occurs.
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] if `n == 0`.
///
/// # Examples
///
/// ```rust
/// use iterkit::traverse::take_nth;
///
/// let mut picked = Vec::new();
/// take_nth(&[1, 2, 3, 4, 5, 6, 7], 3, |element, _, _| picked.push(*element))?;
/// assert_eq!(picked, vec![3, 6]);
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn take_nth<'a, T, F>(seq: &'a [T], n: usize, mut visit: F) -> IterResult<()>
where
    F: FnMut(&'a T, usize, &'a [T]),
{
    if n == 0 {
        return Err(IterError::InvalidArgument {
            function: "take_nth",
            message: "stride must be greater than zero",
        });
    }

    let mut index = n - 1;
    while index < seq.len() {
        visit(&seq[index], index, seq);
        index += n;
    }
    Ok(())
}
