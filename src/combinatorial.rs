//! Combinatorial generation: cartesian products and power-set enumeration.
//!
//! `subsets` is the one CPU/memory hazard in the toolkit: its cost is
//! exponential in the count of *distinct* input elements. The ceiling is
//! explicit ([`MAX_SUBSET_BASIS`]) and enforced up front; below the ceiling
//! the exponential sweep is the documented contract, not an oversight.

use smallvec::SmallVec;

use crate::equality::SameValue;
use crate::error::{IterError, IterResult};
use crate::traverse::distinct;

/// Maximum count of distinct elements `subsets` accepts.
///
/// The enumeration sweeps one `u64` bitmask per subset, so a basis of more
/// than 63 distinct elements cannot be represented. Long before that bound
/// the sweep itself is infeasible: `2^m` subsets are produced for `m`
/// distinct elements.
pub const MAX_SUBSET_BASIS: usize = 63;

/// Stack-allocated subset threshold; larger subsets spill to the heap.
const SMALL_SUBSET: usize = 8;

/// Visits every ordered pair `(a, b)` with `a` from `seq_a` and `b` from
/// `seq_b`, in row-major order: the outer loop runs over `seq_a`, the inner
/// over `seq_b`.
///
/// The visitor receives the pair, both positional indices, and both source
/// slices. The total visit count is `seq_a.len() * seq_b.len()`; if either
/// sequence is empty nothing is visited. The two element types may differ.
///
/// # Examples
///
/// ```rust
/// use iterkit::combinatorial::cartesian_product;
///
/// let mut products = Vec::new();
/// cartesian_product(&[1, 2], &[3, 4], |(a, b), _, _, _, _| products.push(a * b));
/// assert_eq!(products, vec![3, 4, 6, 8]);
/// ```
pub fn cartesian_product<'a, 'b, A, B, F>(seq_a: &'a [A], seq_b: &'b [B], mut visit: F)
where
    F: FnMut((&'a A, &'b B), usize, usize, &'a [A], &'b [B]),
{
    for (index_a, a) in seq_a.iter().enumerate() {
        for (index_b, b) in seq_b.iter().enumerate() {
            visit((a, b), index_a, index_b, seq_a, seq_b);
        }
    }
}

/// Enumerates subsets of the distinct elements of `seq`.
///
/// The input is first deduplicated with [`SameValue`] semantics into a basis
/// of `m` distinct elements in first-occurrence order. All `2^m` subsets of
/// that basis are then enumerated exactly once, the empty subset and the
/// full basis included, following the bitmask correspondence: the subset for
/// mask `k` contains basis element `i` iff bit `i` of `k` is set, elements
/// listed in increasing basis index order.
///
/// With `size_filter = Some(s)`, only subsets of exactly `s` elements reach
/// the visitor; the mask sweep still covers all `2^m` masks. The visitor
/// receives each subset as a slice of references into `seq`.
///
/// # Errors
///
/// Returns [`IterError::ResourceLimitExceeded`] before any visit if the
/// basis exceeds [`MAX_SUBSET_BASIS`] distinct elements.
///
/// # Cost
///
/// Exponential: `2^m` subsets for `m` distinct elements. Callers own the
/// decision that `m` is small enough to sweep.
///
/// # Examples
///
/// ```rust
/// use iterkit::combinatorial::subsets;
///
/// let mut all = Vec::new();
/// subsets(&[1, 2, 3], None, |subset| {
///     all.push(subset.iter().map(|element| **element).collect::<Vec<_>>());
/// })?;
/// assert_eq!(all.len(), 8);
/// assert!(all.contains(&vec![]));
/// assert!(all.contains(&vec![1, 2, 3]));
/// # Ok::<(), iterkit::IterError>(())
/// ```
///
/// Fixed-size combinations:
///
/// ```rust
/// use iterkit::combinatorial::subsets;
///
/// let mut pairs = Vec::new();
/// subsets(&[1, 2, 3], Some(2), |subset| {
///     pairs.push(subset.iter().map(|element| **element).collect::<Vec<_>>());
/// })?;
/// assert_eq!(pairs, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn subsets<'a, T, F>(seq: &'a [T], size_filter: Option<usize>, mut visit: F) -> IterResult<()>
where
    T: SameValue,
    F: FnMut(&[&'a T]),
{
    let mut basis: Vec<&'a T> = Vec::new();
    distinct(seq, |element, _, _| basis.push(element));

    if basis.len() > MAX_SUBSET_BASIS {
        return Err(IterError::ResourceLimitExceeded {
            distinct: basis.len(),
            limit: MAX_SUBSET_BASIS,
        });
    }

    let mask_count: u64 = 1 << basis.len();
    let mut subset: SmallVec<[&'a T; SMALL_SUBSET]> = SmallVec::new();

    for mask in 0..mask_count {
        subset.clear();
        let mut remaining = mask;
        let mut bit = 0;
        while remaining > 0 {
            if remaining & 1 == 1 {
                subset.push(basis[bit]);
            }
            remaining >>= 1;
            bit += 1;
        }

        if size_filter.is_none_or(|size| subset.len() == size) {
            visit(&subset);
        }
    }
    Ok(())
}
