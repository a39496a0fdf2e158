//! Parallel mapping over multiple sequences and successive application.

use crate::error::{IterError, IterResult};

/// Maps `f` over the supplied sequences in parallel, one invocation per
/// index, collecting results in index order.
///
/// For each index `i` in `0..seqs[0].len()`, `f` receives the `i`-th element
/// of every sequence, first sequence first. The first sequence's length is
/// authoritative; with zero sequences the result is empty and `f` is never
/// invoked.
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] if any later sequence is shorter
/// than the first, before `f` is invoked at all. Longer trailing sequences
/// are fine; their excess elements are simply never read.
///
/// # Examples
///
/// ```rust
/// use iterkit::apply::imap;
///
/// let sums = imap(&[&[1, 2, 3], &[10, 20, 30]], |row| {
///     row.iter().map(|element| **element).sum::<i32>()
/// })?;
/// assert_eq!(sums, vec![11, 22, 33]);
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn imap<'a, T, R, F>(seqs: &[&'a [T]], mut f: F) -> IterResult<Vec<R>>
where
    F: FnMut(&[&'a T]) -> R,
{
    let Some(first) = seqs.first() else {
        return Ok(Vec::new());
    };

    if seqs.iter().any(|seq| seq.len() < first.len()) {
        return Err(IterError::InvalidArgument {
            function: "imap",
            message: "every sequence must be at least as long as the first",
        });
    }

    let mut results = Vec::with_capacity(first.len());
    let mut row: Vec<&'a T> = Vec::with_capacity(seqs.len());

    for index in 0..first.len() {
        row.clear();
        row.extend(seqs.iter().map(|seq| &seq[index]));
        results.push(f(&row));
    }
    Ok(results)
}

/// Produces the length-`n` sequence `[x0, f(x0), f(f(x0)), …]`: the `i`-th
/// output is `f` applied `i` times to `x0`.
///
/// Exactly `n` results are produced from exactly `n - 1` applications of
/// `f`; `n = 0` returns an empty vector with zero applications.
///
/// # Examples
///
/// ```rust
/// use iterkit::apply::iterate;
///
/// let doubled = iterate(1, 5, |x| x * 2);
/// assert_eq!(doubled, vec![1, 2, 4, 8, 16]);
///
/// let none: Vec<i32> = iterate(1, 0, |x| x + 1);
/// assert!(none.is_empty());
/// ```
pub fn iterate<T, F>(x0: T, n: usize, mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    let mut results = Vec::with_capacity(n);
    if n == 0 {
        return results;
    }

    let mut current = x0;
    for _ in 0..n - 1 {
        let next = f(current.clone());
        results.push(current);
        current = next;
    }
    results.push(current);
    results
}
