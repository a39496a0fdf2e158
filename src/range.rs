//! Bounded and unbounded counted repetition.
//!
//! `times` and `count` drive a visitor over a stepped index range. Both can
//! run without an upper bound, so their visitors return
//! [`ControlFlow`](std::ops::ControlFlow): `Break(())` stops the driver.
//! This is the cancellation contract for unbounded runs — the toolkit holds
//! no threads or timers, so stopping is purely a control-flow agreement
//! between visitor and driver. A bounded run may also break early.

use std::ops::ControlFlow;

use crate::error::{IterError, IterResult};

/// Invokes `visit(i)` for `i = 0, step, 2 * step, …` while `i < n`.
///
/// With `n = None` the iteration is unbounded: it continues until the
/// visitor returns [`ControlFlow::Break`]. With `n = Some(0)` (or any bound
/// the first index already reaches) the visitor is never invoked.
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] if `step == 0`, which would revisit
/// index 0 forever with no progress.
///
/// # Examples
///
/// ```rust
/// use std::ops::ControlFlow;
/// use iterkit::range::times;
///
/// let mut indices = Vec::new();
/// times(Some(10), 3, |i| {
///     indices.push(i);
///     ControlFlow::Continue(())
/// })?;
/// assert_eq!(indices, vec![0, 3, 6, 9]);
/// # Ok::<(), iterkit::IterError>(())
/// ```
///
/// Unbounded iteration stopped by the visitor:
///
/// ```rust
/// use std::ops::ControlFlow;
/// use iterkit::range::times;
///
/// let mut total = 0;
/// times(None, 1, |i| {
///     total += i;
///     if total > 100 {
///         ControlFlow::Break(())
///     } else {
///         ControlFlow::Continue(())
///     }
/// })?;
/// assert_eq!(total, 105);
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn times<F>(n: Option<u64>, step: u64, mut visit: F) -> IterResult<()>
where
    F: FnMut(u64) -> ControlFlow<()>,
{
    if step == 0 {
        return Err(IterError::InvalidArgument {
            function: "times",
            message: "step must be greater than zero",
        });
    }

    let mut index: u64 = 0;
    loop {
        if let Some(bound) = n
            && index >= bound
        {
            return Ok(());
        }
        if visit(index).is_break() {
            return Ok(());
        }
        index = match index.checked_add(step) {
            Some(next) => next,
            None => return Ok(()),
        };
    }
}

/// Invokes `visit(i)` over the stepped range from `start` towards the
/// exclusive bound `end`.
///
/// A positive `step` ascends while `i < end`; a negative `step` descends
/// while `i > end`. With `end = None` the iteration is unbounded in the
/// direction of `step` until the visitor returns [`ControlFlow::Break`] or
/// the index leaves the representable range. An `end` already past `start`
/// in the step direction yields zero invocations.
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] if `step == 0`.
///
/// # Examples
///
/// ```rust
/// use std::ops::ControlFlow;
/// use iterkit::range::count;
///
/// let mut ascending = Vec::new();
/// count(2, Some(11), 3, |i| {
///     ascending.push(i);
///     ControlFlow::Continue(())
/// })?;
/// assert_eq!(ascending, vec![2, 5, 8]);
///
/// let mut descending = Vec::new();
/// count(5, Some(0), -1, |i| {
///     descending.push(i);
///     ControlFlow::Continue(())
/// })?;
/// assert_eq!(descending, vec![5, 4, 3, 2, 1]);
/// # Ok::<(), iterkit::IterError>(())
/// ```
pub fn count<F>(start: i64, end: Option<i64>, step: i64, mut visit: F) -> IterResult<()>
where
    F: FnMut(i64) -> ControlFlow<()>,
{
    if step == 0 {
        return Err(IterError::InvalidArgument {
            function: "count",
            message: "step must be non-zero",
        });
    }

    let mut index = start;
    loop {
        if let Some(bound) = end {
            let in_range = if step > 0 { index < bound } else { index > bound };
            if !in_range {
                return Ok(());
            }
        }
        if visit(index).is_break() {
            return Ok(());
        }
        index = match index.checked_add(step) {
            Some(next) => next,
            None => return Ok(()),
        };
    }
}
