//! Error taxonomy for iteration primitives.
//!
//! Every failure in this crate is raised at the point of the violated
//! precondition, before any visitor invocation or result construction for
//! that call. There is no partial output on failure and no internal recovery;
//! all errors surface directly to the caller.

use std::fmt::{self, Display, Formatter};

/// Result alias used by every fallible primitive in this crate.
pub type IterResult<T> = Result<T, IterError>;

/// Error type for sequence-iteration primitives.
///
/// # Examples
///
/// ```rust
/// use iterkit::IterError;
///
/// let error = IterError::InsufficientElements {
///     requested: 4,
///     available: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "insufficient elements: requested 4, sequence has 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterError {
    /// A configuration scalar violates its precondition: a zero stride or
    /// slice size, an empty sequence with a nonzero cycle count, or ragged
    /// input sequences.
    InvalidArgument {
        /// Name of the primitive that rejected its arguments.
        function: &'static str,
        /// Description of the violated precondition.
        message: &'static str,
    },

    /// More elements were requested than the sequence holds.
    ///
    /// Raised by `take_strict`; the check happens before any output exists,
    /// so the failure is all-or-nothing.
    InsufficientElements {
        /// Number of elements requested.
        requested: usize,
        /// Number of elements actually available.
        available: usize,
    },

    /// Combinatorial enumeration would exceed the documented ceiling.
    ///
    /// Raised by `subsets` when the deduplicated basis is too large for the
    /// `2^m` mask sweep to be representable.
    ResourceLimitExceeded {
        /// Count of distinct elements in the input.
        distinct: usize,
        /// Maximum supported count of distinct elements.
        limit: usize,
    },
}

impl Display for IterError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { function, message } => {
                write!(formatter, "{function}: {message}")
            }
            Self::InsufficientElements {
                requested,
                available,
            } => {
                write!(
                    formatter,
                    "insufficient elements: requested {requested}, sequence has {available}"
                )
            }
            Self::ResourceLimitExceeded { distinct, limit } => {
                write!(
                    formatter,
                    "resource limit exceeded: {distinct} distinct elements, \
                     subset enumeration supports at most {limit}"
                )
            }
        }
    }
}

impl std::error::Error for IterError {}
