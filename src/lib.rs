//! # iterkit
//!
//! Higher-order sequence-iteration primitives: controlled traversal patterns
//! applied to finite, in-memory, ordered sequences.
//!
//! ## Overview
//!
//! Each primitive is an independent, pure function over a slice (or slices)
//! and a caller-supplied visitor closure. No function mutates its input and
//! no state survives a call:
//!
//! - **Traversal**: [`traverse::cycle`], [`traverse::distinct`],
//!   [`traverse::take_nth`]
//! - **Partitioning**: [`partition::slices`], [`partition::group_by`],
//!   [`partition::take_strict`]
//! - **Combinatorial generation**: [`combinatorial::cartesian_product`],
//!   [`combinatorial::subsets`]
//! - **Counted repetition**: [`range::times`], [`range::count`]
//! - **Mapping & application**: [`apply::imap`], [`apply::iterate`]
//!
//! Deduplication (and the subset basis derived from it) uses the
//! [`SameValue`](equality::SameValue) equality strategy: `NaN` is equal to
//! itself and `+0.0` / `-0.0` are distinct. Grouping uses exact `==` equality
//! on caller-extracted keys.
//!
//! ## Feature Flags
//!
//! - `traverse`: cyclic repetition, deduplication, strided selection
//! - `partition`: fixed-size slicing, grouping, strict bounded extraction
//! - `combinatorial`: cartesian product and power-set enumeration
//! - `range`: bounded and unbounded counted repetition
//! - `apply`: parallel mapping and successive application
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use iterkit::prelude::*;
//!
//! let mut wrapped = Vec::new();
//! cycle(&[1, 2, 3], 5, |element, _, _| wrapped.push(*element))?;
//! assert_eq!(wrapped, vec![1, 2, 3, 1, 2]);
//! # Ok::<(), iterkit::IterError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and types.
///
/// # Usage
///
/// ```rust
/// use iterkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::equality::SameValue;
    pub use crate::error::{IterError, IterResult};

    #[cfg(feature = "traverse")]
    pub use crate::traverse::*;

    #[cfg(feature = "partition")]
    pub use crate::partition::*;

    #[cfg(feature = "combinatorial")]
    pub use crate::combinatorial::*;

    #[cfg(feature = "range")]
    pub use crate::range::*;

    #[cfg(feature = "apply")]
    pub use crate::apply::*;
}

pub mod equality;
pub mod error;

#[cfg(feature = "traverse")]
pub mod traverse;

#[cfg(feature = "partition")]
pub mod partition;

#[cfg(feature = "combinatorial")]
pub mod combinatorial;

#[cfg(feature = "range")]
pub mod range;

#[cfg(feature = "apply")]
pub mod apply;

pub use equality::SameValue;
pub use error::{IterError, IterResult};
