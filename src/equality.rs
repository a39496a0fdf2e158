//! Same-value equality strategy for deduplication.
//!
//! Deduplication ([`distinct`](crate::traverse::distinct)) and the subset
//! basis ([`subsets`](crate::combinatorial::subsets)) decide whether two
//! elements are duplicates with the [`SameValue`] trait rather than plain
//! `PartialEq`, because the contract differs from IEEE 754 comparison for
//! floating-point values:
//!
//! - `NaN` is equal to itself (a sequence of `NaN`s deduplicates to one).
//! - `+0.0` and `-0.0` are **distinct** (same-value, not same-value-zero).
//! - For every other type the notion coincides with `==`.
//!
//! # Laws
//!
//! `SameValue` must be a genuine equivalence relation:
//!
//! - **Reflexivity**: `a.same_value(&a)` for all `a` (including `NaN`).
//! - **Symmetry**: `a.same_value(&b) == b.same_value(&a)`.
//! - **Transitivity**: `a ~ b` and `b ~ c` implies `a ~ c`.
//!
//! Note that `PartialEq` for floats is *not* reflexive (`NaN != NaN`), which
//! is exactly why this trait exists as a separate, pluggable strategy.
//!
//! # Examples
//!
//! ```rust
//! use iterkit::SameValue;
//!
//! assert!(f64::NAN.same_value(&f64::NAN));
//! assert!(!0.0_f64.same_value(&-0.0_f64));
//! assert!(42_i32.same_value(&42_i32));
//! ```

/// Equality under same-value semantics.
///
/// Implementations are provided for the primitive types, `String` / `&str`,
/// `Option<T>`, two- and three-element tuples, `Vec<T>`, and slices. Custom
/// element types can implement this trait to plug their own notion of
/// identity into `distinct` and `subsets`; for types whose `==` is already
/// reflexive, delegating to `PartialEq` is the right implementation.
pub trait SameValue {
    /// Returns `true` if `self` and `other` are the same value.
    fn same_value(&self, other: &Self) -> bool;
}

macro_rules! same_value_via_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl SameValue for $type {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_value_via_eq!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, String,
);

impl SameValue for str {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

// Bit-pattern comparison distinguishes the signed zeros; the NaN arm
// collapses every NaN payload into a single equivalence class.
impl SameValue for f32 {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl SameValue for f64 {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.same_value(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: SameValue, B: SameValue> SameValue for (A, B) {
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1)
    }
}

impl<A: SameValue, B: SameValue, C: SameValue> SameValue for (A, B, C) {
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0)
            && self.1.same_value(&other.1)
            && self.2.same_value(&other.2)
    }
}

impl<T: SameValue> SameValue for [T] {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.same_value(right))
    }
}

impl<T: SameValue> SameValue for Vec<T> {
    fn same_value(&self, other: &Self) -> bool {
        self.as_slice().same_value(other.as_slice())
    }
}

impl<T: SameValue + ?Sized> SameValue for &T {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }
}
