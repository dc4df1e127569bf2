//! Interval coalescing.
//!
//! This crate provides closed integer intervals and the merge routine that
//! reduces an unordered collection of them to the minimal sorted set of
//! disjoint, non-touching intervals covering the same points.
//!
//! # Key Types
//!
//! - [`Interval`] — Closed range `[start, end]` with `start <= end` enforced at construction
//! - [`IntervalSet`] — Collection kept in merged form across inserts and unions
//! - [`IntervalError`] — Validation and parse failures
//!
//! # Example
//!
//! ```
//! use coalesce_core::{merge, Interval};
//!
//! let input = [
//!     Interval::new(1, 3).unwrap(),
//!     Interval::new(2, 6).unwrap(),
//!     Interval::new(8, 10).unwrap(),
//! ];
//! let merged = merge(&input);
//! assert_eq!(merged, vec![Interval::new(1, 6).unwrap(), Interval::new(8, 10).unwrap()]);
//! ```

pub mod error;
pub mod interval;
pub mod merge;
pub mod set;

pub use error::{IntervalError, IntervalResult};
pub use interval::Interval;
pub use merge::{is_merged, merge, merge_pairs, validate_pairs};
pub use set::IntervalSet;
