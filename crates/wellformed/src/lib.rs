//! Well-formedness checking and repair for UTF-16 code unit sequences.
//!
//! A `&[u16]` produced by splitting a string, slicing a pair in half, or
//! ingesting data from an environment with unchecked 16-bit strings may
//! contain *unpaired surrogates*: code units from the reserved surrogate
//! block that are not part of a valid high/low pair. Such a sequence cannot
//! be losslessly interpreted as Unicode text.
//!
//! This crate provides the two operations needed to deal with that:
//!
//! - [`is_well_formed`] — a single-pass, allocation-free predicate telling
//!   whether a sequence contains any unpaired surrogate.
//! - [`to_well_formed`] — a rewriter that replaces every unpaired surrogate
//!   with U+FFFD (the replacement character), returning the input unchanged
//!   and unallocated when it is already well-formed.
//!
//! Both are total functions: every possible `&[u16]` has a definite answer,
//! and there is no error type to handle.
//!
//! ```
//! use std::borrow::Cow;
//! use wellformed::{is_well_formed, to_well_formed};
//!
//! // "a" + lone high surrogate + "b"
//! let input = [0x0061, 0xD800, 0x0062];
//! assert!(!is_well_formed(&input));
//!
//! let fixed = to_well_formed(&input);
//! assert_eq!(&*fixed, &[0x0061, 0xFFFD, 0x0062]);
//! assert!(is_well_formed(&fixed));
//!
//! // Already well-formed input is handed back without copying.
//! assert!(matches!(to_well_formed(&fixed), Cow::Borrowed(_)));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod rewrite;
mod scan;
mod surrogate;


pub use rewrite::to_well_formed;
pub use scan::{first_unpaired, is_well_formed};
pub use surrogate::{
    CodeUnitClass, REPLACEMENT, classify, is_high_surrogate, is_low_surrogate, is_surrogate,
};
