//! Single-pass validity scan over UTF-16 code unit sequences.
//!
//! The scan and the rewriter in [`crate::rewrite`] share one pairing rule: a
//! high surrogate at `i` followed by a low surrogate at `i + 1` consumes both
//! positions atomically, so the low half is never re-examined as a candidate
//! lone surrogate. The index therefore jumps by 2 across a matched pair.

use crate::surrogate::{CodeUnitClass, classify, is_low_surrogate};

/// Returns the index of the first unpaired surrogate in `units`, or `None`
/// when the sequence is well-formed.
///
/// Runs in O(n) with no allocation; an empty slice yields `None`.
#[must_use]
pub fn first_unpaired(units: &[u16]) -> Option<usize> {
    let mut i = 0;
    while i < units.len() {
        match classify(units[i]) {
            CodeUnitClass::Other => i += 1,
            CodeUnitClass::HighSurrogate => {
                match units.get(i + 1) {
                    // Matched pair: consume both halves.
                    Some(&next) if is_low_surrogate(next) => i += 2,
                    // End of input, or followed by anything that is not a
                    // low surrogate (including another high surrogate).
                    _ => return Some(i),
                }
            }
            // Reachable only when not consumed by a preceding high half.
            CodeUnitClass::LowSurrogate => return Some(i),
        }
    }
    None
}

/// Returns `true` when `units` contains no unpaired surrogate.
///
/// Equivalent to [`first_unpaired`]`(units).is_none()`; a single linear
/// pass that short-circuits at the first defect.
#[inline]
#[must_use]
pub fn is_well_formed(units: &[u16]) -> bool {
    first_unpaired(units).is_none()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{first_unpaired, is_well_formed};

    #[test]
    fn empty_is_well_formed() {
        assert!(is_well_formed(&[]));
        assert_eq!(first_unpaired(&[]), None);
    }

    #[test]
    fn plain_bmp_text_is_well_formed() {
        let units: Vec<u16> = "hello, wörld".encode_utf16().collect();
        assert!(is_well_formed(&units));
    }

    #[test]
    fn valid_pair_is_well_formed() {
        assert!(is_well_formed(&[0xD800, 0xDC00]));
        assert!(is_well_formed(&[0x0041, 0xD83D, 0xDE00, 0x0042]));
    }

    #[test]
    fn trailing_high_surrogate_is_not() {
        assert!(!is_well_formed(&[0xD800]));
        assert_eq!(first_unpaired(&[0x0041, 0xD800]), Some(1));
    }

    #[test]
    fn leading_low_surrogate_is_not() {
        assert!(!is_well_formed(&[0xDC00, 0x0041]));
        assert_eq!(first_unpaired(&[0xDC00, 0x0041]), Some(0));
    }

    #[test]
    fn high_followed_by_non_low_is_not() {
        assert_eq!(first_unpaired(&[0xD800, 0x0041]), Some(0));
        // A second high surrogate does not pair either.
        assert_eq!(first_unpaired(&[0xD800, 0xD800, 0xDC00]), Some(0));
    }

    #[test]
    fn consumed_low_half_is_not_reexamined() {
        // The low half at index 1 belongs to the pair; the scan must resume
        // at index 2 and flag the lone low surrogate there.
        assert_eq!(first_unpaired(&[0xD800, 0xDC00, 0xDC00]), Some(2));
    }

    #[test]
    fn back_to_back_pairs() {
        assert!(is_well_formed(&[0xD800, 0xDC00, 0xDBFF, 0xDFFF]));
    }

    #[test]
    fn low_then_high_pair() {
        // The lone low at index 0 is the first defect even though a valid
        // pair follows.
        assert_eq!(first_unpaired(&[0xDFFF, 0xD800, 0xDC00]), Some(0));
    }
}
