//! Rewriting arbitrary code unit sequences into well-formed UTF-16.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::scan::first_unpaired;
use crate::surrogate::{CodeUnitClass, REPLACEMENT, classify, is_low_surrogate};

/// Returns a well-formed version of `units`, replacing every unpaired
/// surrogate with U+FFFD.
///
/// Already well-formed input comes back as [`Cow::Borrowed`] with no
/// allocation. Otherwise a single buffer of the same length is allocated:
/// the clean prefix located by the validity scan is copied wholesale, and
/// the pairing walk resumes at the first defect. Input and output always
/// have the same length, every position outside an unpaired surrogate is
/// copied verbatim, and the result satisfies
/// [`is_well_formed`](crate::is_well_formed) — which also makes the
/// operation idempotent.
#[must_use]
pub fn to_well_formed(units: &[u16]) -> Cow<'_, [u16]> {
    let Some(defect) = first_unpaired(units) else {
        return Cow::Borrowed(units);
    };

    let mut out = Vec::with_capacity(units.len());
    out.extend_from_slice(&units[..defect]);
    out.push(REPLACEMENT);

    // Same pairing walk as the scan, but emitting instead of
    // short-circuiting: a matched pair advances the index by 2 so its low
    // half is never revisited as a lone surrogate.
    let mut i = defect + 1;
    while i < units.len() {
        let unit = units[i];
        match classify(unit) {
            CodeUnitClass::Other => {
                out.push(unit);
                i += 1;
            }
            CodeUnitClass::HighSurrogate => match units.get(i + 1) {
                Some(&next) if is_low_surrogate(next) => {
                    out.push(unit);
                    out.push(next);
                    i += 2;
                }
                _ => {
                    out.push(REPLACEMENT);
                    i += 1;
                }
            },
            CodeUnitClass::LowSurrogate => {
                out.push(REPLACEMENT);
                i += 1;
            }
        }
    }

    debug_assert_eq!(out.len(), units.len());
    Cow::Owned(out)
}
