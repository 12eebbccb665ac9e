//! Classification of UTF-16 code units by surrogate range.
//!
//! The surrogate block 0xD800..=0xDFFF splits into a leading (high) half and
//! a trailing (low) half; every other `u16` is a complete BMP code unit on
//! its own. The predicates compare against the range with a single mask so
//! the hot loops stay branch-cheap.

/// The Unicode replacement character U+FFFD as a single UTF-16 code unit.
///
/// [`to_well_formed`](crate::to_well_formed) writes this over every unpaired
/// surrogate it finds.
pub const REPLACEMENT: u16 = 0xFFFD;

/// The three-way partition of `u16` values used by the pairing walk.
///
/// Every 16-bit value has exactly one class; classification is total and
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeUnitClass {
    /// Leading half of a surrogate pair, 0xD800..=0xDBFF.
    HighSurrogate,
    /// Trailing half of a surrogate pair, 0xDC00..=0xDFFF.
    LowSurrogate,
    /// Any code unit outside the surrogate block, valid on its own.
    Other,
}

/// Classifies a single code unit.
#[inline]
#[must_use]
pub fn classify(unit: u16) -> CodeUnitClass {
    if is_high_surrogate(unit) {
        CodeUnitClass::HighSurrogate
    } else if is_low_surrogate(unit) {
        CodeUnitClass::LowSurrogate
    } else {
        CodeUnitClass::Other
    }
}

/// Returns `true` for code units in the leading surrogate range
/// (0xD800..=0xDBFF).
#[inline]
#[must_use]
pub fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

/// Returns `true` for code units in the trailing surrogate range
/// (0xDC00..=0xDFFF).
#[inline]
#[must_use]
pub fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

/// Returns `true` for any code unit in the surrogate block
/// (0xD800..=0xDFFF), leading or trailing.
#[inline]
#[must_use]
pub fn is_surrogate(unit: u16) -> bool {
    unit & 0xF800 == 0xD800
}
