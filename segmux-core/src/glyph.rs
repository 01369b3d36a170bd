//! Glyph matching
//!
//! The segment lines are not driven per digit. Instead the board cycles
//! through 15 glyphs, each one a fixed segment pattern, and for every
//! glyph selects the digit positions whose number contains that pattern.
//! Glyphs 0-9 are the numerals themselves; 10-14 are partial patterns
//! shared by several numerals. Slot 15 is blank.

/// Number of real glyphs (0-14)
pub const GLYPH_COUNT: u8 = 15;

/// Blank slot, used to pulse the digit-select reset instead of a byte
pub const BLANK_GLYPH: u8 = 15;

/// Check whether `digit` lights when `glyph` is active
///
/// Every digit owns its own glyph, 8 contains every pattern, and the
/// shared glyphs go to the digits listed in the table below.
pub fn glyph_matches(glyph: u8, digit: u8) -> bool {
    if glyph >= GLYPH_COUNT || digit > 9 {
        return false;
    }

    if glyph == digit || digit == 8 {
        return true;
    }

    match glyph {
        1 => matches!(digit, 0 | 3 | 4 | 7 | 9),
        5 => digit == 6,
        7 => matches!(digit, 0 | 3 | 9),
        10 => matches!(digit, 2 | 6),
        11 => matches!(digit, 3 | 5 | 6),
        12 => matches!(digit, 4 | 9),
        13 => matches!(digit, 5 | 6 | 9),
        14 => digit == 6,
        _ => false,
    }
}

/// Digit-select mask for one glyph
///
/// `value` holds one decimal digit per position, position 0 in the ones
/// place. Bit `n` of the result is set when the digit at position `n`
/// lights for `glyph`.
pub fn glyph_match_mask(value: u32, glyph: u8, digits: u8) -> u8 {
    let mut remaining = value;
    let mut mask = 0;

    for position in 0..digits.min(8) {
        if glyph_matches(glyph, (remaining % 10) as u8) {
            mask |= 1 << position;
        }
        remaining /= 10;
    }

    mask
}
