//! UTF-8 sequence scanning
//!
//! Classifies the byte at a scan position as the start of a complete, valid
//! UTF-8 sequence or as invalid. Classification is non-strict: surrogate
//! halves (U+D800-U+DFFF encoded as 3-byte sequences) are accepted, since
//! the encoder's job is defensive passthrough, not Unicode policing.
//!
//! The per-leading-byte sequence length lives in a 256-entry table so the
//! whole classification is auditable at a glance and boundary cases can be
//! tested exhaustively.

/// Total sequence length implied by each possible leading byte.
///
/// 1 for ASCII, 2-4 for multi-byte leads, 0 for bytes that can never begin
/// a sequence: stray continuation bytes (0x80-0xBF), the overlong-only
/// leads 0xC0/0xC1, and 0xF5-0xFF which would encode past U+10FFFF.
static UTF8_SEQ_LEN: [u8; 256] = [
    // 0x00-0x7F: ASCII
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    // 0x80-0xBF: continuation bytes, never valid in lead position
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0xC0-0xDF: 2-byte leads (0xC0/0xC1 could only encode overlong forms)
    0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    // 0xE0-0xEF: 3-byte leads
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    // 0xF0-0xF4: 4-byte leads; 0xF5-0xFF would exceed U+10FFFF
    4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Check if a byte is a UTF-8 continuation byte (0x80-0xBF)
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Inclusive bounds for the first continuation byte of a multi-byte lead.
///
/// Most leads accept the full 0x80-0xBF range. 0xE0 and 0xF0 raise the
/// lower bound to reject overlong encodings; 0xF4 lowers the upper bound so
/// the code point cannot exceed U+10FFFF. 0xED is deliberately left
/// unconstrained: surrogate halves pass (non-strict scanning).
#[inline]
fn first_continuation_bounds(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// Length of the valid UTF-8 sequence beginning at `at`, or None if no
/// valid sequence starts there.
///
/// A multi-byte candidate is valid only if all its continuation bytes exist
/// within bounds, each falls in 0x80-0xBF, and the overlong/range guards on
/// the first continuation byte hold. On None the caller is expected to
/// advance by exactly one byte; a malformed run is never skipped wholesale,
/// so scanning resynchronizes on the next possible lead.
pub fn sequence_len(input: &[u8], at: usize) -> Option<usize> {
    let lead = *input.get(at)?;
    match UTF8_SEQ_LEN[lead as usize] as usize {
        0 => None,
        1 => Some(1),
        len => {
            if at + len > input.len() {
                return None; // truncated at end of input
            }
            let (lo, hi) = first_continuation_bounds(lead);
            let first = input[at + 1];
            if first < lo || first > hi {
                return None;
            }
            if !input[at + 2..at + len].iter().all(|&b| is_continuation(b)) {
                return None;
            }
            Some(len)
        }
    }
}
