//! Single-pass encoding assembler
//!
//! Walks the input once, left to right, fusing UTF-8 validation with the
//! escaping rules:
//! - a valid multi-byte sequence is copied through opaquely
//! - a single ASCII byte goes through the escaping rules
//! - a byte starting no valid sequence becomes a `\xHH` literal, and the
//!   scan resumes at the very next byte
//!
//! The pass is total: any byte slice in, a well-formed result out, no error
//! paths. Output is produced as [`Segment`]s so every public surface (owned
//! buffer, append, `io::Write`, `Display`) folds over the same walk instead
//! of reimplementing it.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

use super::escape::{classify, hex_escape, Escape, Mode};
use super::utf8::sequence_len;

/// One piece of encoder output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A maximal run of input bytes copied through unchanged.
    Verbatim(&'a [u8]),
    /// A predefined entity replacing one input byte.
    Entity(&'static str),
    /// A `\xHH` literal replacing one control or invalid input byte.
    Hex([u8; 4]),
}

impl Segment<'_> {
    /// The output bytes this segment contributes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Segment::Verbatim(run) => run,
            Segment::Entity(entity) => entity.as_bytes(),
            Segment::Hex(hex) => hex.as_slice(),
        }
    }
}

/// Pull iterator over the encoded form of an input slice.
///
/// Yields maximal verbatim runs and single-byte replacements; concatenating
/// the yielded bytes gives the encoded output. The iterator owns the scan
/// cursor and the rolling two-character context for the `]]>` rule, so one
/// `next` loop is the entire algorithm.
pub struct Segments<'a> {
    input: &'a [u8],
    mode: Mode,
    pos: usize,
    // Rolling context: the literal values of the last two input bytes
    // processed, regardless of how they were rendered. Escaped bytes still
    // shift in their original value. 0x00 never equals b']', so the
    // initial state cannot satisfy the bracket rule.
    prev: u8,
    prev2: u8,
}

impl<'a> Segments<'a> {
    /// Create a segment iterator over `input` for the given output context.
    pub fn new(input: &'a [u8], mode: Mode) -> Segments<'a> {
        Segments {
            input,
            mode,
            pos: 0,
            prev: 0,
            prev2: 0,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        let mut p2 = self.prev2;
        let mut p1 = self.prev;

        while self.pos < self.input.len() {
            let byte = self.input[self.pos];
            let replacement = match sequence_len(self.input, self.pos) {
                // Valid multi-byte sequence: opaque to the escaper, the run
                // keeps growing. Context picks up the sequence's last two
                // bytes (lead or continuation, both >= 0x80, so never b']').
                Some(len) if len > 1 => {
                    p2 = self.input[self.pos + len - 2];
                    p1 = self.input[self.pos + len - 1];
                    self.pos += len;
                    continue;
                }
                // Single ASCII byte: ask the escaping rules.
                Some(_) => match classify(byte, self.mode, p1 == b']' && p2 == b']') {
                    Escape::Verbatim => {
                        p2 = p1;
                        p1 = byte;
                        self.pos += 1;
                        continue;
                    }
                    Escape::Entity(entity) => Segment::Entity(entity),
                    Escape::Hex(hex) => Segment::Hex(hex),
                },
                // No valid sequence starts here. Substitute this one byte
                // and resynchronize at the next.
                None => Segment::Hex(hex_escape(byte)),
            };

            if self.pos > start {
                // A verbatim run is pending; emit it first and revisit the
                // replaced byte on the next call.
                break;
            }
            self.prev2 = p1;
            self.prev = byte;
            self.pos += 1;
            return Some(replacement);
        }

        self.prev2 = p2;
        self.prev = p1;
        Some(Segment::Verbatim(&self.input[start..self.pos]))
    }
}

/// Fast check whether any byte would be rewritten.
///
/// Two sweeps, no allocation: a SIMD search for the unconditionally escaped
/// bytes, then a scalar pass for control bytes and the `]]>` pattern. The
/// check is conservative for non-ASCII input (any byte >= 0x80 reports
/// true, even though a valid sequence would be copied through), which keeps
/// it cheap; such inputs just take the allocating path below.
fn needs_encoding(input: &[u8], mode: Mode) -> bool {
    let found = match mode {
        Mode::TextNode => memchr2(b'&', b'<', input),
        Mode::Attribute => memchr3(b'&', b'<', b'"', input),
    };
    if found.is_some() {
        return true;
    }
    let mut brackets = 0usize;
    for &byte in input {
        match byte {
            b']' => brackets += 1,
            b'>' if brackets >= 2 => return true,
            b'\t' | b'\n' | b'\r' | 0x20..=0x7E => brackets = 0,
            _ => return true, // other control byte, DEL, or non-ASCII
        }
    }
    false
}

/// Encode `input` for embedding in the given XML context.
///
/// Total over all byte slices. Borrows the input when the fast pre-scan
/// proves nothing needs rewriting, which covers the common case of plain
/// ASCII text; otherwise allocates exactly one output buffer.
pub fn encode(input: &[u8], mode: Mode) -> Cow<'_, [u8]> {
    if !needs_encoding(input, mode) {
        return Cow::Borrowed(input);
    }
    let mut out = Vec::with_capacity(input.len() + 16);
    encode_into(input, mode, &mut out);
    Cow::Owned(out)
}

/// Encode `input` and append the result to an existing buffer.
///
/// Existing contents of `out` are left untouched.
pub fn encode_into(input: &[u8], mode: Mode, out: &mut Vec<u8>) {
    for segment in Segments::new(input, mode) {
        out.extend_from_slice(segment.as_bytes());
    }
}

// =============================================================================
// Tests
// =============================================================================
