//! Output sinks for encoded text
//!
//! [`encode_to`] streams the encoded form of a byte slice into any
//! `io::Write` without materializing the whole result; [`XmlEncode`] wraps
//! a `&str` so it can be dropped straight into `write!`/`format!` chains.

use std::fmt;
use std::io;

use crate::core::encoder::Segments;
use crate::core::escape::Mode;

/// Encode `input` for `mode`, writing the result incrementally to `out`.
///
/// Each verbatim run and each replacement goes to the sink as it is
/// produced; nothing is buffered here beyond the sink's own buffering.
/// Errors are the sink's errors, surfaced unchanged. The encoding itself
/// cannot fail.
pub fn encode_to<W: io::Write>(input: &[u8], mode: Mode, out: &mut W) -> io::Result<()> {
    for segment in Segments::new(input, mode) {
        out.write_all(segment.as_bytes())?;
    }
    Ok(())
}

/// Borrowed string wrapper that escapes when displayed.
///
/// Input is already valid UTF-8, so the scanner never rejects a byte and
/// the segment boundaries all fall on character boundaries. That keeps the
/// `Display` impl total: every yielded segment is itself valid UTF-8.
pub struct XmlEncode<'a> {
    text: &'a str,
    mode: Mode,
}

impl<'a> XmlEncode<'a> {
    /// Escape for element character data.
    pub fn text(text: &'a str) -> XmlEncode<'a> {
        XmlEncode {
            text,
            mode: Mode::TextNode,
        }
    }

    /// Escape for a double-quoted attribute value.
    pub fn attribute(text: &'a str) -> XmlEncode<'a> {
        XmlEncode {
            text,
            mode: Mode::Attribute,
        }
    }
}

impl fmt::Display for XmlEncode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in Segments::new(self.text.as_bytes(), self.mode) {
            match std::str::from_utf8(segment.as_bytes()) {
                Ok(chunk) => f.write_str(chunk)?,
                // Unreachable for str input; refuse rather than panic.
                Err(_) => return Err(fmt::Error),
            }
        }
        Ok(())
    }
}
