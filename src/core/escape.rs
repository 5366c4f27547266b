//! Per-byte escaping rules
//!
//! Decides, for a single ASCII byte, whether it passes through verbatim, is
//! replaced by a predefined entity reference, or is rendered as a readable
//! `\xHH` literal. Multi-byte sequences never reach these rules; the
//! assembler copies them through opaquely.
//!
//! The rules depend on two pieces of context supplied by the caller: the
//! output [`Mode`] and whether the two input characters immediately before
//! the byte were both `]` (the CDATA terminator rule for `>`).

/// Which XML context the output will be embedded in.
///
/// Selects the escaping rules. Attribute values additionally escape `"`,
/// since the surrounding writer always delimits attributes with double
/// quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Character data inside an element.
    TextNode,
    /// A double-quoted attribute value.
    Attribute,
}

/// Decision for one ASCII byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Safe in this context, copy through unchanged.
    Verbatim,
    /// Replace with a predefined entity reference.
    Entity(&'static str),
    /// Replace with an uppercase `\xHH` literal.
    Hex([u8; 4]),
}

/// Apply the escaping rules to one ASCII byte.
///
/// `after_brackets` reports whether the two input characters immediately
/// preceding this byte were both `]`. Rule order matters: tab, newline and
/// carriage return pass before the control-character rule claims them.
#[inline]
pub fn classify(byte: u8, mode: Mode, after_brackets: bool) -> Escape {
    match byte {
        b'\t' | b'\n' | b'\r' => Escape::Verbatim,
        0x00..=0x1F | 0x7F => Escape::Hex(hex_escape(byte)),
        b'&' => Escape::Entity("&amp;"),
        b'<' => Escape::Entity("&lt;"),
        b'>' if after_brackets => Escape::Entity("&gt;"),
        b'"' if mode == Mode::Attribute => Escape::Entity("&quot;"),
        _ => Escape::Verbatim,
    }
}

/// Format a byte as the 4-byte literal `\xHH` with uppercase hex digits.
///
/// Shared by the control-character rule and the assembler's invalid-byte
/// substitution; both render identically.
#[inline]
pub fn hex_escape(byte: u8) -> [u8; 4] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    [
        b'\\',
        b'x',
        HEX_DIGITS[(byte >> 4) as usize],
        HEX_DIGITS[(byte & 0x0F) as usize],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_escape_is_uppercase() {
        assert_eq!(&hex_escape(0x01), b"\\x01");
        assert_eq!(&hex_escape(0x7F), b"\\x7F");
        assert_eq!(&hex_escape(0xAB), b"\\xAB");
        assert_eq!(&hex_escape(0xFF), b"\\xFF");
    }

    #[test]
    fn test_whitespace_controls_pass() {
        for byte in [b'\t', b'\n', b'\r'] {
            assert_eq!(classify(byte, Mode::TextNode, false), Escape::Verbatim);
            assert_eq!(classify(byte, Mode::Attribute, false), Escape::Verbatim);
        }
    }

    #[test]
    fn test_other_controls_become_hex() {
        for byte in [0x00, 0x01, 0x08, 0x0B, 0x0C, 0x0E, 0x1F, 0x7F] {
            assert_eq!(
                classify(byte, Mode::TextNode, false),
                Escape::Hex(hex_escape(byte)),
                "byte 0x{:02X}",
                byte
            );
        }
    }

    #[test]
    fn test_markup_entities() {
        assert_eq!(classify(b'&', Mode::TextNode, false), Escape::Entity("&amp;"));
        assert_eq!(classify(b'<', Mode::TextNode, false), Escape::Entity("&lt;"));
    }

    #[test]
    fn test_greater_than_needs_bracket_context() {
        assert_eq!(classify(b'>', Mode::TextNode, false), Escape::Verbatim);
        assert_eq!(classify(b'>', Mode::TextNode, true), Escape::Entity("&gt;"));
        assert_eq!(classify(b'>', Mode::Attribute, true), Escape::Entity("&gt;"));
    }

    #[test]
    fn test_quote_escaped_only_in_attributes() {
        assert_eq!(classify(b'"', Mode::TextNode, false), Escape::Verbatim);
        assert_eq!(classify(b'"', Mode::Attribute, false), Escape::Entity("&quot;"));
    }

    #[test]
    fn test_apostrophe_never_escaped() {
        assert_eq!(classify(b'\'', Mode::TextNode, false), Escape::Verbatim);
        assert_eq!(classify(b'\'', Mode::Attribute, false), Escape::Verbatim);
    }

    #[test]
    fn test_plain_printable_passes() {
        for byte in [b'a', b'Z', b'0', b' ', b'~', b']', b'.'] {
            assert_eq!(classify(byte, Mode::Attribute, false), Escape::Verbatim);
        }
    }
}
