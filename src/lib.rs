//! xmlsafe - defensive encoding of arbitrary bytes for XML output
//!
//! Turns any byte sequence, valid UTF-8 or not, into bytes that are both
//! well-formed UTF-8 and safe to embed in an XML document:
//! - valid multi-byte sequences pass through untouched (surrogate halves
//!   included; scanning is non-strict)
//! - `&`, `<`, the `>` of a literal `]]>`, and quotes in attribute values
//!   become predefined entities
//! - other control characters and bytes that break UTF-8 become readable
//!   uppercase `\xHH` literals, one per offending byte
//!
//! The transform is total and single-pass: no input can fail it, and bad
//! bytes never mask the valid text around them. It is intentionally not
//! idempotent; encoding already-encoded text escapes the entity ampersands
//! again.
//!
//! Surfaces:
//! - `encode` / `encode_into`: owned buffer, zero-copy when nothing changes
//! - `encode_to`: stream into any `io::Write`
//! - `XmlEncode`: `Display` adapter for `&str` in format strings
//! - `encode_batch`: parallel over independent inputs
//! - `Segments`: the raw segment iterator for custom sinks

mod core;
mod parallel;
mod writer;

pub use crate::core::encoder::{encode, encode_into, Segment, Segments};
pub use crate::core::escape::Mode;
pub use crate::parallel::encode_batch;
pub use crate::writer::{encode_to, XmlEncode};
