//! Core encoding primitives
//!
//! This module contains the building blocks of the byte-to-XML transform:
//! - Utf8: table-driven UTF-8 sequence scanning, non-strict (surrogates pass)
//! - Escape: per-byte escaping rules for text nodes and attribute values
//! - Encoder: the single-pass assembler and its segment iterator

pub mod encoder;
pub mod escape;
pub mod utf8;
