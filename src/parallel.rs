//! Parallel batch encoding
//!
//! Encoding is a pure function of one input slice, so a batch of
//! independent inputs parallelizes with no shared state. Rayon's work
//! stealing handles the uneven cost of mixed clean/dirty inputs.

use rayon::prelude::*;

use crate::core::encoder::encode;
use crate::core::escape::Mode;

/// Encode every input in the batch, in parallel, preserving order.
///
/// Results come back owned; the zero-copy fast path is not worth plumbing
/// through a parallel collect.
pub fn encode_batch(inputs: &[&[u8]], mode: Mode) -> Vec<Vec<u8>> {
    inputs
        .par_iter()
        .map(|input| encode(input, mode).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_matches_sequential() {
        let inputs: [&[u8]; 5] = [
            b"plain",
            b"a&b",
            b"\xFF\xFE",
            b"]]> inside",
            b"say \"hi\"",
        ];
        for mode in [Mode::TextNode, Mode::Attribute] {
            let batch = encode_batch(&inputs, mode);
            let sequential: Vec<Vec<u8>> = inputs
                .iter()
                .map(|input| encode(input, mode).into_owned())
                .collect();
            assert_eq!(batch, sequential);
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs: Vec<Vec<u8>> = (0..64).map(|i| format!("item {} &", i).into_bytes()).collect();
        let refs: Vec<&[u8]> = inputs.iter().map(|v| v.as_slice()).collect();
        let batch = encode_batch(&refs, Mode::TextNode);
        for (i, out) in batch.iter().enumerate() {
            assert_eq!(out, format!("item {} &amp;", i).as_bytes());
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(encode_batch(&[], Mode::TextNode).is_empty());
    }
}
