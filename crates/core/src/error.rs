//! Error taxonomy for the analysis pipeline.

use thiserror::Error;

/// A codepoint outside the recognized phoneme inventory.
///
/// Fatal for the call that produced it; no partial stream is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized codepoint '{codepoint}' at position {position}")]
pub struct EncodingError {
    /// The offending codepoint, after NFC folding and lowercasing.
    pub codepoint: char,
    /// Char index in the folded input.
    pub position: usize,
}

/// A non-empty phoneme stream with no vowel nucleus anywhere.
///
/// Degenerate rather than fatal: `analyze` maps this to an empty
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("phoneme stream contains no vowel nucleus")]
pub struct NoVowelError;
