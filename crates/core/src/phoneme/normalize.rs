//! IAST text → canonical phoneme stream.
//!
//! Normalize-then-parse: all multi-codepoint spellings are collapsed
//! to the one-codepoint alphabet here, so the syllabifier downstream
//! works without lookahead.

use unicode_normalization::UnicodeNormalization;

use crate::error::EncodingError;
use crate::types::Phoneme;

use super::table;

/// Codepoints with no phonemic content: whitespace, digits, and
/// verse-delimiter punctuation (including daṇḍa and avagraha).
fn is_ignorable(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_digit()
        || matches!(
            c,
            '|' | '‖'
                | '।'
                | '॥'
                | '/'
                | '\\'
                | '.'
                | ','
                | ';'
                | ':'
                | '!'
                | '?'
                | '"'
                | '\''
                | '’'
                | '‘'
                | '('
                | ')'
                | '['
                | ']'
                | '-'
                | '–'
                | '—'
                | '_'
                | '='
                | '*'
        )
}

/// Convert IAST text into the immutable phoneme stream.
///
/// NFC-folds and lowercases the input, strips non-phonemic
/// codepoints, then greedily matches digraphs before single
/// codepoints. Any remaining codepoint outside the phoneme inventory
/// aborts the call with [`EncodingError`].
pub fn normalize(text: &str) -> Result<Vec<Phoneme>, EncodingError> {
    let folded: Vec<char> = text.nfc().flat_map(char::to_lowercase).collect();

    let mut stream = Vec::with_capacity(folded.len());
    let mut i = 0;
    while i < folded.len() {
        let c = folded[i];
        if is_ignorable(c) {
            i += 1;
            continue;
        }
        if i + 1 < folded.len() {
            if let Some(canonical) = table::digraph(c, folded[i + 1]) {
                stream.push(Phoneme(canonical));
                i += 2;
                continue;
            }
        }
        if !table::is_phoneme(c) {
            return Err(EncodingError {
                codepoint: c,
                position: i,
            });
        }
        stream.push(Phoneme(c));
        i += 1;
    }

    Ok(stream)
}
