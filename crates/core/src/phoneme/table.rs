//! The canonical phoneme alphabet.
//!
//! Every phoneme is represented by exactly one codepoint. IAST
//! phonemes that are already a single codepoint represent themselves;
//! the digraphs (diphthongs and aspirate stops) are assigned Private
//! Use Area codepoints at normalization time so the syllabifier never
//! needs multi-codepoint lookahead.

use std::collections::{HashMap, HashSet};

use crate::types::Phoneme;

/// Canonical codepoints for the digraph phonemes.
pub const AI: char = '\u{E000}';
pub const AU: char = '\u{E001}';
pub const KH: char = '\u{E002}';
pub const GH: char = '\u{E003}';
pub const CH: char = '\u{E004}';
pub const JH: char = '\u{E005}';
pub const TTH: char = '\u{E006}';
pub const DDH: char = '\u{E007}';
pub const TH: char = '\u{E008}';
pub const DH: char = '\u{E009}';
pub const PH: char = '\u{E00A}';
pub const BH: char = '\u{E00B}';

lazy_static::lazy_static! {
    /// Short vowel nuclei.
    static ref SHORT_VOWELS: HashSet<char> = {
        ['a', 'i', 'u', 'ṛ', 'ḷ'].into_iter().collect()
    };

    /// Long vowels and diphthongs.
    static ref LONG_VOWELS: HashSet<char> = {
        ['ā', 'ī', 'ū', 'ṝ', 'e', 'o', AI, AU].into_iter().collect()
    };

    /// All consonants, aspirates in canonical form.
    static ref CONSONANTS: HashSet<char> = {
        [
            'k', KH, 'g', GH, 'ṅ',
            'c', CH, 'j', JH, 'ñ',
            'ṭ', TTH, 'ḍ', DDH, 'ṇ',
            't', TH, 'd', DH, 'n',
            'p', PH, 'b', BH, 'm',
            'y', 'r', 'l', 'v',
            'ś', 'ṣ', 's', 'h',
        ].into_iter().collect()
    };

    /// Anusvāra and visarga.
    static ref MARKERS: HashSet<char> = {
        ['ṃ', 'ḥ'].into_iter().collect()
    };

    /// Canonical codepoint → IAST spelling.
    static ref LABELS: HashMap<char, &'static str> = {
        let pairs: &[(char, &'static str)] = &[
            ('a', "a"), ('i', "i"), ('u', "u"), ('ṛ', "ṛ"), ('ḷ', "ḷ"),
            ('ā', "ā"), ('ī', "ī"), ('ū', "ū"), ('ṝ', "ṝ"),
            ('e', "e"), ('o', "o"), (AI, "ai"), (AU, "au"),
            ('k', "k"), (KH, "kh"), ('g', "g"), (GH, "gh"), ('ṅ', "ṅ"),
            ('c', "c"), (CH, "ch"), ('j', "j"), (JH, "jh"), ('ñ', "ñ"),
            ('ṭ', "ṭ"), (TTH, "ṭh"), ('ḍ', "ḍ"), (DDH, "ḍh"), ('ṇ', "ṇ"),
            ('t', "t"), (TH, "th"), ('d', "d"), (DH, "dh"), ('n', "n"),
            ('p', "p"), (PH, "ph"), ('b', "b"), (BH, "bh"), ('m', "m"),
            ('y', "y"), ('r', "r"), ('l', "l"), ('v', "v"),
            ('ś', "ś"), ('ṣ', "ṣ"), ('s', "s"), ('h', "h"),
            ('ṃ', "ṃ"), ('ḥ', "ḥ"),
        ];
        pairs.iter().copied().collect()
    };

    /// IAST spelling → canonical codepoint.
    static ref FROM_LABEL: HashMap<&'static str, char> = {
        LABELS.iter().map(|(c, l)| (*l, *c)).collect()
    };

    /// Consonant clusters treated as a single phonological unit:
    /// when one of these forms the whole intervocalic run, it stays
    /// in the coda of the preceding syllable instead of being split.
    static ref INSEPARABLE: Vec<&'static [char]> = {
        vec![
            &['t', 'r'][..],
            &['k', 'ṣ'][..],
            &['k', 'ṣ', 'ṇ'][..],
            &['j', 'ñ'][..],
        ]
    };
}

pub fn is_short_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&c)
}

pub fn is_long_vowel(c: char) -> bool {
    LONG_VOWELS.contains(&c)
}

pub fn is_vowel(c: char) -> bool {
    is_short_vowel(c) || is_long_vowel(c)
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

pub fn is_marker(c: char) -> bool {
    MARKERS.contains(&c)
}

/// True if `c` belongs to the recognized phoneme inventory.
pub fn is_phoneme(c: char) -> bool {
    is_vowel(c) || is_consonant(c) || is_marker(c)
}

/// Canonical codepoint for a two-codepoint IAST spelling, if any.
///
/// Digraphs win over their single-char prefixes: `ai` is the
/// diphthong, never `a` + `i`; `kh` is the aspirate, never `k` + `h`.
pub fn digraph(a: char, b: char) -> Option<char> {
    let canonical = match (a, b) {
        ('a', 'i') => AI,
        ('a', 'u') => AU,
        ('k', 'h') => KH,
        ('g', 'h') => GH,
        ('c', 'h') => CH,
        ('j', 'h') => JH,
        ('ṭ', 'h') => TTH,
        ('ḍ', 'h') => DDH,
        ('t', 'h') => TH,
        ('d', 'h') => DH,
        ('p', 'h') => PH,
        ('b', 'h') => BH,
        _ => return None,
    };
    Some(canonical)
}

/// IAST spelling of a canonical codepoint.
pub fn label(c: char) -> &'static str {
    LABELS.get(&c).copied().unwrap_or("?")
}

/// Canonical codepoint for an IAST spelling.
pub fn from_label(label: &str) -> Option<char> {
    FROM_LABEL.get(label).copied()
}

/// True if the whole cluster matches the inseparable whitelist.
pub fn is_inseparable(cluster: &[Phoneme]) -> bool {
    INSEPARABLE.iter().any(|c| {
        c.len() == cluster.len() && c.iter().zip(cluster.iter()).all(|(a, b)| *a == b.0)
    })
}
