use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::phoneme::table;

/// A single phoneme in the canonical one-codepoint alphabet.
///
/// Serialized as its IAST spelling (e.g. "kh", "ai"), not the
/// internal codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phoneme(pub char);

impl Phoneme {
    pub fn is_vowel(self) -> bool {
        table::is_vowel(self.0)
    }

    pub fn is_long_vowel(self) -> bool {
        table::is_long_vowel(self.0)
    }

    pub fn is_consonant(self) -> bool {
        table::is_consonant(self.0)
    }

    pub fn is_marker(self) -> bool {
        table::is_marker(self.0)
    }

    /// IAST spelling (digraphs spelled out).
    pub fn label(self) -> &'static str {
        table::label(self.0)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Phoneme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Phoneme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        table::from_label(&s)
            .map(Phoneme)
            .ok_or_else(|| D::Error::custom(format!("unknown phoneme label '{}'", s)))
    }
}

/// One metrical syllable: a contiguous span of the phoneme stream
/// with exactly one vowel nucleus.
///
/// Syllables partition the stream completely and in order; they are
/// created once by the syllabifier and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Consonants before the nucleus.
    pub onset: Vec<Phoneme>,
    /// The vowel.
    pub nucleus: Phoneme,
    /// Anusvāra or visarga following the nucleus, if any.
    pub marker: Option<Phoneme>,
    /// Consonants closing the syllable.
    pub coda: Vec<Phoneme>,
}

impl Syllable {
    /// All phonemes of this syllable in stream order.
    pub fn phonemes(&self) -> Vec<Phoneme> {
        let mut out = Vec::with_capacity(self.phoneme_count());
        out.extend_from_slice(&self.onset);
        out.push(self.nucleus);
        if let Some(m) = self.marker {
            out.push(m);
        }
        out.extend_from_slice(&self.coda);
        out
    }

    /// Number of phonemes covered by this syllable.
    pub fn phoneme_count(&self) -> usize {
        self.onset.len() + 1 + usize::from(self.marker.is_some()) + self.coda.len()
    }

    /// IAST spelling.
    pub fn text(&self) -> String {
        self.phonemes().iter().map(|p| p.label()).collect()
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Metrical weight of a syllable (laghu/guru).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Light,
    Heavy,
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Light => f.write_str("light"),
            Weight::Heavy => f.write_str("heavy"),
        }
    }
}

/// Three-valued detector outcome.
///
/// `NotApplicable` means the preconditions were unmet (for example a
/// partial block); it is a first-class result, never an error, and
/// never a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finding {
    NotApplicable,
    Absent,
    Present,
}

impl Finding {
    pub fn from_bool(present: bool) -> Finding {
        if present {
            Finding::Present
        } else {
            Finding::Absent
        }
    }

    pub fn is_present(self) -> bool {
        self == Finding::Present
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::NotApplicable => f.write_str("n/a"),
            Finding::Absent => f.write_str("absent"),
            Finding::Present => f.write_str("present"),
        }
    }
}

/// A detector outcome plus the syllable index range it was computed
/// over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch<T> {
    /// First syllable index of the window.
    pub start: usize,
    /// One past the last syllable index.
    pub end: usize,
    pub outcome: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::table::KH;

    fn syl(onset: &[char], nucleus: char, marker: Option<char>, coda: &[char]) -> Syllable {
        Syllable {
            onset: onset.iter().map(|&c| Phoneme(c)).collect(),
            nucleus: Phoneme(nucleus),
            marker: marker.map(Phoneme),
            coda: coda.iter().map(|&c| Phoneme(c)).collect(),
        }
    }

    #[test]
    fn test_phoneme_labels() {
        assert_eq!(Phoneme('k').label(), "k");
        assert_eq!(Phoneme(KH).label(), "kh");
        assert_eq!(Phoneme('ā').to_string(), "ā");
    }

    #[test]
    fn test_phoneme_serde_uses_labels() {
        let json = serde_json::to_string(&Phoneme(KH)).unwrap();
        assert_eq!(json, "\"kh\"");
        let back: Phoneme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phoneme(KH));
        assert!(serde_json::from_str::<Phoneme>("\"zz\"").is_err());
    }

    #[test]
    fn test_syllable_phonemes_in_order() {
        let s = syl(&['k'], 'a', Some('ṃ'), &['t']);
        let flat: Vec<char> = s.phonemes().iter().map(|p| p.0).collect();
        assert_eq!(flat, vec!['k', 'a', 'ṃ', 't']);
        assert_eq!(s.phoneme_count(), 4);
        assert_eq!(s.text(), "kaṃt");
    }

    #[test]
    fn test_syllable_text_spells_digraphs() {
        let s = syl(&[KH], 'ā', None, &[]);
        assert_eq!(s.text(), "khā");
    }

    #[test]
    fn test_finding_from_bool() {
        assert_eq!(Finding::from_bool(true), Finding::Present);
        assert_eq!(Finding::from_bool(false), Finding::Absent);
        assert!(Finding::Present.is_present());
        assert!(!Finding::NotApplicable.is_present());
    }

    #[test]
    fn test_weight_serde() {
        assert_eq!(serde_json::to_string(&Weight::Heavy).unwrap(), "\"heavy\"");
        assert_eq!(
            serde_json::to_string(&Finding::NotApplicable).unwrap(),
            "\"not_applicable\""
        );
    }

    #[test]
    fn test_syllable_serde_roundtrip() {
        let s = syl(&['ś', 'r'], 'ī', None, &[]);
        let json = serde_json::to_string(&s).unwrap();
        let back: Syllable = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
