//! Deterministic syllabification of a normalized phoneme stream.
//!
//! Single left-to-right pass, no backtracking: consonants accumulate
//! as an onset until a vowel nucleus is found, an optional
//! anusvāra/visarga is attached, then the trailing consonant run up
//! to the next vowel is split between this syllable's coda and the
//! next syllable's onset.

use crate::error::NoVowelError;
use crate::phoneme::table;
use crate::types::{Phoneme, Syllable};

/// Split a phoneme stream into syllables covering it exactly.
///
/// Returns [`NoVowelError`] only when a non-empty stream has no vowel
/// at all; an empty stream yields an empty sequence.
pub fn syllabify(stream: &[Phoneme]) -> Result<Vec<Syllable>, NoVowelError> {
    let mut syllables: Vec<Syllable> = Vec::new();
    let mut onset: Vec<Phoneme> = Vec::new();
    let mut i = 0;

    while i < stream.len() {
        // SeekNucleus: consonants (and any stray marker) accumulate
        // as the onset
        while i < stream.len() && !stream[i].is_vowel() {
            onset.push(stream[i]);
            i += 1;
        }

        if i == stream.len() {
            // Trailing run with no nucleus joins the last syllable
            match syllables.last_mut() {
                Some(last) => last.coda.append(&mut onset),
                None => return Err(NoVowelError),
            }
            break;
        }

        // ConsumeNucleus
        let nucleus = stream[i];
        i += 1;

        // ConsumeMarker: at most one, immediately after the nucleus
        let marker = if i < stream.len() && stream[i].is_marker() {
            let m = stream[i];
            i += 1;
            Some(m)
        } else {
            None
        };

        // ConsumeCoda: scan the run up to the next vowel, then split
        let run_start = i;
        while i < stream.len() && !stream[i].is_vowel() {
            i += 1;
        }
        let (coda, next_onset) = split_run(&stream[run_start..i], i == stream.len());

        syllables.push(Syllable {
            onset: std::mem::take(&mut onset),
            nucleus,
            marker,
            coda,
        });
        onset = next_onset;
    }

    Ok(syllables)
}

/// Apply the coda-assignment rule to an intervocalic consonant run.
///
/// Returns (coda of the current syllable, onset of the next):
/// - length 0 or 1: the whole run opens the next syllable;
/// - length ≥ 2 matching the inseparable whitelist: the whole run
///   closes the current syllable;
/// - length ≥ 2 otherwise: the first consonant closes the current
///   syllable, the rest open the next.
///
/// At end of stream the whole run closes the current syllable.
fn split_run(run: &[Phoneme], at_end: bool) -> (Vec<Phoneme>, Vec<Phoneme>) {
    if at_end {
        return (run.to_vec(), Vec::new());
    }
    match run.len() {
        0 => (Vec::new(), Vec::new()),
        1 => (Vec::new(), run.to_vec()),
        _ if table::is_inseparable(run) => (run.to_vec(), Vec::new()),
        _ => (run[..1].to_vec(), run[1..].to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::normalize;

    fn syls(text: &str) -> Vec<Syllable> {
        syllabify(&normalize(text).unwrap()).unwrap()
    }

    fn texts(text: &str) -> Vec<String> {
        syls(text).iter().map(|s| s.text()).collect()
    }

    #[test]
    fn test_single_intervocalic_consonant_opens_next() {
        assert_eq!(texts("aka"), vec!["a", "ka"]);
    }

    #[test]
    fn test_two_consonant_run_splits() {
        // "kt" is not whitelisted: k closes, t opens
        let s = syls("akta");
        assert_eq!(s[0].text(), "ak");
        assert_eq!(s[1].text(), "ta");
    }

    #[test]
    fn test_whitelisted_cluster_stays_in_coda() {
        let s = syls("akṣa");
        assert_eq!(s[0].text(), "akṣ");
        assert_eq!(s[1].text(), "a");
        assert!(s[1].onset.is_empty());

        assert_eq!(texts("atra"), vec!["atr", "a"]);
        assert_eq!(texts("ajña"), vec!["ajñ", "a"]);
        assert_eq!(texts("takṣṇa"), vec!["takṣṇ", "a"]);
    }

    #[test]
    fn test_non_whitelisted_three_consonant_run() {
        // "str" is not whitelisted even though "tr" is: only the
        // whole run is matched
        let s = syls("astra");
        assert_eq!(s[0].text(), "as");
        assert_eq!(s[1].text(), "tra");
    }

    #[test]
    fn test_end_of_stream_attachment() {
        assert_eq!(texts("ak"), vec!["ak"]);
        assert_eq!(texts("mān"), vec!["mān"]);
        // whole trailing run, no spurious vowel-less syllable
        assert_eq!(texts("astr"), vec!["astr"]);
    }

    #[test]
    fn test_marker_consumed_after_nucleus() {
        let s = syls("aṃśa");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].marker, Some(Phoneme('ṃ')));
        // ś is a single intervocalic consonant, so it opens the next
        // syllable rather than closing the first
        assert!(s[0].coda.is_empty());
        assert_eq!(s[1].text(), "śa");

        let s = syls("taḥ");
        assert_eq!(s[0].marker, Some(Phoneme('ḥ')));
    }

    #[test]
    fn test_no_vowel_stream() {
        let stream = normalize("str").unwrap();
        assert_eq!(syllabify(&stream), Err(NoVowelError));
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(syllabify(&[]), Ok(vec![]));
    }

    #[test]
    fn test_pada_dharmaksetre_kuruksetre() {
        assert_eq!(
            texts("dharmakṣetre kurukṣetre"),
            vec!["dhar", "makṣ", "etr", "e", "ku", "rukṣ", "etr", "e"]
        );
    }

    #[test]
    fn test_partition_invariant() {
        for text in [
            "aka",
            "akta",
            "akṣa",
            "astra",
            "dharmakṣetre kurukṣetre",
            "rāmo rājā rāghavaḥ śrīmān",
            "aṃśaḥ",
            "kākāṃstitīrṣan",
        ] {
            let stream = normalize(text).unwrap();
            let flat: Vec<Phoneme> = syllabify(&stream)
                .unwrap()
                .iter()
                .flat_map(|s| s.phonemes())
                .collect();
            assert_eq!(flat, stream, "partition broken for {:?}", text);
        }
    }
}
