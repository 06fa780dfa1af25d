//! Anuprāsa alliteration figures.
//!
//! Six figures of consonant-cluster repetition over a full verse.
//! An empty onset or coda never satisfies a shared-cluster condition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::metre::blocks::{BlockView, Verse, PADA};
use crate::types::{Finding, Phoneme, Syllable, Weight};

/// Minimum recurrences of one onset cluster for vṛttyānuprāsa.
const VRTTI_THRESHOLD: usize = 3;

/// Outcomes of all six anuprāsa detectors for one verse window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnuprasaFindings {
    /// Every syllable in the verse shares one onset cluster.
    pub lata: Finding,
    /// The first syllable of each pāda shares one onset cluster.
    pub cheka: Finding,
    /// Some onset cluster recurs at least three times in the first
    /// half-verse.
    pub vrtti: Finding,
    /// Within some single pāda, every syllable's coda is identical.
    pub antya_pada: Finding,
    /// Across the whole verse, every syllable's coda is identical.
    pub antya_shloka: Finding,
    /// The coda closing pāda 1 equals the onset opening pāda 2.
    pub shrutya_dantya: Finding,
}

impl AnuprasaFindings {
    fn not_applicable() -> Self {
        AnuprasaFindings {
            lata: Finding::NotApplicable,
            cheka: Finding::NotApplicable,
            vrtti: Finding::NotApplicable,
            antya_pada: Finding::NotApplicable,
            antya_shloka: Finding::NotApplicable,
            shrutya_dantya: Finding::NotApplicable,
        }
    }

    /// Name/outcome pairs, for reporting.
    pub fn named(&self) -> [(&'static str, Finding); 6] {
        [
            ("lāṭānuprāsa", self.lata),
            ("chekānuprāsa", self.cheka),
            ("vṛttyānuprāsa", self.vrtti),
            ("antyānuprāsa-pāda", self.antya_pada),
            ("antyānuprāsa-śloka", self.antya_shloka),
            ("śṛtyānuprāsa-dantya", self.shrutya_dantya),
        ]
    }
}

/// True when every syllable yields the same non-empty cluster.
fn all_share(syllables: &[Syllable], cluster: fn(&Syllable) -> &[Phoneme]) -> bool {
    let first = cluster(&syllables[0]);
    !first.is_empty() && syllables.iter().all(|s| cluster(s) == first)
}

fn onset_of(s: &Syllable) -> &[Phoneme] {
    &s.onset
}

fn coda_of(s: &Syllable) -> &[Phoneme] {
    &s.coda
}

/// Run all six anuprāsa detectors over one verse window.
pub fn detect(syllables: &[Syllable], weights: &[Weight], block: &BlockView) -> AnuprasaFindings {
    let verse = match Verse::from_window(syllables, weights, block) {
        Some(v) => v,
        None => return AnuprasaFindings::not_applicable(),
    };

    let openers: Vec<Syllable> = (0..4).map(|i| verse.pada(i)[0].clone()).collect();

    let mut onset_counts: HashMap<&[Phoneme], usize> = HashMap::new();
    for s in verse.half(0) {
        if !s.onset.is_empty() {
            *onset_counts.entry(onset_of(s)).or_insert(0) += 1;
        }
    }
    let vrtti = onset_counts.values().any(|&n| n >= VRTTI_THRESHOLD);

    let closing_coda = &verse.pada(0)[PADA - 1].coda;
    let opening_onset = &verse.pada(1)[0].onset;
    let shrutya = !closing_coda.is_empty() && closing_coda == opening_onset;

    AnuprasaFindings {
        lata: Finding::from_bool(all_share(verse.syllables(), onset_of)),
        cheka: Finding::from_bool(all_share(&openers, onset_of)),
        vrtti: Finding::from_bool(vrtti),
        antya_pada: Finding::from_bool((0..4).any(|i| all_share(verse.pada(i), coda_of))),
        antya_shloka: Finding::from_bool(all_share(verse.syllables(), coda_of)),
        shrutya_dantya: Finding::from_bool(shrutya),
    }
}
