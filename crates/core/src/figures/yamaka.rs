//! Yamaka repetition figures.
//!
//! Eight figures of exact syllable repetition across the four pāda of
//! a full verse. Syllables compare by full phonemic content.

use serde::{Deserialize, Serialize};

use crate::metre::blocks::{BlockView, Verse, PADA};
use crate::types::{Finding, Syllable, Weight};

/// Outcomes of all eight yamaka detectors for one verse window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YamakaFindings {
    /// All four pāda share the same first syllable.
    pub pada_adi: Finding,
    /// All four pāda share the same last syllable.
    pub pada_anta: Finding,
    /// Pāda 1 = pāda 3 and pāda 2 = pāda 4.
    pub vikranta: Finding,
    /// Each pāda's last syllable equals the next pāda's first.
    pub cakravala: Finding,
    /// The two half-verses are identical.
    pub samudga: Finding,
    /// All four pāda share the same first two syllables.
    pub sandashta: Finding,
    /// All four pāda share the same last two syllables.
    pub amredita: Finding,
    /// All four pāda are identical.
    pub caturvyavasita: Finding,
}

impl YamakaFindings {
    fn not_applicable() -> Self {
        YamakaFindings {
            pada_adi: Finding::NotApplicable,
            pada_anta: Finding::NotApplicable,
            vikranta: Finding::NotApplicable,
            cakravala: Finding::NotApplicable,
            samudga: Finding::NotApplicable,
            sandashta: Finding::NotApplicable,
            amredita: Finding::NotApplicable,
            caturvyavasita: Finding::NotApplicable,
        }
    }

    /// Name/outcome pairs, for reporting.
    pub fn named(&self) -> [(&'static str, Finding); 8] {
        [
            ("pāda-ādi", self.pada_adi),
            ("pāda-anta", self.pada_anta),
            ("vikrānta", self.vikranta),
            ("cakravāla", self.cakravala),
            ("samudga", self.samudga),
            ("sandaṣṭa", self.sandashta),
            ("āmreḍita", self.amredita),
            ("caturvyavasita", self.caturvyavasita),
        ]
    }
}

/// Run all eight yamaka detectors over one verse window.
pub fn detect(syllables: &[Syllable], weights: &[Weight], block: &BlockView) -> YamakaFindings {
    let verse = match Verse::from_window(syllables, weights, block) {
        Some(v) => v,
        None => return YamakaFindings::not_applicable(),
    };

    let p: Vec<&[Syllable]> = (0..4).map(|i| verse.pada(i)).collect();
    let last = PADA - 1;

    YamakaFindings {
        pada_adi: Finding::from_bool(p.iter().all(|q| q[0] == p[0][0])),
        pada_anta: Finding::from_bool(p.iter().all(|q| q[last] == p[0][last])),
        vikranta: Finding::from_bool(p[0] == p[2] && p[1] == p[3]),
        cakravala: Finding::from_bool((0..3).all(|i| p[i][last] == p[i + 1][0])),
        samudga: Finding::from_bool(verse.half(0) == verse.half(1)),
        sandashta: Finding::from_bool(p.iter().all(|q| q[..2] == p[0][..2])),
        amredita: Finding::from_bool(p.iter().all(|q| q[last - 1..] == p[0][last - 1..])),
        caturvyavasita: Finding::from_bool(p.iter().all(|q| *q == p[0])),
    }
}
