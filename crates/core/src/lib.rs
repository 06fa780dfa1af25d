//! Metrical analysis of classical Sanskrit verse in IAST romanization.
//!
//! The pipeline is pure and single-pass: normalize the input to a
//! canonical one-codepoint-per-phoneme stream, syllabify it, classify
//! each syllable's weight, cut block views at the classical sizes
//! (pāda 8, ardha-śloka 16, śloka 32), and run the metrical and
//! rhetorical pattern detectors over every window.

pub mod error;
pub mod figures;
pub mod metre;
pub mod phoneme;
pub mod types;

pub use error::{EncodingError, NoVowelError};
pub use types::{Finding, PatternMatch, Phoneme, Syllable, Weight};

use serde::{Deserialize, Serialize};

use figures::anuprasa::{self, AnuprasaFindings};
use figures::pathya;
use figures::vipula::{self, VipulaOutcome};
use figures::yamaka::{self, YamakaFindings};
use metre::blocks::{self, BlockView, HALF_VERSE, PADA, VERSE};

/// Block views over the syllable sequence at the three classical
/// sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Blocks {
    pub padas: Vec<BlockView>,
    pub half_verses: Vec<BlockView>,
    pub verses: Vec<BlockView>,
}

/// Every pattern detector's outcome, one entry per window it ran
/// over. Not-applicable outcomes are included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PatternResults {
    /// One entry per half-verse window.
    pub vipula: Vec<PatternMatch<VipulaOutcome>>,
    /// One entry per verse window.
    pub pathya: Vec<PatternMatch<Finding>>,
    /// One entry per verse window.
    pub yamaka: Vec<PatternMatch<YamakaFindings>>,
    /// One entry per verse window.
    pub anuprasa: Vec<PatternMatch<AnuprasaFindings>>,
}

/// Full analysis of one phoneme stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Analysis {
    pub syllables: Vec<Syllable>,
    /// Weight of each syllable, parallel to `syllables`.
    pub weights: Vec<Weight>,
    pub blocks: Blocks,
    pub patterns: PatternResults,
}

impl Analysis {
    /// Weight sequence as 0 (light) / 1 (heavy), for grid renderers.
    pub fn weight_grid(&self) -> Vec<u8> {
        self.weights
            .iter()
            .map(|w| match w {
                Weight::Light => 0,
                Weight::Heavy => 1,
            })
            .collect()
    }

    /// Serialize for JSON output.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Analyze one IAST-encoded verse fragment.
///
/// Fails only on input outside the phoneme inventory. A stream with
/// no vowel at all is degenerate, not an error: it yields an empty
/// analysis.
pub fn analyze(text: &str) -> Result<Analysis, EncodingError> {
    let stream = phoneme::normalize(text)?;

    let syllables = match metre::syllabify(&stream) {
        Ok(syls) => syls,
        Err(NoVowelError) => {
            log::debug!("no vowel nucleus in {} phonemes, empty analysis", stream.len());
            return Ok(Analysis::default());
        }
    };
    let weights: Vec<Weight> = syllables.iter().map(metre::weight).collect();
    log::debug!("{} phonemes, {} syllables", stream.len(), syllables.len());

    let blocks = Blocks {
        padas: blocks::segment(syllables.len(), PADA),
        half_verses: blocks::segment(syllables.len(), HALF_VERSE),
        verses: blocks::segment(syllables.len(), VERSE),
    };

    let patterns = PatternResults {
        vipula: blocks
            .half_verses
            .iter()
            .map(|b| PatternMatch {
                start: b.start,
                end: b.end,
                outcome: vipula::identify(&syllables, &weights, b),
            })
            .collect(),
        pathya: blocks
            .verses
            .iter()
            .map(|b| PatternMatch {
                start: b.start,
                end: b.end,
                outcome: pathya::classify(&syllables, &weights, b),
            })
            .collect(),
        yamaka: blocks
            .verses
            .iter()
            .map(|b| PatternMatch {
                start: b.start,
                end: b.end,
                outcome: yamaka::detect(&syllables, &weights, b),
            })
            .collect(),
        anuprasa: blocks
            .verses
            .iter()
            .map(|b| PatternMatch {
                start: b.start,
                end: b.end,
                outcome: anuprasa::detect(&syllables, &weights, b),
            })
            .collect(),
    };

    Ok(Analysis {
        syllables,
        weights,
        blocks,
        patterns,
    })
}
