//! Pathyā-anuṣṭubh classification of a full verse.

use crate::metre::blocks::{BlockView, Verse};
use crate::types::{Finding, Syllable, Weight};

/// Classify one verse window as pathyā ("regular") anuṣṭubh.
///
/// A verse is pathyā when the third pāda runs light-heavy at its 5th
/// and 6th syllables and the fourth pāda runs heavy-heavy at the same
/// positions. Anything short of a full 32-syllable verse is not
/// applicable.
pub fn classify(syllables: &[Syllable], weights: &[Weight], block: &BlockView) -> Finding {
    let verse = match Verse::from_window(syllables, weights, block) {
        Some(v) => v,
        None => return Finding::NotApplicable,
    };

    let third = verse.pada_weights(2);
    let fourth = verse.pada_weights(3);
    Finding::from_bool(
        third[4] == Weight::Light
            && third[5] == Weight::Heavy
            && fourth[4] == Weight::Heavy
            && fourth[5] == Weight::Heavy,
    )
}
