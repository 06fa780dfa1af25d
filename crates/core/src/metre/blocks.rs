//! Fixed-size block views over the syllable sequence.
//!
//! All pāda/half-verse/verse index arithmetic lives here. Detectors
//! only ever see windows validated by this module, so they cannot
//! disagree on boundaries.

use serde::{Deserialize, Serialize};

use crate::types::{Syllable, Weight};

/// Syllables per pāda (quarter-verse).
pub const PADA: usize = 8;
/// Syllables per ardha-śloka (half-verse).
pub const HALF_VERSE: usize = 16;
/// Syllables per śloka (full verse).
pub const VERSE: usize = 32;

/// An index window over the syllable sequence. Owns no syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    /// First syllable index.
    pub start: usize,
    /// One past the last syllable index.
    pub end: usize,
    /// The window size this block was cut for.
    pub nominal: usize,
    /// True when fewer than `nominal` syllables remained.
    pub partial: bool,
}

impl BlockView {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Cut `len` syllables into consecutive `nominal`-sized windows, plus
/// one trailing window tagged partial when a remainder is left over.
pub fn segment(len: usize, nominal: usize) -> Vec<BlockView> {
    let mut blocks = Vec::new();
    let mut start = 0;
    while start + nominal <= len {
        blocks.push(BlockView {
            start,
            end: start + nominal,
            nominal,
            partial: false,
        });
        start += nominal;
    }
    if start < len {
        blocks.push(BlockView {
            start,
            end: len,
            nominal,
            partial: true,
        });
    }
    blocks
}

/// A validated full 32-syllable verse window with its weights.
pub struct Verse<'a> {
    syllables: &'a [Syllable],
    weights: &'a [Weight],
    start: usize,
}

impl<'a> Verse<'a> {
    /// Wrap a block as a verse. `None` unless the block is a full,
    /// in-bounds 32-syllable window.
    pub fn from_window(
        syllables: &'a [Syllable],
        weights: &'a [Weight],
        block: &BlockView,
    ) -> Option<Verse<'a>> {
        if block.nominal != VERSE
            || block.partial
            || block.len() != VERSE
            || block.end > syllables.len()
            || weights.len() != syllables.len()
        {
            return None;
        }
        Some(Verse {
            syllables: &syllables[block.start..block.end],
            weights: &weights[block.start..block.end],
            start: block.start,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + VERSE
    }

    /// All 32 syllables.
    pub fn syllables(&self) -> &'a [Syllable] {
        self.syllables
    }

    /// Pāda `i` (0..4), 8 syllables.
    pub fn pada(&self, i: usize) -> &'a [Syllable] {
        &self.syllables[i * PADA..(i + 1) * PADA]
    }

    /// Weights of pāda `i` (0..4).
    pub fn pada_weights(&self, i: usize) -> &'a [Weight] {
        &self.weights[i * PADA..(i + 1) * PADA]
    }

    /// Half-verse `i` (0..2), 16 syllables.
    pub fn half(&self, i: usize) -> &'a [Syllable] {
        &self.syllables[i * HALF_VERSE..(i + 1) * HALF_VERSE]
    }
}

/// A validated full 16-syllable half-verse window with its weights.
pub struct HalfVerse<'a> {
    syllables: &'a [Syllable],
    weights: &'a [Weight],
    start: usize,
}

impl<'a> HalfVerse<'a> {
    /// Wrap a block as a half-verse. `None` unless the block is a
    /// full, in-bounds 16-syllable window.
    pub fn from_window(
        syllables: &'a [Syllable],
        weights: &'a [Weight],
        block: &BlockView,
    ) -> Option<HalfVerse<'a>> {
        if block.nominal != HALF_VERSE
            || block.partial
            || block.len() != HALF_VERSE
            || block.end > syllables.len()
            || weights.len() != syllables.len()
        {
            return None;
        }
        Some(HalfVerse {
            syllables: &syllables[block.start..block.end],
            weights: &weights[block.start..block.end],
            start: block.start,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + HALF_VERSE
    }

    pub fn syllables(&self) -> &'a [Syllable] {
        self.syllables
    }

    /// The first four syllables' weights, the vipula-bearing foot.
    pub fn opening_weights(&self) -> &'a [Weight] {
        &self.weights[..4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metre::{syllabify, weight};
    use crate::phoneme::normalize;

    fn fixture(n: usize) -> (Vec<Syllable>, Vec<Weight>) {
        let text = "ka".repeat(n);
        let syllables = syllabify(&normalize(&text).unwrap()).unwrap();
        assert_eq!(syllables.len(), n);
        let weights = syllables.iter().map(weight).collect();
        (syllables, weights)
    }

    #[test]
    fn test_segment_exact_multiple() {
        let blocks = segment(32, PADA);
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| !b.partial && b.len() == 8));
        assert_eq!(blocks[3].start, 24);
        assert_eq!(blocks[3].end, 32);
    }

    #[test]
    fn test_segment_with_remainder() {
        let blocks = segment(20, HALF_VERSE);
        assert_eq!(blocks.len(), 2);
        assert!(!blocks[0].partial);
        assert!(blocks[1].partial);
        assert_eq!(blocks[1].len(), 4);
    }

    #[test]
    fn test_segment_short_input() {
        let blocks = segment(5, VERSE);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].partial);

        assert!(segment(0, PADA).is_empty());
    }

    #[test]
    fn test_verse_rejects_partial_window() {
        let (syllables, weights) = fixture(20);
        let blocks = segment(syllables.len(), VERSE);
        assert!(Verse::from_window(&syllables, &weights, &blocks[0]).is_none());
    }

    #[test]
    fn test_verse_rejects_wrong_nominal() {
        let (syllables, weights) = fixture(32);
        let pada_block = segment(syllables.len(), PADA)[0];
        assert!(Verse::from_window(&syllables, &weights, &pada_block).is_none());
    }

    #[test]
    fn test_verse_pada_and_half_indexing() {
        let (syllables, weights) = fixture(32);
        let block = segment(syllables.len(), VERSE)[0];
        let verse = Verse::from_window(&syllables, &weights, &block).unwrap();
        assert_eq!(verse.pada(0).len(), 8);
        assert_eq!(verse.pada(3).len(), 8);
        assert_eq!(verse.half(1).len(), 16);
        assert_eq!(verse.start(), 0);
        assert_eq!(verse.end(), 32);
        assert_eq!(verse.pada(2), &verse.syllables()[16..24]);
        assert_eq!(verse.pada_weights(1).len(), 8);
    }

    #[test]
    fn test_half_verse_opening() {
        let (syllables, weights) = fixture(16);
        let block = segment(syllables.len(), HALF_VERSE)[0];
        let half = HalfVerse::from_window(&syllables, &weights, &block).unwrap();
        assert_eq!(half.opening_weights().len(), 4);
        assert_eq!(half.end(), 16);
    }
}
