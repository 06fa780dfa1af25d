//! Vipula sub-meter identification.
//!
//! The weight pattern of the first four syllables of a half-verse is
//! matched against the five classical deviation patterns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metre::blocks::{BlockView, HalfVerse};
use crate::types::Weight::{Heavy as H, Light as L};
use crate::types::{Syllable, Weight};

/// The five named vipula sub-meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vipula {
    Na,
    Bha,
    Ma,
    Ra,
    Sa,
}

impl fmt::Display for Vipula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vipula::Na => f.write_str("na"),
            Vipula::Bha => f.write_str("bha"),
            Vipula::Ma => f.write_str("ma"),
            Vipula::Ra => f.write_str("ra"),
            Vipula::Sa => f.write_str("sa"),
        }
    }
}

/// Outcome of vipula identification for one half-verse window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VipulaOutcome {
    /// The window is not a full half-verse.
    NotApplicable,
    /// A full half-verse whose opening matches no deviation pattern.
    NoVipula,
    Vipula(Vipula),
}

/// Opening weight patterns and the sub-meter each identifies.
const PATTERNS: [([Weight; 4], Vipula); 5] = [
    ([L, H, L, H], Vipula::Na),
    ([L, L, L, H], Vipula::Bha),
    ([L, L, H, H], Vipula::Ma),
    ([H, L, H, H], Vipula::Ra),
    ([H, H, L, H], Vipula::Sa),
];

/// Identify the vipula of one half-verse window.
pub fn identify(syllables: &[Syllable], weights: &[Weight], block: &BlockView) -> VipulaOutcome {
    let half = match HalfVerse::from_window(syllables, weights, block) {
        Some(h) => h,
        None => return VipulaOutcome::NotApplicable,
    };

    let opening = half.opening_weights();
    for (pattern, kind) in PATTERNS.iter() {
        if opening == &pattern[..] {
            return VipulaOutcome::Vipula(*kind);
        }
    }
    VipulaOutcome::NoVipula
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metre::blocks::{segment, HALF_VERSE};
    use crate::metre::{syllabify, weight};
    use crate::phoneme::normalize;

    /// Half-verse text opening with the given light/heavy shape,
    /// padded with light syllables to 16.
    fn half_text(opening: &str) -> String {
        let head: String = opening
            .chars()
            .map(|c| if c == 'H' { "kā" } else { "ka" })
            .collect();
        format!("{}{}", head, "ka".repeat(16 - opening.len()))
    }

    fn outcome(text: &str) -> VipulaOutcome {
        let syllables = syllabify(&normalize(text).unwrap()).unwrap();
        let weights: Vec<Weight> = syllables.iter().map(weight).collect();
        let blocks = segment(syllables.len(), HALF_VERSE);
        identify(&syllables, &weights, &blocks[0])
    }

    #[test]
    fn test_all_five_patterns() {
        assert_eq!(outcome(&half_text("LHLH")), VipulaOutcome::Vipula(Vipula::Na));
        assert_eq!(outcome(&half_text("LLLH")), VipulaOutcome::Vipula(Vipula::Bha));
        assert_eq!(outcome(&half_text("LLHH")), VipulaOutcome::Vipula(Vipula::Ma));
        assert_eq!(outcome(&half_text("HLHH")), VipulaOutcome::Vipula(Vipula::Ra));
        assert_eq!(outcome(&half_text("HHLH")), VipulaOutcome::Vipula(Vipula::Sa));
    }

    #[test]
    fn test_no_match_is_no_vipula() {
        assert_eq!(outcome(&half_text("LLLL")), VipulaOutcome::NoVipula);
        assert_eq!(outcome(&half_text("HHHH")), VipulaOutcome::NoVipula);
    }

    #[test]
    fn test_partial_half_verse_not_applicable() {
        let text = "ka".repeat(10);
        assert_eq!(outcome(&text), VipulaOutcome::NotApplicable);
    }

    #[test]
    fn test_second_half_verse_window() {
        // 32 light syllables except a na-vipulā opening on the second half
        let text = format!("{}{}", "ka".repeat(16), half_text("LHLH"));
        let syllables = syllabify(&normalize(&text).unwrap()).unwrap();
        let weights: Vec<Weight> = syllables.iter().map(weight).collect();
        let blocks = segment(syllables.len(), HALF_VERSE);
        assert_eq!(identify(&syllables, &weights, &blocks[0]), VipulaOutcome::NoVipula);
        assert_eq!(
            identify(&syllables, &weights, &blocks[1]),
            VipulaOutcome::Vipula(Vipula::Na)
        );
    }
}
