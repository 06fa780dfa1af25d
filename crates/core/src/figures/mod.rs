//! Metrical and rhetorical pattern detectors.
//!
//! Every detector is a pure function of the syllable/weight sequence
//! and one block view. A window that fails validation yields a
//! not-applicable outcome, never a guess on truncated data.

pub mod anuprasa;
pub mod pathya;
pub mod vipula;
pub mod yamaka;
