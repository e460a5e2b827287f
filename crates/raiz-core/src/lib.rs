//! Shared building blocks for Portuguese stemming.
//!
//! - [`character`] -- vowel set, nasal vowel expansion and contraction
//! - [`region`] -- the R1, R2 and RV word regions

pub mod character;
pub mod region;
