//! Core domain types for the sub-word game
//!
//! The fundamental pieces with clear mathematical properties: letter
//! multisets, the structural legality rule, and the level record. Nothing
//! here performs I/O or talks to the dictionary.

mod legality;
mod level;
mod multiset;

pub use legality::is_legal_formation;
pub use level::Level;
pub use multiset::LetterMultiset;
