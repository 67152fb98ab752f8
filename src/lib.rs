//! Subwords
//!
//! A word-puzzle game core: each level fixes a base word, and the player
//! spells shorter words from its letters (respecting per-letter
//! multiplicity), confirmed as real against an external dictionary service.
//!
//! # Quick Start
//!
//! ```rust
//! use subwords::core::{LetterMultiset, is_legal_formation};
//!
//! // HELL fits inside HELLO's letters; a third L would not
//! assert!(is_legal_formation("HELL", "HELLO"));
//! assert!(!is_legal_formation("LLL", "HELLO"));
//!
//! let supply = LetterMultiset::from_word("HELLO");
//! assert_eq!(supply.count('L'), 2);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle (realness authority)
pub mod dictionary;

// Per-level play state machine
pub mod session;

// Batch validation of level word lists
pub mod validate;

// Level catalog (embedded data + file loading)
pub mod catalog;

// Saved progress blob
pub mod persist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
