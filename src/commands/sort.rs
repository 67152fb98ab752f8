//! Catalog maintenance: sort level answers
//!
//! Rewrites a JSON catalog file with every level's answers ordered by
//! length, then alphabetically. Purely offline; no dictionary involved.

use crate::catalog::loader;
use crate::catalog::sort_sub_words;
use std::path::Path;

/// Summary of a sort run
pub struct SortOutcome {
    pub levels_sorted: usize,
}

/// Sort every level's answers in a catalog file, in place
///
/// # Errors
///
/// Returns an error when the file cannot be read, parsed, or rewritten.
pub fn run_sort(path: &Path) -> Result<SortOutcome, String> {
    let mut levels = loader::load_from_file(path).map_err(|err| err.to_string())?;
    for level in &mut levels {
        sort_sub_words(&mut level.sub_words);
    }
    loader::save_to_file(path, &levels).map_err(|err| err.to_string())?;

    Ok(SortOutcome {
        levels_sorted: levels.len(),
    })
}
