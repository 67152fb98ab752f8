//! Catalog validation command
//!
//! Walks the selected levels and runs the bulk validator over each,
//! printing a per-level breakdown. Argument shapes follow the original
//! tooling: no arguments checks everything, one argument checks a single
//! level, two arguments check an inclusive range.

use crate::catalog::level_by_index;
use crate::core::Level;
use crate::dictionary::DictionaryOracle;
use crate::output::print_validation_report;
use crate::validate::validate_level;

/// Summary of one validation run
#[derive(Debug)]
pub struct ValidationRun {
    pub levels_checked: usize,
    pub levels_clean: usize,
}

/// Validate all levels, a single level, or an inclusive range
///
/// # Errors
///
/// Returns an error for an unknown level index, an empty range, or a start
/// index greater than the end index.
pub async fn run_validate<O: DictionaryOracle>(
    oracle: &O,
    levels: &[Level],
    start: Option<u32>,
    end: Option<u32>,
) -> Result<ValidationRun, String> {
    let selected: Vec<&Level> = match (start, end) {
        (None, _) => levels.iter().collect(),
        (Some(index), None) => match level_by_index(levels, index) {
            Some(level) => vec![level],
            None => return Err(format!("Level {index} not found")),
        },
        (Some(start), Some(end)) => {
            if start > end {
                return Err("Start level must be less than or equal to end level".to_string());
            }
            let in_range: Vec<&Level> = levels
                .iter()
                .filter(|level| level.index >= start && level.index <= end)
                .collect();
            if in_range.is_empty() {
                return Err(format!("No levels found in range {start}..={end}"));
            }
            in_range
        }
    };

    let mut levels_clean = 0;
    for level in &selected {
        let report = validate_level(oracle, &level.base_word, &level.sub_words).await;
        print_validation_report(level, &report);
        if report.is_clean() {
            levels_clean += 1;
        }
    }

    Ok(ValidationRun {
        levels_checked: selected.len(),
        levels_clean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::testing::FixedOracle;

    fn levels() -> Vec<Level> {
        vec![
            Level::new(1, "HELLO", &["HELL", "ELLO"]),
            Level::new(2, "PAINTER", &["PAIN", "PANE"]),
            Level::new(3, "HEART", &["HEAT", "RATE"]),
        ]
    }

    #[tokio::test]
    async fn no_arguments_checks_all_levels() {
        let oracle = FixedOracle::unreachable();
        let run = run_validate(&oracle, &levels(), None, None).await.unwrap();
        assert_eq!(run.levels_checked, 3);
        assert_eq!(run.levels_clean, 0);
    }

    #[tokio::test]
    async fn single_level_selection() {
        let oracle = FixedOracle::knowing(&["painter", "pain", "pane"]);
        let run = run_validate(&oracle, &levels(), Some(2), None).await.unwrap();
        assert_eq!(run.levels_checked, 1);
        assert_eq!(run.levels_clean, 1);
    }

    #[tokio::test]
    async fn unknown_level_is_an_error() {
        let oracle = FixedOracle::unreachable();
        let err = run_validate(&oracle, &levels(), Some(99), None)
            .await
            .unwrap_err();
        assert_eq!(err, "Level 99 not found");
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn inclusive_range_selection() {
        let oracle = FixedOracle::unreachable();
        let run = run_validate(&oracle, &levels(), Some(2), Some(3))
            .await
            .unwrap();
        assert_eq!(run.levels_checked, 2);
    }

    #[tokio::test]
    async fn inverted_range_is_an_error() {
        let oracle = FixedOracle::unreachable();
        let err = run_validate(&oracle, &levels(), Some(3), Some(1))
            .await
            .unwrap_err();
        assert!(err.contains("less than or equal"));
    }
}
