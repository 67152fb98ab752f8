//! Display functions for command results

use crate::commands::ValidationRun;
use crate::core::Level;
use crate::dictionary::Definition;
use crate::validate::ValidationReport;
use colored::Colorize;

/// Print one level's validation breakdown
pub fn print_validation_report(level: &Level, report: &ValidationReport) {
    println!(
        "\nValidating level {} (\"{}\"):",
        level.index,
        level.base_word.bright_yellow()
    );

    if report.is_clean() {
        println!("  {}", "All checks passed".green());
        print_coverage_gaps(report);
        return;
    }

    if report.base_word_too_short {
        println!(
            "  {}",
            "Base word is too short (must be at least 5 letters)".red()
        );
    }
    if report.base_word_not_real {
        println!("  {}", "Base word is not a valid English word".red());
    }
    for word in &report.invalid {
        println!("  {word} - {}", "Invalid word".red());
    }
    for word in &report.duplicates {
        println!("  {word} - {}", "Duplicate word".yellow());
    }
    for word in &report.not_real_words {
        println!("  {word} - {}", "Not a real English word".red());
    }
    print_coverage_gaps(report);
}

fn print_coverage_gaps(report: &ValidationReport) {
    let mut missing: Vec<&str> = Vec::new();
    if !report.has_3_letter_word {
        missing.push("3");
    }
    if !report.has_4_letter_word {
        missing.push("4");
    }
    if !report.has_5_letter_word {
        missing.push("5");
    }
    if !missing.is_empty() {
        println!(
            "  {}",
            format!(
                "No confirmed {}-letter word among the answers",
                missing.join("/")
            )
            .yellow()
        );
    }
}

/// Print the summary line after a validation run
pub fn print_validation_summary(run: &ValidationRun) {
    println!("\n{}", "─".repeat(60).cyan());
    let findings = run.levels_checked - run.levels_clean;
    if findings == 0 {
        println!(
            "{}",
            format!("Checked {} level(s): all clean", run.levels_checked).green()
        );
    } else {
        println!(
            "Checked {} level(s): {} clean, {}",
            run.levels_checked,
            run.levels_clean.to_string().green(),
            format!("{findings} with findings").yellow()
        );
    }
}

/// Print a word's definitions
pub fn print_definition(definition: &Definition) {
    println!(
        "\n{}",
        definition.word.to_uppercase().bright_yellow().bold()
    );
    for (i, sense) in definition.definitions.iter().enumerate() {
        println!("  {}. {sense}", i + 1);
    }
}
