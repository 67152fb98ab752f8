//! Interactive play mode
//!
//! Text-based session over the game core. Type a word to spell and submit
//! it; everything else is a command. Progress is written back to the save
//! file after every scoring change, so quitting (or crashing) mid-level
//! loses at most the word being typed.

use crate::catalog::level_by_index;
use crate::core::Level;
use crate::dictionary::DictionaryOracle;
use crate::persist::{self, SaveState};
use crate::session::{Feedback, GameSession};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error when the catalog is empty, the save file is corrupt, or
/// stdin/stdout fail.
pub async fn run_play<O: DictionaryOracle>(
    oracle: &O,
    levels: &[Level],
    save_path: &Path,
) -> Result<(), String> {
    let Some(first_level) = levels.first() else {
        return Err("The level catalog is empty".to_string());
    };

    let save = persist::load_or_default(save_path).map_err(|err| err.to_string())?;
    let mut level = level_by_index(levels, save.current_level_index).unwrap_or(first_level);
    let mut session = GameSession::with_progress(level, save.score, save.guessed_words);

    print_banner();
    print_level(level, levels.len(), &session);

    loop {
        let input = read_line("")?;
        match input.to_uppercase().as_str() {
            "QUIT" | "Q" => {
                save_progress(save_path, level.index, &session)?;
                println!("Progress saved. Goodbye!");
                return Ok(());
            }
            "HELP" | "?" => print_help(),
            "CLEAR" => session.clear(),
            "WORDS" => print_guessed(&session),
            "CLUE" => {
                if let Some(feedback) = session.request_clue() {
                    print_feedback(&feedback);
                    save_progress(save_path, level.index, &session)?;
                    if session.is_complete() {
                        print_level_complete(&session);
                    }
                } else {
                    println!("Every answer is already found - no clue to give.");
                }
            }
            "NEXT" => {
                if !session.is_complete() {
                    println!("Finish this level first (or ask for a clue).");
                    continue;
                }
                match level_by_index(levels, level.index + 1) {
                    Some(next) => {
                        level = next;
                        // Guessed words reset per level; the score carries on
                        session = GameSession::with_progress(level, session.score(), Vec::new());
                        save_progress(save_path, level.index, &session)?;
                        print_level(level, levels.len(), &session);
                    }
                    None => {
                        println!(
                            "\n{} Final score: {}",
                            "You finished every level!".bright_green().bold(),
                            session.score().to_string().bright_yellow()
                        );
                        save_progress(save_path, level.index, &session)?;
                        return Ok(());
                    }
                }
            }
            "" => {}
            word => {
                if session.is_complete() {
                    println!("Level complete - type 'next' to continue.");
                    continue;
                }
                spell_and_submit(oracle, &mut session, word).await;
                if session
                    .guessed_words()
                    .contains(&word.to_ascii_uppercase())
                {
                    save_progress(save_path, level.index, &session)?;
                }
                if session.is_complete() {
                    print_level_complete(&session);
                }
            }
        }
    }
}

/// Spell a typed word letter by letter, then submit it
///
/// When some letter of the word has no remaining supply the attempt is
/// abandoned before submission, mirroring the on-screen keyboard where such
/// a letter simply cannot be pressed.
async fn spell_and_submit<O: DictionaryOracle>(
    oracle: &O,
    session: &mut GameSession,
    word: &str,
) {
    for letter in word.chars() {
        session.click_letter(letter);
    }

    if !session.current_input().eq_ignore_ascii_case(word) {
        session.clear();
        println!(
            "{}",
            format!(
                "You can't spell {} with the letters of {}.",
                word,
                session.base_word()
            )
            .red()
        );
        return;
    }

    if let Some(feedback) = session.submit(oracle).await {
        print_feedback(&feedback);
    }
}

fn save_progress(save_path: &Path, level_index: u32, session: &GameSession) -> Result<(), String> {
    let state = SaveState {
        current_level_index: level_index,
        score: session.score(),
        guessed_words: session.guessed_words().to_vec(),
    };
    persist::save(save_path, &state).map_err(|err| err.to_string())
}

fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|err| err.to_string())?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|err| err.to_string())?;
    if bytes == 0 {
        // stdin closed; treat as a quit request
        return Ok("quit".to_string());
    }
    Ok(line.trim().to_string())
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                         SUBWORDS                         ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!("\nSpell shorter words from the level's letters. Finding every");
    println!("listed answer completes the level; real words off the list");
    println!("score double as bonus words.");
    println!("\nType a word to submit it, or: clue, words, clear, next, help, quit\n");
}

fn print_help() {
    println!("  <word>  spell and submit a word");
    println!("  clue    reveal one unfound answer (no points)");
    println!("  words   show the words you've found");
    println!("  clear   wipe the letters you've typed");
    println!("  next    advance after completing a level");
    println!("  quit    save progress and exit");
}

fn print_level(level: &Level, total: usize, session: &GameSession) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Level {} of {}   Score: {}",
        level.index.to_string().bright_yellow(),
        total,
        session.score().to_string().bright_yellow()
    );
    println!(
        "Letters: {}",
        spaced_letters(session.base_word()).bright_cyan().bold()
    );
    println!(
        "Find {} words ({} found)",
        session.target_words().len(),
        session
            .target_words()
            .iter()
            .filter(|word| session.guessed_words().contains(word))
            .count()
    );
    println!("{}", "─".repeat(60).cyan());
}

fn print_guessed(session: &GameSession) {
    if session.guessed_words().is_empty() {
        println!("Nothing found yet.");
    } else {
        println!("Found: {}", session.guessed_words().join(", "));
    }
}

fn print_feedback(feedback: &Feedback) {
    if feedback.is_success() {
        println!("{}", feedback.to_string().green());
    } else {
        println!("{}", feedback.to_string().red());
    }
}

fn print_level_complete(session: &GameSession) {
    println!(
        "\n{} Score so far: {}",
        "Level complete!".bright_green().bold(),
        session.score().to_string().bright_yellow()
    );
    println!("Type 'next' to continue.\n");
}

fn spaced_letters(word: &str) -> String {
    let mut spaced = String::with_capacity(word.len() * 2);
    for (i, letter) in word.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(letter);
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::testing::FixedOracle;

    #[tokio::test]
    async fn spell_and_submit_scores_a_word() {
        let oracle = FixedOracle::knowing(&["hell"]);
        let level = Level::new(1, "HELLO", &["HELL", "ELLO"]);
        let mut session = GameSession::new(&level);

        spell_and_submit(&oracle, &mut session, "hell").await;
        assert_eq!(session.guessed_words(), ["HELL"]);
        assert_eq!(session.score(), 100);
    }

    #[tokio::test]
    async fn unspellable_word_never_reaches_the_oracle() {
        let oracle = FixedOracle::knowing(&["lull"]);
        let level = Level::new(1, "HELLO", &["HELL"]);
        let mut session = GameSession::new(&level);

        // Three Ls exceed HELLO's supply
        spell_and_submit(&oracle, &mut session, "lull").await;
        assert_eq!(oracle.call_count(), 0);
        assert_eq!(session.current_input(), "");
        assert_eq!(session.available_letters(), session.letter_budget());
    }

    #[test]
    fn spaced_letters_formats_base_word() {
        assert_eq!(spaced_letters("HELLO"), "H E L L O");
        assert_eq!(spaced_letters(""), "");
    }
}
