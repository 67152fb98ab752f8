//! Subwords - CLI
//!
//! Word-puzzle game: spell the hidden sub-words of each level's base word.
//! Ships an interactive play mode plus offline catalog tooling.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subwords::{
    catalog,
    commands::{run_define, run_play, run_sort, run_validate},
    core::Level,
    dictionary::{CachedOracle, HttpDictionary},
    output::{print_definition, print_validation_summary},
};

#[derive(Parser)]
#[command(
    name = "subwords",
    about = "Sub-word puzzle game with dictionary-backed word validation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom level catalog (JSON file); defaults to the built-in levels
    #[arg(short = 'c', long, global = true)]
    catalog: Option<PathBuf>,

    /// Dictionary API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play {
        /// Progress file to resume from and save to
        #[arg(short, long, default_value = "subwords-save.json")]
        save_file: PathBuf,
    },

    /// Validate level answers against the game rules and the dictionary
    Validate {
        /// First level to check (omit to check every level)
        start: Option<u32>,

        /// Last level of an inclusive range
        end: Option<u32>,
    },

    /// Look up a word's dictionary definitions
    Define {
        /// Word to look up
        word: String,
    },

    /// Sort each level's answers in a catalog file by length, then alphabetically
    Sort {
        /// Catalog file to rewrite in place
        file: PathBuf,
    },
}

/// Load the level catalog from the -c flag or fall back to the built-ins
fn load_levels(catalog_path: Option<&PathBuf>) -> Result<Vec<Level>> {
    match catalog_path {
        Some(path) => Ok(catalog::loader::load_from_file(path)?),
        None => Ok(catalog::levels()),
    }
}

fn build_oracle(api_url: Option<String>) -> CachedOracle<HttpDictionary> {
    let http = match api_url {
        Some(url) => HttpDictionary::with_base_url(url),
        None => HttpDictionary::new(),
    };
    CachedOracle::new(http)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let levels = load_levels(cli.catalog.as_ref())?;
    let oracle = build_oracle(cli.api_url);

    // Default to play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        save_file: PathBuf::from("subwords-save.json"),
    });

    match command {
        Commands::Play { save_file } => run_play(&oracle, &levels, &save_file)
            .await
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Validate { start, end } => {
            let run = run_validate(&oracle, &levels, start, end)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            print_validation_summary(&run);
            Ok(())
        }
        Commands::Define { word } => {
            let definition = run_define(&oracle, &word)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            print_definition(&definition);
            Ok(())
        }
        Commands::Sort { file } => {
            let outcome = run_sort(&file).map_err(|e| anyhow::anyhow!(e))?;
            println!("Sorted answers in {} level(s)", outcome.levels_sorted);
            Ok(())
        }
    }
}
