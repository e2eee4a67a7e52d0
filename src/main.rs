//! Collection inspector binary
//!
//! Parses Sokoban collection files and prints their structure.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sokoban_rs::loader::CollectionLoader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sok")]
#[command(about = "Sokoban level collection inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging of parser decisions
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a collection file
    Info {
        /// Collection file (.sok, .txt or .xsb)
        file: PathBuf,
    },
    /// Dump the fully parsed collection
    Dump {
        /// Collection file (.sok, .txt or .xsb)
        file: PathBuf,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Info { file } => {
            let collection = CollectionLoader::load_from_file(&file)
                .with_context(|| format!("loading {}", file.display()))?;

            println!("Collection: {}", collection.title);
            println!("Author:     {}", collection.author.name);
            if !collection.comment.is_empty() {
                println!("Comment:\n{}", collection.comment);
            }
            println!("Levels:     {}", collection.level_count());

            for level in &collection.levels {
                println!(
                    "  {:>3}. {} ({}x{}, {} boxes, {} solutions, {} snapshots)",
                    level.number,
                    level.title,
                    level.width,
                    level.height,
                    level.box_count,
                    level.solutions.len(),
                    level.snapshots.len(),
                );
            }
        }
        Commands::Dump { file, json } => {
            let collection = CollectionLoader::load_from_file(&file)
                .with_context(|| format!("loading {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&collection)?);
            } else {
                for level in &collection.levels {
                    println!("{}. {}", level.number, level.title);
                    println!("{}", level.board_as_string());
                    for solution in &level.solutions {
                        println!("Solution: {}", solution.lurd);
                    }
                    println!();
                }
            }
        }
    }

    Ok(())
}
