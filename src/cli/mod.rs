//! CLI module for the lingodeck command-line interface.
//!
//! Without a subcommand lingodeck opens the review screen. Subcommands print
//! to stdout and exit.

mod common;
pub mod completions;

pub use common::*;

use crate::app::LaunchOptions;
use crate::config::SpacedRepetitionSettings;
use crate::services::DueAndNewCounter;
use crate::styles::ThemeType;
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;

const VOCABULARY_FILE_HINT: &str = indoc! {r#"
    Vocabulary files are JSON arrays named <set id>.json, for example:
      [{"id": "1", "text": "hola", "definitions": ["hello"], "category": "Greetings"}]
"#};

/// A terminal vocabulary trainer with spaced-repetition review counts
#[derive(Parser, Debug)]
#[command(name = "lingodeck", version, about, long_about = None)]
pub struct Cli {
    /// Only count vocabulary in this category (repeatable)
    #[arg(short, long = "category", value_name = "NAME", global = true)]
    pub categories: Vec<String>,

    /// Set to study instead of the configured active set
    #[arg(short, long, value_name = "ID", global = true)]
    pub set: Option<String>,

    /// Theme override
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print due and new counts for a set
    Counts,
    /// List configured sets
    Sets,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Options for launching the TUI
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            categories: self.categories.clone(),
            set: self.set.clone(),
            theme: self.theme.as_deref().and_then(|t| t.parse::<ThemeType>().ok()),
        }
    }

    /// Execute the subcommand, if any. Returns false when the TUI should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Counts) => cmd_counts(&self.categories, self.set.as_deref())?,
            Some(Commands::Sets) => cmd_sets()?,
            Some(Commands::Completions { shell }) => completions::generate(*shell)?,
            None => return Ok(false),
        }
        Ok(true)
    }
}

fn cmd_counts(categories: &[String], set: Option<&str>) -> Result<()> {
    let ctx = CliContext::load()?;
    let set = ctx.resolve_set(set)?;
    let vocabulary = ctx.load_vocabulary(&set.id)?;
    if vocabulary.is_empty() {
        print_warning(&format!(
            "No vocabulary for '{}' in {:?}",
            set.name, ctx.config.data_dir
        ));
        print!("{}", VOCABULARY_FILE_HINT);
    }

    let settings: SpacedRepetitionSettings = ctx.config.spaced_repetition;
    let counts = DueAndNewCounter::new(settings).count(&vocabulary, Some(categories), Utc::now());

    println!("{} ({})", set.name, set.id);
    if !categories.is_empty() {
        println!("  categories: {}", categories.join(", "));
    }
    println!("  due: {}", counts.due);
    println!("  new: {}", counts.new);
    Ok(())
}

fn cmd_sets() -> Result<()> {
    let ctx = CliContext::load()?;
    if ctx.config.sets.is_empty() {
        print_info("No sets configured");
        return Ok(());
    }
    for set in &ctx.config.sets {
        let marker = if ctx.is_active_set(&set.id) { "*" } else { " " };
        println!(
            "{} {:<16} {} ({} -> {})",
            marker, set.id, set.name, set.learning_language, set.translated_language
        );
    }
    Ok(())
}
