use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "karuta")]
#[command(about = "Japanese vocabulary capture with local and Jisho lookups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a term without saving anything
    Lookup { term: String },

    /// Resolve terms and save them as flashcards
    Add {
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// List the saved flashcards
    List,

    /// Remove the flashcard at an index
    Remove { index: usize },

    /// Attach an example sentence to a flashcard
    Example { index: usize, sentence: String },

    /// Summarize the loaded dictionary
    Inspect,
}
