use crate::commands::{build_vocab::BuildVocabArgs, cat::CatArgs, inspect::InspectArgs};

pub mod build_vocab;
pub mod cat;
pub mod inspect;

/// Subcommands for wslice
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from a corpus.
    BuildVocab(BuildVocabArgs),

    /// Act as a line-streaming tokenizer.
    Cat(CatArgs),

    /// Print vocabulary entries in id order.
    Inspect(InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::BuildVocab(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
