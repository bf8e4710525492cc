use std::io::{BufRead, Write};

use wordslicer::{VocabBuilder, Vocabulary, spanning::SpanningConfig, vocab::io::write_vocab};

use crate::{
    input_output::{InputArgs, OutputArgs},
    spanning_args::SpanningArgs,
};

/// Args for the build-vocab command.
#[derive(clap::Args, Debug)]
pub struct BuildVocabArgs {
    #[command(flatten)]
    spanning: SpanningArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Log the first N vocabulary entries.
    #[arg(long, default_value_t = 0)]
    show: usize,
}

impl BuildVocabArgs {
    /// Run the build-vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        build_vocab(
            &mut reader,
            &mut writer,
            self.spanning.config(),
            self.show,
        )?;

        Ok(())
    }
}

fn build_vocab(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    spanning: SpanningConfig,
    show: usize,
) -> Result<Vocabulary<u32>, Box<dyn std::error::Error>> {
    let mut corpus = String::new();
    reader.read_to_string(&mut corpus)?;

    let vocab: Vocabulary<u32> = VocabBuilder::new(spanning)?.build(&corpus)?;

    for (id, token) in vocab.tokens_by_id().into_iter().take(show) {
        log::info!("({token:?}, {id})");
    }

    write_vocab(&vocab, writer)?;
    writer.flush()?;

    Ok(vocab)
}
