use std::io::Write;

use wordslicer::Vocabulary;

use crate::{input_output::OutputArgs, spanning_args::VocabArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Print at most N entries.
    #[arg(long)]
    limit: Option<usize>,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.vocab.load_tokenizer()?;
        let mut writer = self.output.open_writer()?;

        write_entries(tokenizer.vocab(), &mut writer, self.limit)?;
        writer.flush()?;

        Ok(())
    }
}

fn write_entries(
    vocab: &Vocabulary<u32>,
    writer: &mut dyn Write,
    limit: Option<usize>,
) -> std::io::Result<()> {
    let limit = limit.unwrap_or(usize::MAX);
    for (id, token) in vocab.tokens_by_id().into_iter().take(limit) {
        writeln!(writer, "{id}\t{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordslicer::build_vocabulary;

    #[test]
    fn test_write_entries() {
        let vocab = build_vocabulary("Hi, Bob.").unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_entries(&vocab, &mut buf, None).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\t,\n1\t.\n2\tBob\n3\tHi\n");

        let mut buf: Vec<u8> = Vec::new();
        write_entries(&vocab, &mut buf, Some(2)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\t,\n1\t.\n");
    }
}
