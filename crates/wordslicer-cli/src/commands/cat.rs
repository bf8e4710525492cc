use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use wordslicer::{
    TokenDecoder,
    TokenEncoder,
    Tokenizer,
    rayon::{ParallelRayonDecoder, ParallelRayonEncoder},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    spanning_args::VocabArgs,
};

/// The tokenizer mode.
#[derive(Debug, Clone, Copy)]
pub enum TokenizerMode {
    /// Encode from text to tokens.
    Encode,

    /// Decode from tokens to text.
    Decode,
}

/// Mode selection for the tokenizer.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to tokens.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    ///
    /// The arg group makes the flags exclusive, and requires one of them.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode && !self.encode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Encode
        }
    }
}

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Lines per parallel batch.
    #[arg(long, default_value_t = 256)]
    batch_size: usize,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.vocab.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let batch_size = self.batch_size.max(1);
        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => {
                run_cat_encode(&mut reader, &mut writer, tokenizer, batch_size)?
            }
            TokenizerMode::Decode => {
                run_cat_decode(&mut reader, &mut writer, tokenizer, batch_size)?
            }
        }

        Ok(())
    }
}

/// Read up to `batch_size` lines; `None` at end of input.
fn read_batch(
    reader: &mut dyn BufRead,
    batch_size: usize,
) -> Result<Option<Vec<String>>, Box<dyn std::error::Error>> {
    let mut batch = Vec::with_capacity(batch_size);
    let mut line = String::new();
    while batch.len() < batch_size {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        batch.push(line.trim_end_matches(['\r', '\n']).to_string());
    }
    Ok(if batch.is_empty() { None } else { Some(batch) })
}

fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: Arc<Tokenizer<u32>>,
    batch_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = ParallelRayonEncoder::new(tokenizer);

    while let Some(lines) = read_batch(reader, batch_size)? {
        for tokens in encoder.try_encode_batch(&lines)? {
            for (idx, token) in tokens.iter().enumerate() {
                write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: Arc<Tokenizer<u32>>,
    batch_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoder = ParallelRayonDecoder::new(tokenizer);

    while let Some(lines) = read_batch(reader, batch_size)? {
        let batch = lines
            .iter()
            .map(|line| {
                line.split_whitespace()
                    .map(|s| s.parse::<u32>())
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        for text in decoder.try_decode_batch_to_strings(&batch)? {
            writeln!(writer, "{text}")?;
        }
        writer.flush()?;
    }
    Ok(())
}
