use std::sync::Arc;

use wordslicer::{
    Tokenizer,
    spanning::{DEFAULT_DELIMITER_PATTERN, QUOTED_DELIMITER_PATTERN, SpanningConfig},
    vocab::io::load_vocab_path,
};

/// Delimiter selection; must match between `build-vocab` and later use of the vocab.
#[derive(clap::Args, Debug)]
#[group(required = false, multiple = false)]
pub struct SpanningArgs {
    /// Also split on the double quote.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    quoted: bool,

    /// Custom delimiter regex; each match is kept as a token.
    #[arg(long)]
    pattern: Option<String>,
}

impl SpanningArgs {
    /// Get the spanning config.
    pub fn config(&self) -> SpanningConfig {
        if let Some(pattern) = &self.pattern {
            SpanningConfig::from_pattern(pattern.as_str())
        } else if self.quoted {
            SpanningConfig::from_pattern(QUOTED_DELIMITER_PATTERN)
        } else {
            SpanningConfig::from_pattern(DEFAULT_DELIMITER_PATTERN)
        }
    }
}

/// Vocabulary file selector arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Vocabulary file, as written by `build-vocab`.
    #[arg(long)]
    vocab: String,

    #[command(flatten)]
    spanning: SpanningArgs,
}

impl VocabArgs {
    /// Load the tokenizer.
    pub fn load_tokenizer(&self) -> Result<Arc<Tokenizer<u32>>, Box<dyn std::error::Error>> {
        let vocab = load_vocab_path(&self.vocab, self.spanning.config())?;
        log::info!("Loaded {} tokens from {}", vocab.len(), self.vocab);

        Ok(Arc::new(Tokenizer::new(vocab)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config() {
        let args = SpanningArgs {
            quoted: false,
            pattern: None,
        };
        assert_eq!(args.config(), SpanningConfig::default());

        let args = SpanningArgs {
            quoted: true,
            pattern: None,
        };
        assert_eq!(
            args.config().pattern().as_str(),
            QUOTED_DELIMITER_PATTERN.as_str()
        );

        let args = SpanningArgs {
            quoted: false,
            pattern: Some(r"(\s)".to_string()),
        };
        assert_eq!(args.config().pattern().as_str(), r"(\s)");
    }
}
