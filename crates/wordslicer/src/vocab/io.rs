//! # Vocabulary IO
//!
//! Vocabularies are stored one entry per line, sorted by id:
//! ```terminaloutput
//! {BASE64 TOKEN} {ID}
//! ```
//!
//! The spanning configuration is not stored; callers supply it on load.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    WSResult,
    WordslicerError,
    spanning::SpanningConfig,
    types::TokenType,
    vocab::{TokenIdMap, Vocabulary},
};

/// Load a [`Vocabulary`] from a vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `spanning` - the spanning configuration the vocabulary was built with.
pub fn load_vocab_path<T, P>(
    path: P,
    spanning: SpanningConfig,
) -> WSResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader, spanning)
}

/// Read a [`Vocabulary`] from a vocab line reader.
pub fn read_vocab<T, R>(
    reader: R,
    spanning: SpanningConfig,
) -> WSResult<Vocabulary<T>>
where
    T: TokenType,
    R: BufRead,
{
    Ok(Vocabulary::from_token_map(
        spanning,
        read_token_map(reader)?,
    ))
}

/// Read a [`TokenIdMap`] from a vocab line reader.
///
/// Blank lines are skipped; a token listed twice is a parse error.
pub fn read_token_map<T, R>(reader: R) -> WSResult<TokenIdMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut token_map = TokenIdMap::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (encoded, id) = line.split_once(' ').ok_or_else(|| {
            WordslicerError::Parse(format!("line {}: expected \"TOKEN ID\"", idx + 1))
        })?;

        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| WordslicerError::Parse(format!("line {}: {e}", idx + 1)))?;
        let token = String::from_utf8(bytes)
            .map_err(|e| WordslicerError::Parse(format!("line {}: {e}", idx + 1)))?;

        let id: u64 = id
            .trim()
            .parse()
            .map_err(|e| WordslicerError::Parse(format!("line {}: {e}", idx + 1)))?;
        let id = T::from_u64(id).ok_or(WordslicerError::TokenOutOfRange)?;

        if token_map.contains_key(&token) {
            return Err(WordslicerError::Parse(format!(
                "line {}: duplicate token {token:?}",
                idx + 1
            )));
        }
        token_map.insert(token, id);
    }

    Ok(token_map)
}

/// Save a [`Vocabulary`] to a vocab file.
pub fn save_vocab_path<T, P>(
    vocab: &Vocabulary<T>,
    path: P,
) -> WSResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`Vocabulary`] to a [`Write`] writer.
pub fn write_vocab<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> WSResult<()>
where
    T: TokenType,
    W: Write + ?Sized,
{
    for (id, token) in vocab.tokens_by_id() {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(token), id)?;
    }
    Ok(())
}
