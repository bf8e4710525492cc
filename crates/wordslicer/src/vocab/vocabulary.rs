//! # Word ``{ String <-> T }`` Vocabulary

use std::collections::BTreeSet;

use crate::{
    WSResult,
    WordslicerError,
    spanning::SpanningConfig,
    types::{TokenType, hash_map_with_capacity},
    vocab::{IdTokenMap, TokenIdMap},
};

/// Token vocabulary as a dictionary map of ``{ String -> T }``.
///
/// The vocabulary carries the [`SpanningConfig`] used to produce its tokens;
/// encoders built from it split text the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: TokenType> {
    spanning: SpanningConfig,
    token_map: TokenIdMap<T>,
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a [`Vocabulary`] from an arbitrary `{ token -> id }` map.
    ///
    /// No validation happens here; a map which is not a bijection
    /// is rejected when a decoder (or tokenizer) is built from it.
    pub fn from_token_map(
        spanning: SpanningConfig,
        token_map: TokenIdMap<T>,
    ) -> Self {
        Self {
            spanning,
            token_map,
        }
    }

    /// Build a [`Vocabulary`] assigning ids `0..N` in set order.
    ///
    /// ## Returns
    /// [`WordslicerError::VocabSizeOverflow`] if `N` ids do not fit in `T`.
    pub(crate) fn from_token_set(
        spanning: SpanningConfig,
        tokens: BTreeSet<&str>,
    ) -> WSResult<Self> {
        let size = tokens.len();
        let mut token_map: TokenIdMap<T> = hash_map_with_capacity(size);
        for (idx, token) in tokens.into_iter().enumerate() {
            let id = T::from_usize(idx).ok_or(WordslicerError::VocabSizeOverflow { size })?;
            token_map.insert(token.to_string(), id);
        }

        Ok(Self::from_token_map(spanning, token_map))
    }

    /// Get the spanning configuration.
    pub fn spanning(&self) -> &SpanningConfig {
        &self.spanning
    }

    /// Get the `{ token -> id }` map.
    pub fn token_map(&self) -> &TokenIdMap<T> {
        &self.token_map
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.token_map.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.token_map.is_empty()
    }

    /// Return the id for the token, if any.
    pub fn get_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_map.get(token).copied()
    }

    /// Is the token in the vocabulary?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_map.contains_key(token)
    }

    /// Iterate over ``(token, id)`` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.token_map.iter().map(|(s, &t)| (s.as_str(), t))
    }

    /// All ``(id, token)`` pairs, sorted by id.
    pub fn tokens_by_id(&self) -> Vec<(T, &str)> {
        let mut items: Vec<(T, &str)> = self.iter().map(|(s, t)| (t, s)).collect();
        items.sort();
        items
    }

    /// The highest id, or None.
    pub fn max_id(&self) -> Option<T> {
        self.token_map.values().copied().max()
    }

    /// Invert the vocabulary into an `{ id -> token }` map.
    ///
    /// ## Returns
    /// [`WordslicerError::VocabConflict`] when two tokens share one id.
    pub fn try_id_map(&self) -> WSResult<IdTokenMap<T>> {
        let mut id_map: IdTokenMap<T> = hash_map_with_capacity(self.len());
        for (token, &id) in self.token_map.iter() {
            if let Some(prev) = id_map.insert(id, token.clone()) {
                let (first, second) = if prev <= *token {
                    (prev, token.clone())
                } else {
                    (token.clone(), prev)
                };
                return Err(WordslicerError::VocabConflict {
                    id: id.to_u64().ok_or(WordslicerError::TokenOutOfRange)?,
                    first,
                    second,
                });
            }
        }
        Ok(id_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vocab() -> Vocabulary<u32> {
        let tokens: BTreeSet<&str> = ["Hi", ",", "Bob", "."].into_iter().collect();
        Vocabulary::from_token_set(SpanningConfig::default(), tokens).unwrap()
    }

    #[test]
    fn test_from_token_set() {
        let vocab = sample_vocab();

        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.max_id(), Some(3));

        assert_eq!(vocab.get_id(","), Some(0));
        assert_eq!(vocab.get_id("."), Some(1));
        assert_eq!(vocab.get_id("Bob"), Some(2));
        assert_eq!(vocab.get_id("Hi"), Some(3));
        assert_eq!(vocab.get_id("hi"), None);
        assert!(vocab.contains("Bob"));
        assert!(!vocab.contains("bob"));

        assert_eq!(
            vocab.tokens_by_id(),
            vec![(0, ","), (1, "."), (2, "Bob"), (3, "Hi")]
        );
    }

    #[test]
    fn test_overflow() {
        let owned: Vec<String> = (0..300).map(|i| format!("w{i:03}")).collect();
        let tokens: BTreeSet<&str> = owned.iter().map(|s| s.as_str()).collect();

        let res = Vocabulary::<u8>::from_token_set(SpanningConfig::default(), tokens);
        assert!(matches!(
            res,
            Err(WordslicerError::VocabSizeOverflow { size: 300 })
        ));
    }

    #[test]
    fn test_try_id_map() {
        let vocab = sample_vocab();
        let id_map = vocab.try_id_map().unwrap();
        assert_eq!(id_map.len(), 4);
        assert_eq!(id_map.get(&2).map(String::as_str), Some("Bob"));
    }

    #[test]
    fn test_try_id_map_conflict() {
        let mut token_map: TokenIdMap<u32> = Default::default();
        token_map.insert("b".to_string(), 1);
        token_map.insert("a".to_string(), 1);
        token_map.insert("c".to_string(), 0);

        let vocab = Vocabulary::from_token_map(SpanningConfig::default(), token_map);
        match vocab.try_id_map() {
            Err(WordslicerError::VocabConflict { id, first, second }) => {
                assert_eq!(id, 1);
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_empty() {
        let vocab: Vocabulary<u32> =
            Vocabulary::from_token_set(SpanningConfig::default(), BTreeSet::new()).unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab.max_id(), None);
        assert!(vocab.try_id_map().unwrap().is_empty());
    }
}
