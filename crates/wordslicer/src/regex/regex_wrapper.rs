//! # Regex Wrapper

use core::ops::Range;

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<::regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<::regex::Error> for ErrorWrapper {
    fn from(err: ::regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(::regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<::regex::Regex> for RegexWrapper {
    fn from(regex: ::regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Visit the byte range of every non-overlapping match, left to right.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    /// * `f` - Called once per match range.
    ///
    /// ## Returns
    /// An error only when a `fancy_regex` match fails at runtime
    /// (for example, by exceeding its backtrack limit).
    pub fn try_for_each_match<F>(
        &self,
        haystack: &str,
        mut f: F,
    ) -> Result<(), ErrorWrapper>
    where
        F: FnMut(Range<usize>),
    {
        match self {
            Self::Basic(regex) => {
                for m in regex.find_iter(haystack) {
                    f(m.range());
                }
            }
            Self::Fancy(regex) => {
                for m in regex.find_iter(haystack) {
                    let m = m?;
                    f(m.start()..m.end());
                }
            }
        }
        Ok(())
    }

    /// Collect the byte ranges of every non-overlapping match.
    ///
    /// See [`Self::try_for_each_match`].
    pub fn find_ranges(
        &self,
        haystack: &str,
    ) -> Result<Vec<Range<usize>>, ErrorWrapper> {
        let mut ranges = Vec::new();
        self.try_for_each_match(haystack, |r| ranges.push(r))?;
        Ok(ranges)
    }
}
