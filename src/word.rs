//! Five letter words and the lists that games draw them from.

use std::{fmt::Display, fs, ops::Deref, path::Path, str::FromStr};

use itertools::Itertools;
use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{words::WORDS, ConfigError, GuessError, Result, WordleError};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A five letter word made of uppercase ASCII letters.
///
/// Parsing uppercases the letters, so `"crane"`, `"Crane"` and `"CRANE"`
/// are the same word. Whitespace is not stripped and counts toward the
/// length. Whether the word exists in a dictionary is not checked here.
///
/// # Examples
///
/// ```rust
/// use wordle_host::{GuessError, Word};
///
/// let crane: Word = "crane".parse()?;
/// assert_eq!(crane, "CRANE");
///
/// assert_eq!(
///     "cranes".parse::<Word>(),
///     Err(GuessError::InvalidLength { expected: 5, found: 6 })
/// );
/// assert!("cr4ne".parse::<Word>().is_err());
/// #
/// # Ok::<_, GuessError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", try_from = "String", into = "String")
)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

impl Word {
    /// Returns the letters of the word as ASCII bytes.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Returns an iterator over the letters of the word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| b as char)
    }

    /// Returns true if `letter` appears anywhere in the word.
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = GuessError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let found = text.chars().count();
        if found != WORD_LENGTH {
            return Err(GuessError::InvalidLength {
                expected: WORD_LENGTH,
                found,
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessError::NotAlphabetic(text.to_string()));
        }

        let mut letters = [0; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Word { letters })
    }
}

impl TryFrom<String> for Word {
    type Error = GuessError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.letters[..] == *other.as_bytes()
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The words a game may use as its answer.
///
/// A list is never empty and never holds the same word twice. Order is
/// kept from the source, which matters for the host-cheat mode: the
/// candidate pool starts out in list order.
///
/// # Examples
///
/// ```rust
/// use wordle_host::WordList;
///
/// let list: WordList = "crane\nslate\n\nnope\ncrane\n".parse()?;
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[1], "SLATE");
/// #
/// # Ok::<_, wordle_host::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Creates a list from words, dropping repeats.
    ///
    /// Returns an error if there are no words.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let words: Vec<Word> = words.into_iter().unique().collect();
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList.into());
        }

        Ok(WordList { words })
    }

    /// Creates a list from exact spellings, failing on the first entry
    /// that is not a five letter word.
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Result<Self> {
        let words = words
            .into_iter()
            .map(|w| {
                w.as_ref()
                    .parse::<Word>()
                    .map_err(|_| ConfigError::InvalidWord(w.as_ref().to_string()))
            })
            .collect::<Result<Vec<Word>, _>>()?;

        Self::new(words)
    }

    /// The list compiled into the crate, see [`WORDS`](crate::words::WORDS).
    pub fn embedded() -> Self {
        WordList {
            words: WORDS
                .iter()
                .filter_map(|w| w.parse().ok())
                .unique()
                .collect(),
        }
    }

    /// Reads a newline-delimited list from a file.
    ///
    /// Lines are handled as in [`str::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        fs::read_to_string(path)?.parse()
    }
}

impl FromStr for WordList {
    type Err = WordleError;

    /// Parses a newline-delimited list. Blank lines are ignored and lines
    /// that are not five letters are skipped with a warning.
    fn from_str(data: &str) -> Result<Self> {
        let words = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match line.parse::<Word>() {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping \"{}\" in word list: {}", line, e);
                    None
                }
            });

        Self::new(words)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Deref for WordList {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
