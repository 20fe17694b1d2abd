#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod word;
pub use word::{Word, WordList, WORD_LENGTH};

pub mod words;

pub mod feedback;
pub use feedback::{evaluate, Feedback, Grade, Tally};

pub mod host;
pub use host::{CandidatePool, Phase, Resolver, SortOrder};

pub mod session;
pub use session::{GameConfig, GuessOutcome, Mode, Session};

pub mod store;
pub use store::{SessionId, SessionStore};

#[cfg(feature = "serde")]
pub mod api;

/// A [`Result`](std::result::Result) defaulting to [`WordleError`].
pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// The errors that `wordle_host` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("guess was rejected")]
    Guess {
        #[from]
        kind: GuessError,
    },

    #[error("game could not be configured")]
    Config {
        #[from]
        kind: ConfigError,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble serializing or deserializing a message")]
    Serde(#[from] serde_json::Error),
}

impl WordleError {
    /// The class of failure this error belongs to.
    pub fn status(&self) -> Status {
        match self {
            WordleError::Guess { kind } => kind.status(),
            _ => Status::BadRequest,
        }
    }
}

/// Why a guess was refused.
///
/// All of these are detected before the session is touched, so a rejected
/// guess never changes the guess count or the candidate pool.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// No session is stored under the identifier.
    #[error("no game with id \"{0}\" exists")]
    NotFound(String),

    /// The session already ended in a win or a loss.
    #[error("the game is already over")]
    AlreadyOver,

    /// The guess is not [`WORD_LENGTH`] letters long.
    #[error("a guess must be {expected} letters long, not {found}")]
    InvalidLength { expected: usize, found: usize },

    /// The guess has the right length but contains something other than
    /// ASCII letters.
    #[error("the guess \"{0}\" contains characters that are not letters")]
    NotAlphabetic(String),

    /// The word was already guessed in a session that rejects repeats.
    #[error("\"{0}\" has already been guessed")]
    DuplicateGuess(String),

    /// The guess ignores a hit or a present letter revealed by the
    /// previous guess.
    #[error("that guess does not follow hardmode rules")]
    InvalidHardModeGuess,
}

impl GuessError {
    /// The class of failure this error belongs to.
    pub fn status(&self) -> Status {
        match self {
            GuessError::NotFound(_) => Status::NotFound,
            _ => Status::BadRequest,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the word list does not contain any words")]
    EmptyWordList,

    #[error("a game must allow at least one guess")]
    NoGuessesAllowed,

    #[error("\"{0}\" is not a {} letter word", WORD_LENGTH)]
    InvalidWord(String),
}

/// Failure classes that a transport maps onto its own status signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The request named something that does not exist.
    NotFound,

    /// The request was malformed or not allowed in the current state.
    BadRequest,
}

impl Status {
    /// The HTTP status code for this class.
    pub fn code(&self) -> u16 {
        match self {
            Status::NotFound => 404,
            Status::BadRequest => 400,
        }
    }
}
