//! Many sessions at once, each behind its own lock.

use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::Display,
    ops::Deref,
    sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock},
};

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Feedback, GameConfig, GuessError, GuessOutcome, Result, Session, Word, WordList};

const ID_LENGTH: usize = 8;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The name a session is stored under.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct SessionId(String);

impl SessionId {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        SessionId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        SessionId(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        SessionId(id.to_string())
    }
}

impl Deref for SessionId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A thread-safe home for sessions.
///
/// Guesses for one session are applied one at a time, while different
/// sessions can be played in parallel. The store's RNG names new sessions
/// and draws the answers of normal and infinite games; pass a seeded one
/// to [`with_rng()`](SessionStore::with_rng()) for reproducible games.
///
/// # Examples
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use wordle_host::{GameConfig, Mode, SessionStore, WordList};
///
/// let store = SessionStore::with_rng(WordList::embedded(), StdRng::seed_from_u64(1));
/// let id = store.create(GameConfig::new(Mode::Infinite))?;
///
/// let outcome = store.submit_guess(&id, "crane")?;
/// assert!(!outcome.game_over);
/// assert_eq!(store.history(&id)?.len(), 1);
///
/// assert!(store.remove(&id));
/// assert!(store.submit_guess(&id, "crane").is_err());
/// #
/// # Ok::<_, wordle_host::WordleError>(())
/// ```
#[derive(Debug)]
pub struct SessionStore<R = StdRng> {
    words: WordList,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
    rng: Mutex<R>,
}

impl SessionStore<StdRng> {
    /// Creates an empty store whose RNG is seeded from the OS.
    pub fn new(words: WordList) -> Self {
        Self::with_rng(words, StdRng::from_entropy())
    }
}

impl Default for SessionStore<StdRng> {
    fn default() -> Self {
        Self::new(WordList::embedded())
    }
}

impl<R: Rng> SessionStore<R> {
    pub fn with_rng(words: WordList, rng: R) -> Self {
        SessionStore {
            words,
            sessions: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
        }
    }

    /// The list new sessions draw from.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Starts a session over the store's word list.
    pub fn create(&self, config: GameConfig) -> Result<SessionId> {
        self.create_with_words(config, &self.words)
    }

    /// Starts a session over `words` instead of the store's list.
    pub fn create_with_words(&self, config: GameConfig, words: &WordList) -> Result<SessionId> {
        let mut rng = lock(&self.rng);
        let session = Session::new(config, words, &mut *rng)?;

        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let id = loop {
            let id = SessionId::generate(&mut *rng);
            if !sessions.contains_key(&id) {
                break id;
            }
        };

        info!("created game {}", id);
        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));
        Ok(id)
    }

    fn session(&self, id: &str) -> Result<Arc<Mutex<Session>>, GuessError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| GuessError::NotFound(id.to_string()))
    }

    /// Submits a guess to the session stored under `id`.
    pub fn submit_guess(&self, id: &str, guess: &str) -> Result<GuessOutcome, GuessError> {
        let session = self.session(id)?;
        let mut session = lock(&session);
        session.submit_guess(guess)
    }

    /// The accepted guesses of the session stored under `id`.
    pub fn history(&self, id: &str) -> Result<Vec<(Word, Feedback)>, GuessError> {
        let session = self.session(id)?;
        let session = lock(&session);
        Ok(session.history().to_vec())
    }

    /// Drops the session stored under `id`, returning whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
