//! A single game, from its configuration to its last guess.

use log::{debug, info};
use rand::{seq::SliceRandom, Rng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    feedback::hardmode_guard, CandidatePool, ConfigError, Feedback, GuessError, Phase, Resolver,
    Result, SortOrder, Tally, Word, WordList,
};

/// The number of guesses a game allows unless configured otherwise.
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// The kind of game a session plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "kebab-case")
)]
pub enum Mode {
    /// The host keeps the whole word list open and commits as late as it
    /// can.
    HostCheat,

    /// A fixed answer chosen at random.
    Normal,

    /// A fixed answer chosen at random, with no limit on guesses and no
    /// repeated guesses. Hits and presents are scored along the way.
    Infinite,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::HostCheat
    }
}

/// How a session is set up.
///
/// Start from [`new()`](GameConfig::new()), which applies the defaults of
/// the mode, and adjust with the builder methods. These consume the
/// existing config and return a new one.
///
/// # Examples
///
/// ```rust
/// use wordle_host::{GameConfig, Mode};
///
/// let config = GameConfig::new(Mode::Normal).max_guesses(8).hard_mode(true);
/// assert_eq!(config.guess_limit(), Some(8));
/// assert!(config.is_hard());
/// assert!(!config.rejects_duplicates());
///
/// assert!(GameConfig::new(Mode::HostCheat).max_guesses(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameConfig {
    mode: Mode,
    max_guesses: Option<usize>,
    hard_mode: bool,
    reject_duplicates: bool,
    sort_order: SortOrder,
}

impl GameConfig {
    /// Creates the default config for `mode`.
    ///
    /// Defaults:
    /// 1. six guesses, or no limit in [`Mode::Infinite`]
    /// 2. easy mode
    /// 3. repeated guesses allowed, except in [`Mode::Infinite`]
    /// 4. candidates sorted by [`SortOrder::Score`]
    pub fn new(mode: Mode) -> Self {
        let infinite = mode == Mode::Infinite;
        GameConfig {
            mode,
            max_guesses: if infinite {
                None
            } else {
                Some(DEFAULT_MAX_GUESSES)
            },
            hard_mode: false,
            reject_duplicates: infinite,
            sort_order: SortOrder::default(),
        }
    }

    /// Caps the game at `n` guesses.
    pub fn max_guesses(self, n: usize) -> Self {
        GameConfig {
            max_guesses: Some(n),
            ..self
        }
    }

    /// Removes the cap on guesses. The game then only ends when it is won.
    pub fn unlimited_guesses(self) -> Self {
        GameConfig {
            max_guesses: None,
            ..self
        }
    }

    /// Requires each guess to reuse what the previous guess revealed.
    pub fn hard_mode(self, hard_mode: bool) -> Self {
        GameConfig { hard_mode, ..self }
    }

    pub fn reject_duplicates(self, reject_duplicates: bool) -> Self {
        GameConfig {
            reject_duplicates,
            ..self
        }
    }

    /// Sets the order the host sorts its candidates in.
    pub fn sort_order(self, sort_order: SortOrder) -> Self {
        GameConfig { sort_order, ..self }
    }

    /// Checks that a game can be played with this config.
    pub fn validate(&self) -> Result<()> {
        if self.max_guesses == Some(0) {
            return Err(ConfigError::NoGuessesAllowed.into());
        }
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn guess_limit(&self) -> Option<usize> {
        self.max_guesses
    }

    pub fn is_hard(&self) -> bool {
        self.hard_mode
    }

    pub fn rejects_duplicates(&self) -> bool {
        self.reject_duplicates
    }

    pub fn order(&self) -> SortOrder {
        self.sort_order
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

/// What the host says about one accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub game_over: bool,
    pub won: bool,

    /// Revealed only once the game is over.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub answer: Option<Word>,

    /// Totals across the session so far, this guess included.
    pub tally: Tally,
}

/// One game in progress.
///
/// A session owns its [`Resolver`] and the history of accepted guesses.
/// Guesses that are rejected leave it untouched.
///
/// # Examples
///
/// ```rust
/// use wordle_host::{CandidatePool, GameConfig, GuessError, Mode, Session, Word};
///
/// let panic: Word = "panic".parse()?;
/// let pool = CandidatePool::new([panic])?;
/// let mut session = Session::with_pool(GameConfig::new(Mode::Normal), pool)?;
///
/// let outcome = session.submit_guess("fancy")?;
/// assert!(!outcome.game_over);
/// assert_eq!(outcome.answer, None);
///
/// assert_eq!(
///     session.submit_guess("pan"),
///     Err(GuessError::InvalidLength { expected: 5, found: 3 })
/// );
/// assert_eq!(session.guess_count(), 1);
///
/// let outcome = session.submit_guess("panic")?;
/// assert!(outcome.won);
/// assert_eq!(outcome.answer, Some(panic));
/// assert_eq!(session.submit_guess("panic"), Err(GuessError::AlreadyOver));
/// #
/// # Ok::<_, wordle_host::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Session {
    config: GameConfig,
    resolver: Resolver,
    history: Vec<(Word, Feedback)>,
    tally: Tally,
    won: bool,
    over: bool,
}

impl Session {
    /// Creates a session over `words` as `config` describes.
    ///
    /// Host-cheat games start with every word as a candidate. The other
    /// modes draw a single answer with `rng`.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, words: &WordList, rng: &mut R) -> Result<Self> {
        let pool = match config.mode {
            Mode::HostCheat => CandidatePool::new(words.iter().copied())?,
            Mode::Normal | Mode::Infinite => {
                let answer = words.choose(rng).ok_or(ConfigError::EmptyWordList)?;
                CandidatePool::new([*answer])?
            }
        };

        Self::with_pool(config, pool)
    }

    /// Creates a session that plays against an explicit candidate pool,
    /// whatever the mode says.
    pub fn with_pool(config: GameConfig, pool: CandidatePool) -> Result<Self> {
        config.validate()?;
        let pool = pool.sort_order(config.sort_order);
        info!(
            "new {:?} game with {} candidate(s)",
            config.mode,
            pool.len()
        );

        Ok(Session {
            config,
            resolver: Resolver::new(pool),
            history: Vec::new(),
            tally: Tally::default(),
            won: false,
            over: false,
        })
    }

    /// Grades `guess` and advances the game.
    ///
    /// Checks run in order: the game must not be over, the guess must be a
    /// well-formed word, it must not repeat an earlier guess if the config
    /// rejects repeats, and in hard mode it must use what the previous
    /// feedback revealed. A guess that fails any of them is not counted.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GuessError> {
        if self.over {
            return Err(GuessError::AlreadyOver);
        }

        let guess: Word = guess.parse()?;

        if self.config.reject_duplicates && self.history.iter().any(|(w, _)| *w == guess) {
            return Err(GuessError::DuplicateGuess(guess.to_string()));
        }

        if self.config.hard_mode {
            if let Some((last_guess, last_feedback)) = self.history.last() {
                hardmode_guard(&guess, last_guess, last_feedback)?;
            }
        }

        let feedback = self.resolver.respond(&guess);
        self.history.push((guess, feedback));
        self.tally.record(&feedback);
        debug!("{} -> {}", guess, feedback);

        self.won = self.resolver.answer() == Some(&guess);
        self.over = self.won
            || self
                .config
                .max_guesses
                .map_or(false, |max| self.history.len() >= max);

        if self.over {
            info!(
                "game over after {} guess(es), {}",
                self.history.len(),
                if self.won { "won" } else { "lost" }
            );
        }

        Ok(GuessOutcome {
            feedback,
            game_over: self.over,
            won: self.won,
            answer: self.answer().copied(),
            tally: self.tally,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Accepted guesses with the feedback each one received.
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn phase(&self) -> Phase {
        self.resolver.phase()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// The answer, once the game is over.
    pub fn answer(&self) -> Option<&Word> {
        if self.over {
            Some(self.resolver.presumptive_answer())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::feedback::grades;

    fn new_session(config: GameConfig, words: &[&str]) -> Session {
        let pool = CandidatePool::new(words.iter().map(|w| w.parse().unwrap())).unwrap();
        Session::with_pool(config, pool).unwrap()
    }

    #[test]
    fn mode_defaults() {
        let config = GameConfig::new(Mode::HostCheat);
        assert_eq!(config.guess_limit(), Some(6));
        assert!(!config.rejects_duplicates());
        assert_eq!(config, GameConfig::default());

        let config = GameConfig::new(Mode::Infinite);
        assert_eq!(config.guess_limit(), None);
        assert!(config.rejects_duplicates());
        assert!(!config.is_hard());
    }

    #[test]
    fn zero_guesses_is_rejected() {
        let pool = CandidatePool::new(["PANIC".parse().unwrap()]).unwrap();
        let res = Session::with_pool(GameConfig::new(Mode::Normal).max_guesses(0), pool);
        assert!(matches!(
            res,
            Err(crate::WordleError::Config {
                kind: ConfigError::NoGuessesAllowed
            })
        ));
    }

    #[test]
    fn normal_mode_draws_from_the_list() {
        let words: WordList = "panic\ncrazy\nbuggy".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let session = Session::new(GameConfig::new(Mode::Normal), &words, &mut rng).unwrap();
            assert_eq!(session.phase(), Phase::Committed);
            assert_eq!(session.resolver.pool().len(), 1);
            assert!(words.contains(session.resolver.presumptive_answer()));
        }
    }

    #[test]
    fn host_cheat_uses_every_word() {
        let words = WordList::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        let session = Session::new(GameConfig::default(), &words, &mut rng).unwrap();
        assert_eq!(session.resolver.pool().len(), words.len());
        assert_eq!(session.phase(), Phase::Adversarial);
    }

    #[test]
    fn loses_after_the_last_guess() {
        let mut session = new_session(GameConfig::new(Mode::Normal).max_guesses(2), &["PANIC"]);

        let outcome = session.submit_guess("crazy").unwrap();
        assert!(!outcome.game_over);
        assert_eq!(session.answer(), None);

        let outcome = session.submit_guess("quite").unwrap();
        assert!(outcome.game_over);
        assert!(!outcome.won);
        assert_eq!(outcome.answer.unwrap(), "PANIC");
        assert_eq!(outcome.feedback, grades("mmpmm"));

        assert_eq!(session.submit_guess("panic"), Err(GuessError::AlreadyOver));
        assert_eq!(session.guess_count(), 2);
    }

    #[test]
    fn rejected_guesses_do_not_count() {
        let mut session = new_session(GameConfig::new(Mode::HostCheat), &["WORLD", "HELLO"]);
        let before = session.clone();

        assert!(matches!(
            session.submit_guess("worlds"),
            Err(GuessError::InvalidLength { found: 6, .. })
        ));
        assert!(matches!(
            session.submit_guess("w0rld"),
            Err(GuessError::NotAlphabetic(_))
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn padded_guess_is_the_wrong_length() {
        let mut session = new_session(GameConfig::new(Mode::Normal), &["PANIC"]);
        assert_eq!(
            session.submit_guess(" PANIC "),
            Err(GuessError::InvalidLength {
                expected: 5,
                found: 7
            })
        );
        assert_eq!(session.guess_count(), 0);
        assert!(!session.is_over());
    }

    #[test]
    fn duplicates_depend_on_config() {
        let mut session = new_session(GameConfig::new(Mode::Infinite), &["PANIC"]);
        session.submit_guess("crazy").unwrap();
        assert_eq!(
            session.submit_guess("CRAZY"),
            Err(GuessError::DuplicateGuess("CRAZY".to_string()))
        );
        assert_eq!(session.guess_count(), 1);

        let mut session = new_session(GameConfig::new(Mode::Normal), &["PANIC"]);
        session.submit_guess("crazy").unwrap();
        assert!(session.submit_guess("crazy").is_ok());
    }

    #[test]
    fn infinite_mode_runs_until_won() {
        let mut session = new_session(GameConfig::new(Mode::Infinite), &["PANIC"]);
        let guesses = [
            "AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE", "FFFFF", "GGGGG", "HHHHH",
        ];
        for guess in guesses {
            let outcome = session.submit_guess(guess).unwrap();
            assert!(!outcome.game_over);
        }

        let outcome = session.submit_guess("panic").unwrap();
        assert!(outcome.won);
        assert!(outcome.game_over);
        assert_eq!(session.guess_count(), 9);

        // AAAAA, CCCCC and PANIC hit; nothing else lands
        assert_eq!(outcome.tally.hits(), 7);
        assert_eq!(outcome.tally.presents(), 0);
        assert_eq!(outcome.tally.misses(), 38);
        assert_eq!(outcome.tally.score(), 3 * 7 - 38);
    }

    #[test]
    fn hard_mode_checks_the_last_feedback() {
        let mut session = new_session(GameConfig::new(Mode::Normal).hard_mode(true), &["PANIC"]);

        // C and A are present
        session.submit_guess("crazy").unwrap();
        assert_eq!(
            session.submit_guess("quite"),
            Err(GuessError::InvalidHardModeGuess)
        );
        assert_eq!(session.guess_count(), 1);

        // A and N hit, C present
        session.submit_guess("fancy").unwrap();
        assert_eq!(
            session.submit_guess("mince"),
            Err(GuessError::InvalidHardModeGuess)
        );
        assert!(session.submit_guess("panic").unwrap().won);
    }

    #[test]
    fn hard_mode_is_free_after_all_misses() {
        let mut session = new_session(
            GameConfig::new(Mode::HostCheat).hard_mode(true),
            &["WORLD", "QUITE", "FANCY", "FRESH", "PANIC", "CRAZY", "BUGGY", "HELLO"],
        );

        assert_eq!(
            session.submit_guess("hello").unwrap().feedback,
            Feedback::all_miss()
        );
        // WORLD would have revealed L and O against the real answer
        assert!(session.submit_guess("world").is_ok());
    }

    #[test]
    fn host_cheat_win_needs_commitment() {
        let mut session = new_session(GameConfig::new(Mode::HostCheat), &["BUMPY", "SLATE"]);

        // SLATE reveals against itself while BUMPY stays unrevealed
        let outcome = session.submit_guess("slate").unwrap();
        assert_eq!(outcome.feedback, Feedback::all_miss());
        assert!(!outcome.won);
        assert_eq!(session.phase(), Phase::Adversarial);

        let outcome = session.submit_guess("bumpy").unwrap();
        assert!(outcome.won);
        assert!(outcome.feedback.is_solved());
        assert_eq!(outcome.answer.unwrap(), "BUMPY");
    }
}
