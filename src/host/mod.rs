//! The adversarial host that answers guesses.
//!
//! The host does not pick an answer up front. It keeps every word that is
//! still consistent with the feedback it has handed out and answers each
//! guess with all misses for as long as some word allows that. Once every
//! word would reveal something, it commits to the contender that reveals
//! the least and plays an ordinary game against it from then on.

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{evaluate, Feedback, Word};

mod pool;
pub use pool::{Candidate, CandidatePool, SortOrder};

/// Whether the host has settled on an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "kebab-case")
)]
pub enum Phase {
    /// Still stalling with all-miss answers.
    Adversarial,

    /// Playing honestly against the front of the pool.
    Committed,
}

/// Answers guesses on behalf of the host, deferring its choice of answer
/// for as long as the candidate pool allows.
///
/// The word at the front of the pool is consistent with every feedback the
/// resolver has returned, whether or not it has committed yet. A pool of a
/// single word is committed from the start, which is how the normal and
/// infinite modes play.
///
/// # Examples
///
/// ```rust
/// use wordle_host::{CandidatePool, Phase, Resolver, Word};
///
/// let words = ["world", "quite", "fancy", "fresh", "panic", "crazy", "buggy", "hello", "scare"]
///     .iter()
///     .map(|w| w.parse())
///     .collect::<Result<Vec<Word>, _>>()?;
/// let mut resolver = Resolver::new(CandidatePool::new(words)?);
///
/// let buggy: Word = "buggy".parse()?;
/// assert_eq!(resolver.respond(&buggy).to_string(), "XXXXX");
/// assert_eq!(resolver.phase(), Phase::Adversarial);
///
/// let scare: Word = "scare".parse()?;
/// assert_eq!(resolver.respond(&scare).to_string(), "XXXYX");
///
/// let world: Word = "world".parse()?;
/// assert_eq!(resolver.answer(), Some(&world));
/// #
/// # Ok::<_, wordle_host::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resolver {
    pool: CandidatePool,
    phase: Phase,
}

impl Resolver {
    pub fn new(pool: CandidatePool) -> Self {
        let phase = if pool.len() == 1 {
            Phase::Committed
        } else {
            Phase::Adversarial
        };

        Resolver { pool, phase }
    }

    /// Produces the feedback for `guess`.
    ///
    /// While adversarial, the pool is updated first. If a set of contenders
    /// emerged they move to the front and the host commits to the first of
    /// them. If unrevealed words remain and something has been revealed
    /// elsewhere, the answer is all misses. Otherwise every word is still
    /// unrevealed and the host commits to the front as it stands.
    pub fn respond(&mut self, guess: &Word) -> Feedback {
        if self.phase == Phase::Committed {
            return evaluate(self.pool.front(), guess);
        }

        self.pool.update(guess);
        let tied = self.pool.tied();

        if !tied.is_empty() {
            debug!("{} contenders left after {}", tied.len(), guess);
            self.pool.promote(&tied);
            self.commit();
        } else if self.pool.len() > 1 && self.pool.any_revealed() {
            debug!("answering {} with all misses", guess);
            return Feedback::all_miss();
        } else {
            self.commit();
        }

        evaluate(self.pool.front(), guess)
    }

    fn commit(&mut self) {
        info!("host committed to {}", self.pool.front());
        self.phase = Phase::Committed;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The answer, once the host has committed to one.
    pub fn answer(&self) -> Option<&Word> {
        match self.phase {
            Phase::Committed => Some(self.pool.front()),
            Phase::Adversarial => None,
        }
    }

    /// The word the host would claim right now.
    pub fn presumptive_answer(&self) -> &Word {
        self.pool.front()
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }
}
