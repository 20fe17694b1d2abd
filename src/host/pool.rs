//! The words a host-cheat game could still claim as its answer.

use std::ops::Deref;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{evaluate, ConfigError, Result, Word};

/// A word the host is still keeping open as a possible answer.
///
/// A candidate is scored against each guess for as long as it has only
/// ever produced misses. Its first non-miss result freezes it: the scores
/// stop changing and it becomes a contender for commitment for that round.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    word: Word,
    score: u8,
    hit: u8,
    present: u8,
    needs_update: bool,
    needs_tie_check: bool,
}

impl Candidate {
    fn new(word: Word) -> Self {
        Candidate {
            word,
            score: 0,
            hit: 0,
            present: 0,
            needs_update: true,
            needs_tie_check: false,
        }
    }

    fn update(&mut self, guess: &Word) {
        let feedback = evaluate(&self.word, guess);
        self.hit = feedback.hits();
        self.present = feedback.presents();
        self.score = feedback.score();

        if self.score > 0 {
            self.needs_update = false;
            self.needs_tie_check = true;
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Hits plus presents for the guess that froze this candidate, or zero
    /// while it is still unrevealed.
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn hit(&self) -> u8 {
        self.hit
    }

    pub fn present(&self) -> u8 {
        self.present
    }

    /// True while every guess so far would have been all misses against
    /// this word.
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// True during the round in which this candidate was frozen.
    pub fn needs_tie_check(&self) -> bool {
        self.needs_tie_check
    }
}

/// How the pool orders candidates after each update.
///
/// Both orders put the lowest scores first and are stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "kebab-case")
)]
pub enum SortOrder {
    /// Ascending score only.
    Score,

    /// Ascending score, then descending hits among equal scores.
    ScoreThenHits,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Score
    }
}

/// The candidates of one host-cheat game.
///
/// A pool is never empty. Its front is the answer the host would claim if
/// it had to commit right now.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    order: SortOrder,
}

impl CandidatePool {
    /// Creates a pool holding one unrevealed candidate per word, in order.
    ///
    /// Returns an error if there are no words.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let candidates: Vec<Candidate> = words.into_iter().map(Candidate::new).collect();
        if candidates.is_empty() {
            return Err(ConfigError::EmptyWordList.into());
        }

        Ok(CandidatePool {
            candidates,
            order: SortOrder::default(),
        })
    }

    /// Sets how candidates are ordered after each update.
    pub fn sort_order(self, order: SortOrder) -> Self {
        CandidatePool { order, ..self }
    }

    /// The word at the front of the pool.
    pub fn front(&self) -> &Word {
        &self.candidates[0].word
    }

    /// Scores every still-unrevealed candidate against `guess`.
    ///
    /// Candidates frozen in an earlier round drop out of tie consideration
    /// first. Afterwards the pool is re-sorted so that unrevealed
    /// candidates come first.
    pub fn update(&mut self, guess: &Word) {
        for candidate in self.candidates.iter_mut() {
            if candidate.needs_tie_check && !candidate.needs_update {
                candidate.needs_tie_check = false;
            }
            if candidate.needs_update {
                candidate.update(guess);
            }
        }

        match self.order {
            SortOrder::Score => self.candidates.sort_by_key(|c| c.score),
            SortOrder::ScoreThenHits => self
                .candidates
                .sort_by(|a, b| a.score.cmp(&b.score).then(b.hit.cmp(&a.hit))),
        }

        debug!(
            "pool after {}: {} unrevealed of {}",
            guess,
            self.candidates.iter().filter(|c| c.score == 0).count(),
            self.candidates.len()
        );
    }

    /// Finds the contenders the host may commit to, as positions in the
    /// pool.
    ///
    /// The contenders are the candidates frozen this round with the fewest
    /// hits, and among those the fewest presents. There are none while any
    /// candidate is still unrevealed, since the host can keep answering
    /// all misses.
    pub fn tied(&self) -> Vec<usize> {
        if self.candidates.iter().any(|c| c.score == 0) {
            return Vec::new();
        }

        let contenders: Vec<usize> = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.needs_tie_check)
            .map(|(i, _)| i)
            .collect();

        let least = match contenders
            .iter()
            .map(|&i| (self.candidates[i].hit, self.candidates[i].present))
            .min()
        {
            Some(least) => least,
            None => return contenders,
        };

        contenders
            .into_iter()
            .filter(|&i| (self.candidates[i].hit, self.candidates[i].present) == least)
            .collect()
    }

    /// Moves the candidates at `positions` to the front, keeping the
    /// relative order on both sides.
    pub fn promote(&mut self, positions: &[usize]) {
        let (mut front, back): (Vec<_>, Vec<_>) = std::mem::take(&mut self.candidates)
            .into_iter()
            .enumerate()
            .partition(|(i, _)| positions.contains(i));
        front.extend(back);
        self.candidates = front.into_iter().map(|(_, c)| c).collect();
    }

    /// Returns true if any candidate has revealed a hit or a present.
    pub fn any_revealed(&self) -> bool {
        self.candidates.iter().any(|c| c.score > 0)
    }
}

impl Deref for CandidatePool {
    type Target = [Candidate];

    fn deref(&self) -> &Self::Target {
        &self.candidates
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pool_of(words: &[&str]) -> CandidatePool {
        CandidatePool::new(words.iter().map(|w| w.parse().unwrap())).unwrap()
    }

    fn order(pool: &CandidatePool) -> Vec<String> {
        pool.iter().map(|c| c.word().to_string()).collect()
    }

    const EXAMPLE: &[&str] = &[
        "WORLD", "QUITE", "FANCY", "FRESH", "PANIC", "CRAZY", "BUGGY", "HELLO",
    ];

    #[test]
    fn empty_pool_is_an_error() {
        assert!(CandidatePool::new(Vec::new()).is_err());
    }

    #[test]
    fn new_pool_is_unrevealed() {
        let pool = pool_of(EXAMPLE);
        assert_eq!(pool.len(), 8);
        assert!(pool
            .iter()
            .all(|c| c.needs_update() && !c.needs_tie_check() && c.score() == 0));
        assert!(!pool.any_revealed());
        assert_eq!(pool.front(), &"WORLD");
    }

    #[test]
    fn update_freezes_and_sorts() {
        let mut pool = pool_of(EXAMPLE);
        pool.update(&"HELLO".parse().unwrap());

        assert_eq!(
            order(&pool),
            ["FANCY", "PANIC", "CRAZY", "BUGGY", "QUITE", "WORLD", "FRESH", "HELLO"]
        );

        let world = &pool[5];
        assert_eq!((world.hit(), world.present(), world.score()), (1, 1, 2));
        assert!(!world.needs_update());
        assert!(world.needs_tie_check());

        let fresh = &pool[6];
        assert_eq!((fresh.hit(), fresh.present()), (0, 2));
        assert!(pool.any_revealed());

        // unrevealed words are still around, so nothing is tied
        assert!(pool.tied().is_empty());
    }

    #[test]
    fn frozen_candidates_stop_updating_and_age_out() {
        let mut pool = pool_of(EXAMPLE);
        pool.update(&"HELLO".parse().unwrap());
        pool.update(&"WORLD".parse().unwrap());

        let world = pool.iter().find(|c| c.word() == &"WORLD").unwrap();
        // frozen by HELLO, not rescored against itself
        assert_eq!(world.score(), 2);
        assert!(!world.needs_tie_check());

        let crazy = pool.iter().find(|c| c.word() == &"CRAZY").unwrap();
        assert_eq!((crazy.hit(), crazy.present()), (0, 1));
        assert!(crazy.needs_tie_check());

        assert_eq!(
            order(&pool),
            ["FANCY", "PANIC", "BUGGY", "CRAZY", "QUITE", "WORLD", "FRESH", "HELLO"]
        );
    }

    #[test]
    fn tied_prefers_fewest_hits_then_presents() {
        let mut pool = pool_of(EXAMPLE);
        for guess in ["HELLO", "WORLD", "FRESH", "CRAZY"] {
            pool.update(&guess.parse().unwrap());
        }

        // BUGGY has a hit, PANIC only presents
        let tied = pool.tied();
        assert_eq!(tied.len(), 1);
        assert_eq!(pool[tied[0]].word(), &"PANIC");
    }

    #[test]
    fn tied_keeps_every_exact_tie() {
        let mut pool = pool_of(&["WORLD", "HELLO", "FRESH", "BUGGY"]);
        pool.update(&"SCARE".parse().unwrap());
        // BUGGY is still unrevealed
        assert!(pool.tied().is_empty());

        let mut pool = pool_of(&["WORLD", "FRESH", "HELLO"]);
        pool.update(&"SCARE".parse().unwrap());
        let tied: Vec<String> = pool
            .tied()
            .into_iter()
            .map(|i| pool[i].word().to_string())
            .collect();
        assert_eq!(tied, ["WORLD", "HELLO"]);
    }

    #[test]
    fn single_contender_is_tied() {
        let mut pool = pool_of(&["CRANE", "SLATE"]);
        pool.update(&"TTTTT".parse().unwrap());
        // SLATE froze with a hit, CRANE is still unrevealed
        assert!(pool.tied().is_empty());
        pool.update(&"CCCCC".parse().unwrap());
        assert_eq!(pool.tied().len(), 1);
        assert_eq!(pool[pool.tied()[0]].word(), &"CRANE");
    }

    #[test]
    fn promote_is_stable() {
        let mut pool = pool_of(&["AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE"]);
        pool.promote(&[1, 3]);
        assert_eq!(order(&pool), ["BBBBB", "DDDDD", "AAAAA", "CCCCC", "EEEEE"]);
        pool.promote(&[0]);
        assert_eq!(order(&pool), ["BBBBB", "DDDDD", "AAAAA", "CCCCC", "EEEEE"]);
    }

    #[test]
    fn sort_orders_differ_on_equal_scores() {
        // both score 2, one with presents and one with hits
        let words = &["BAYYY", "ABWWW"];
        let guess = "ABZZZ".parse().unwrap();

        let mut by_score = pool_of(words);
        by_score.update(&guess);
        assert_eq!(order(&by_score), ["BAYYY", "ABWWW"]);

        let mut by_hits = pool_of(words).sort_order(SortOrder::ScoreThenHits);
        by_hits.update(&guess);
        assert_eq!(order(&by_hits), ["ABWWW", "BAYYY"]);
    }
}
