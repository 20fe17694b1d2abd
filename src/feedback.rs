//! Grading guesses against an answer.

use std::{fmt::Display, ops::Deref};

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{word::WORD_LENGTH, GuessError, Word};

/// A Wordle "grade" that indicates the correctness of a letter in a guess.
///
/// `Hit` means that the letter is in the correct position. `Present` means
/// that the letter is in the word, but not in that position. `Miss` means
/// that no unclaimed copy of the letter is left in the word.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum Grade {
    /// The letter guessed is in the correct position.
    Hit,

    /// The letter guessed is in the word, but not there.
    Present,

    /// The letter guessed is not in the word.
    Miss,
}

/// The grades for one guess, in the order of the guessed letters.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct Feedback {
    grades: [Grade; WORD_LENGTH],
}

impl Feedback {
    /// Creates feedback from its grades.
    pub fn new(grades: [Grade; WORD_LENGTH]) -> Self {
        Feedback { grades }
    }

    /// Feedback that reveals nothing: every letter is a miss.
    pub fn all_miss() -> Self {
        Feedback {
            grades: [Grade::Miss; WORD_LENGTH],
        }
    }

    /// Returns true if every letter is a hit.
    pub fn is_solved(&self) -> bool {
        self.grades.iter().all(|&g| g == Grade::Hit)
    }

    pub fn hits(&self) -> u8 {
        self.count(Grade::Hit)
    }

    pub fn presents(&self) -> u8 {
        self.count(Grade::Present)
    }

    pub fn misses(&self) -> u8 {
        self.count(Grade::Miss)
    }

    /// The number of letters that are not misses.
    pub fn score(&self) -> u8 {
        self.hits() + self.presents()
    }

    fn count(&self, grade: Grade) -> u8 {
        self.grades.iter().filter(|&&g| g == grade).count() as u8
    }
}

impl Deref for Feedback {
    type Target = [Grade; WORD_LENGTH];

    fn deref(&self) -> &Self::Target {
        &self.grades
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for grade in self.grades.iter() {
            let c = match grade {
                Grade::Hit => 'G',
                Grade::Present => 'Y',
                Grade::Miss => 'X',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Grades `guess` as if `target` were the answer.
///
/// In the case that a guess contains two or more of the same letter,
/// the following is true:
///
/// 1. Every copy in the correct position is a [`Grade::Hit`].
/// 2. No more copies are graded [`Grade::Hit`] or [`Grade::Present`]
///    together than the copies of that letter in the target. Hits claim
///    their copies first, then the remaining copies go to presents from
///    left to right.
///
/// # Examples
///
/// ```rust
/// use wordle_host::{evaluate, Word, Grade::*};
///
/// let panic: Word = "panic".parse()?;
/// let fancy: Word = "fancy".parse()?;
///
/// assert_eq!(*evaluate(&panic, &fancy), [Miss, Hit, Hit, Present, Miss]);
/// assert!(evaluate(&panic, &panic).is_solved());
/// #
/// # Ok::<_, wordle_host::GuessError>(())
/// ```
pub fn evaluate(target: &Word, guess: &Word) -> Feedback {
    let mut remaining = *target.letters();
    let mut grades = [Grade::Miss; WORD_LENGTH];

    // hits first, since those get priority
    for (i, (&letter, slot)) in guess.letters().iter().zip(remaining.iter_mut()).enumerate() {
        if letter == *slot {
            grades[i] = Grade::Hit;
            *slot = 0;
        }
    }

    for (i, &letter) in guess.letters().iter().enumerate() {
        if grades[i] == Grade::Hit {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == letter) {
            grades[i] = Grade::Present;
            *slot = 0;
        }
    }

    Feedback { grades }
}

/// Checks that `guess` uses what the previous guess revealed.
///
/// Every hit in `last_feedback` must be repeated in the same position, and
/// every letter graded present must appear somewhere in `guess`. Only the
/// previous guess is considered, not the whole history.
pub fn hardmode_guard(
    guess: &Word,
    last_guess: &Word,
    last_feedback: &Feedback,
) -> Result<(), GuessError> {
    for ((prev, grade), new) in last_guess
        .letters()
        .iter()
        .zip(last_feedback.iter())
        .zip(guess.letters().iter())
    {
        if *grade == Grade::Hit && prev != new {
            return Err(GuessError::InvalidHardModeGuess);
        }
    }

    let dropped_present = last_guess
        .letters()
        .iter()
        .zip(last_feedback.iter())
        .filter(|(_, &grade)| grade == Grade::Present)
        .map(|(&letter, _)| letter)
        .unique()
        .any(|letter| !guess.contains(letter));
    if dropped_present {
        return Err(GuessError::InvalidHardModeGuess);
    }

    Ok(())
}

/// Returns true if `guess` passes [`hardmode_guard()`].
pub fn is_valid_hardmode_guess(guess: &Word, last_guess: &Word, last_feedback: &Feedback) -> bool {
    hardmode_guard(guess, last_guess, last_feedback).is_ok()
}

/// Running totals of the grades a session has returned.
///
/// The score rewards a hit with three points and a present with one, and
/// takes a point away for every miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Tally {
    hits: u32,
    presents: u32,
    misses: u32,
    score: i64,
}

impl Tally {
    /// Adds the grades of one guess.
    pub fn record(&mut self, feedback: &Feedback) {
        let (hits, presents, misses) = (
            feedback.hits() as u32,
            feedback.presents() as u32,
            feedback.misses() as u32,
        );

        self.hits += hits;
        self.presents += presents;
        self.misses += misses;
        self.score += 3 * hits as i64 + presents as i64 - misses as i64;
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn presents(&self) -> u32 {
        self.presents
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

#[cfg(test)]
pub(crate) fn grades(input: &str) -> Feedback {
    let mut res = [Grade::Miss; WORD_LENGTH];
    for (i, c) in input.chars().enumerate() {
        match c {
            'h' => res[i] = Grade::Hit,
            'p' => res[i] = Grade::Present,
            _ => {}
        }
    }
    Feedback::new(res)
}
