pub mod entry;
pub mod wordlist;

use log::debug;
use rand::Rng;

use crate::error::TrainerError;

pub use entry::VocabularyEntry;

/// A quiz session: the entries being asked, the entry currently shown and the score.
///
/// The number of incorrect answers is never stored; it is always `asked - correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trainer {
    entries: Vec<VocabularyEntry>,
    current_index: usize,
    asked: u32,
    correct: u32,
    previous_attempt: Option<bool>,
}

impl Trainer {
    /// Creates a trainer with no entries and all counters at zero.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current_index: 0,
            asked: 0,
            correct: 0,
            previous_attempt: None,
        }
    }

    /// Checks `word` against the current entry using the thread-local random source.
    ///
    /// # Panics
    ///
    /// Panics if the trainer has no entries or the current index is out of range.
    pub fn check(&mut self, word: &str) -> bool {
        self.check_with(word, &mut rand::thread_rng())
    }

    /// Checks `word` against the current entry.
    ///
    /// Every call counts as asked. A correct answer bumps the correct counter and moves to
    /// a uniformly random entry (possibly the same one again); a wrong answer keeps the
    /// current entry. The comparison is exact and case-sensitive.
    ///
    /// # Panics
    ///
    /// Panics if the trainer has no entries or the current index is out of range.
    pub fn check_with<R: Rng + ?Sized>(&mut self, word: &str, rng: &mut R) -> bool {
        self.asked = self.asked.saturating_add(1);
        let is_correct = word == self.entries[self.current_index].word();
        if is_correct {
            self.correct = self.correct.saturating_add(1);
            self.current_index = rng.gen_range(0..self.entries.len());
        }
        self.previous_attempt = Some(is_correct);

        debug!(
            "checked {:?}: correct = {}, asked = {}, next index = {}",
            word, is_correct, self.asked, self.current_index
        );
        return is_correct;
    }

    /// Replaces the entry list, silently dropping entries with an empty word or a
    /// malformed URL. Counters and the current index are left untouched.
    pub fn set_entries(&mut self, entries: Vec<VocabularyEntry>) -> Result<(), TrainerError> {
        if entries.is_empty() {
            return Err(TrainerError::invalid_argument("list must not be empty"));
        }

        let total = entries.len();
        let valid: Vec<VocabularyEntry> = entries.into_iter().filter(|e| e.is_valid()).collect();
        if valid.is_empty() {
            return Err(TrainerError::invalid_argument(
                "list contains no valid entries",
            ));
        }
        if valid.len() < total {
            debug!("dropped {} invalid entries", total - valid.len());
        }

        self.entries = valid;
        Ok(())
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// The entry currently being asked, if there are any entries.
    pub fn current_entry(&self) -> Option<&VocabularyEntry> {
        self.entries.get(self.current_index)
    }

    pub fn set_current_index(&mut self, index: i64) -> Result<(), TrainerError> {
        match usize::try_from(index) {
            Ok(index) if index < self.entries.len() => {
                self.current_index = index;
                Ok(())
            }
            _ => Err(TrainerError::invalid_argument("index invalid")),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Sets the asked counter. It is not cross-checked against the correct counter.
    pub fn set_asked_count(&mut self, count: i64) -> Result<(), TrainerError> {
        self.asked = to_counter(count)?;
        Ok(())
    }

    pub fn asked_count(&self) -> u32 {
        self.asked
    }

    /// Sets the correct counter. It is not cross-checked against the asked counter.
    pub fn set_correct_count(&mut self, count: i64) -> Result<(), TrainerError> {
        self.correct = to_counter(count)?;
        Ok(())
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Always `asked - correct`; negative only if the setters were used to put correct
    /// above asked.
    pub fn incorrect_count(&self) -> i64 {
        i64::from(self.asked) - i64::from(self.correct)
    }

    /// Outcome of the last [`Trainer::check`] in this session.
    pub fn previous_attempt_correct(&self) -> Option<bool> {
        self.previous_attempt
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn to_counter(count: i64) -> Result<u32, TrainerError> {
    if count < 0 {
        return Err(TrainerError::invalid_argument(
            "counter must not be negative",
        ));
    }
    u32::try_from(count).map_err(|_| TrainerError::invalid_argument("counter is too large"))
}
