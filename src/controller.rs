use log::info;

use crate::error::TrainerError;
use crate::persistence::{self, Persistence, PersistenceError};
use crate::trainer::{Trainer, VocabularyEntry};

/// What the presentation needs to redraw after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub correct: bool,
    pub asked: u32,
    pub correct_count: u32,
    pub incorrect_count: i64,
    /// Image of the entry to show next.
    pub image_url: Option<String>,
}

/// Glue between a [`Trainer`] and the store it is saved to.
pub struct Controller<P: Persistence> {
    trainer: Trainer,
    persistence: P,
}

impl<P: Persistence> Controller<P> {
    /// Restores the saved trainer, falling back to an empty one if loading fails.
    pub fn new(persistence: P) -> Self {
        let trainer = persistence::load_or_default(&persistence);
        Self {
            trainer,
            persistence,
        }
    }

    /// Installs `entries` if the trainer has none yet. Returns whether anything changed.
    pub fn seed_if_empty(&mut self, entries: Vec<VocabularyEntry>) -> Result<bool, TrainerError> {
        if !self.trainer.is_empty() {
            return Ok(false);
        }
        self.trainer.set_entries(entries)?;
        self.trainer.set_current_index(0)?;
        info!("Seeded trainer with {} entries", self.trainer.entries().len());
        Ok(true)
    }

    /// # Panics
    ///
    /// Panics if the trainer has no entries.
    pub fn check(&mut self, word: &str) -> CheckOutcome {
        let correct = self.trainer.check(word);
        CheckOutcome {
            correct,
            asked: self.trainer.asked_count(),
            correct_count: self.trainer.correct_count(),
            incorrect_count: self.trainer.incorrect_count(),
            image_url: self.current_image_url(),
        }
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        self.persistence.save(&self.trainer)
    }

    pub fn current_image_url(&self) -> Option<String> {
        self.trainer.current_entry().map(|e| e.url().to_string())
    }

    pub fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    use super::*;

    /// Keeps the "saved" trainer in memory.
    struct MemoryPersistence {
        saved: RefCell<Option<Trainer>>,
        path: PathBuf,
        fail_save: bool,
    }

    impl MemoryPersistence {
        fn new(saved: Option<Trainer>) -> Self {
            Self {
                saved: RefCell::new(saved),
                path: PathBuf::from("memory"),
                fail_save: false,
            }
        }
    }

    impl Persistence for MemoryPersistence {
        fn load(&self) -> Result<Trainer, PersistenceError> {
            self.saved
                .borrow()
                .clone()
                .ok_or_else(|| PersistenceError::NotFound(self.path.clone()))
        }

        fn save(&self, trainer: &Trainer) -> Result<(), PersistenceError> {
            if self.fail_save {
                return Err(PersistenceError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            *self.saved.borrow_mut() = Some(trainer.clone());
            Ok(())
        }

        fn storage_path(&self) -> &Path {
            &self.path
        }

        fn set_storage_path(&mut self, path: &str) -> Result<(), PersistenceError> {
            self.path = PathBuf::from(path);
            Ok(())
        }
    }

    fn starter_entries() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new("Hund", "https://www.google.com/hund.png").unwrap(),
            VocabularyEntry::new("Katze", "https://www.google.com/katze.png").unwrap(),
        ]
    }

    #[test]
    fn test_new_falls_back_to_empty_trainer() {
        let controller = Controller::new(MemoryPersistence::new(None));
        assert_eq!(controller.trainer(), &Trainer::new());
        assert_eq!(controller.current_image_url(), None);
    }

    #[test]
    fn test_new_restores_saved_trainer() {
        let mut saved = Trainer::new();
        saved.set_entries(starter_entries()).unwrap();
        saved.set_current_index(1).unwrap();
        saved.set_asked_count(3).unwrap();

        let controller = Controller::new(MemoryPersistence::new(Some(saved.clone())));
        assert_eq!(controller.trainer(), &saved);
        assert_eq!(
            controller.current_image_url().as_deref(),
            Some("https://www.google.com/katze.png")
        );
    }

    #[test]
    fn test_seed_if_empty_only_seeds_once() {
        let mut controller = Controller::new(MemoryPersistence::new(None));
        assert!(controller.seed_if_empty(starter_entries()).unwrap());
        assert_eq!(controller.trainer().current_index(), 0);
        assert!(!controller.seed_if_empty(Vec::new()).unwrap());
        assert_eq!(controller.trainer().entries().len(), 2);
    }

    #[test]
    fn test_check_reports_counters() {
        let mut controller = Controller::new(MemoryPersistence::new(None));
        controller.seed_if_empty(starter_entries()).unwrap();

        let outcome = controller.check("Hund");
        assert!(outcome.correct);
        assert_eq!(outcome.asked, 1);
        assert_eq!(outcome.correct_count, 1);
        assert_eq!(outcome.incorrect_count, 0);
        assert!(outcome.image_url.is_some());

        let outcome = controller.check("Pferd");
        assert!(!outcome.correct);
        assert_eq!(outcome.asked, 2);
        assert_eq!(outcome.incorrect_count, 1);
        assert_eq!(controller.trainer().previous_attempt_correct(), Some(false));
    }

    #[test]
    fn test_save_round_trips_through_persistence() {
        let mut controller = Controller::new(MemoryPersistence::new(None));
        controller.seed_if_empty(starter_entries()).unwrap();
        controller.check("Pferd");
        controller.save().unwrap();

        let saved = controller.persistence().load().unwrap();
        assert_eq!(saved.asked_count(), 1);
        assert_eq!(saved.entries(), starter_entries().as_slice());
    }

    #[test]
    fn test_failed_save_keeps_session() {
        let mut persistence = MemoryPersistence::new(None);
        persistence.fail_save = true;
        let mut controller = Controller::new(persistence);
        controller.seed_if_empty(starter_entries()).unwrap();
        controller.check("Pferd");

        let err = controller.save().unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
        assert_eq!(controller.trainer().asked_count(), 1);
    }
}
