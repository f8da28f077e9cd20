use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::TrainerError;
use crate::persistence::{Persistence, PersistenceError};
use crate::trainer::{Trainer, VocabularyEntry};

const APP_DIR: &str = "WortTrainer";
const FILE_NAME: &str = "worttrainer.xml";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// On-disk shape of a trainer. The incorrect counter is derived and not stored.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename = "wortTrainer")]
struct TrainerDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<VocabularyEntry>,
    #[serde(rename = "currentIndex")]
    current_index: usize,
    asked: u32,
    correct: u32,
}

impl TrainerDocument {
    fn from_trainer(trainer: &Trainer) -> Self {
        Self {
            entries: trainer.entries().to_vec(),
            current_index: trainer.current_index(),
            asked: trainer.asked_count(),
            correct: trainer.correct_count(),
        }
    }

    fn into_trainer(self) -> Result<Trainer, TrainerError> {
        let mut trainer = Trainer::new();
        // An empty list has no valid index, so a saved empty trainer stays at index 0.
        if !self.entries.is_empty() {
            let saved = self.entries.len();
            trainer.set_entries(self.entries)?;
            // Dropped entries shift the positions, so the saved index no longer applies.
            let index = if trainer.entries().len() < saved {
                0
            } else {
                i64::try_from(self.current_index).unwrap_or(-1)
            };
            trainer.set_current_index(index)?;
        }
        trainer.set_asked_count(i64::from(self.asked))?;
        trainer.set_correct_count(i64::from(self.correct))?;
        return Ok(trainer);
    }
}

/// Keeps the trainer as an XML file inside a storage directory.
#[derive(Debug, Clone)]
pub struct XmlPersistence {
    path: PathBuf,
}

impl XmlPersistence {
    /// Uses the default storage directory, `WortTrainer` in the user's home directory.
    pub fn new() -> Self {
        Self {
            path: default_storage_path(),
        }
    }

    /// Uses `path` as the storage directory, creating it if needed.
    pub fn with_path(path: &str) -> Result<Self, PersistenceError> {
        let mut persistence = Self::new();
        persistence.set_storage_path(path)?;
        Ok(persistence)
    }

    pub fn file_path(&self) -> PathBuf {
        self.path.join(FILE_NAME)
    }
}

impl Default for XmlPersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl Persistence for XmlPersistence {
    fn load(&self) -> Result<Trainer, PersistenceError> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return Err(PersistenceError::NotFound(file_path));
        }

        let xml = fs::read_to_string(&file_path)?;
        let document: TrainerDocument = quick_xml::de::from_str(&xml)?;
        let trainer = document.into_trainer()?;
        info!("Trainer loaded from: {}", file_path.display());
        Ok(trainer)
    }

    fn save(&self, trainer: &Trainer) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.path)?;

        let file_path = self.file_path();
        let body = quick_xml::se::to_string(&TrainerDocument::from_trainer(trainer))?;
        fs::write(&file_path, format!("{}{}\n", XML_DECLARATION, body))?;
        info!("Trainer saved to: {}", file_path.display());
        Ok(())
    }

    fn storage_path(&self) -> &Path {
        &self.path
    }

    fn set_storage_path(&mut self, path: &str) -> Result<(), PersistenceError> {
        if path.is_empty() {
            return Err(PersistenceError::InvalidArgument(
                "path must not be empty".to_string(),
            ));
        }

        let path = PathBuf::from(path);
        if fs::create_dir_all(&path).is_err() {
            return Err(PersistenceError::InvalidArgument(
                "path could not be created".to_string(),
            ));
        }

        self.path = path;
        Ok(())
    }
}

fn default_storage_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_DIR),
        None => PathBuf::from(APP_DIR),
    }
}
