pub mod error;
pub mod xml;

use std::path::Path;

use log::{info, warn};

use crate::trainer::Trainer;

pub use error::PersistenceError;
pub use xml::XmlPersistence;

/// Stores and restores the complete state of a [`Trainer`].
pub trait Persistence {
    /// Reads the previously saved trainer.
    fn load(&self) -> Result<Trainer, PersistenceError>;

    /// Writes the whole trainer, replacing whatever was saved before.
    fn save(&self, trainer: &Trainer) -> Result<(), PersistenceError>;

    fn storage_path(&self) -> &Path;

    /// Points the store at another directory, creating it if needed.
    fn set_storage_path(&mut self, path: &str) -> Result<(), PersistenceError>;
}

/// Loads the saved trainer, or starts with an empty one if that fails for any reason.
pub fn load_or_default<P: Persistence + ?Sized>(persistence: &P) -> Trainer {
    match persistence.load() {
        Ok(trainer) => {
            info!(
                "Loaded trainer with {} entries from {}",
                trainer.entries().len(),
                persistence.storage_path().display()
            );
            trainer
        }
        Err(e) => {
            warn!("Failed to load trainer: {}. Starting with an empty one.", e);
            Trainer::new()
        }
    }
}
