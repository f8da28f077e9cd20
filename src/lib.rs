pub mod config;
pub mod controller;
pub mod error;
pub mod persistence;
pub mod trainer;

pub use controller::{CheckOutcome, Controller};
pub use error::TrainerError;
pub use persistence::{load_or_default, Persistence, PersistenceError, XmlPersistence};
pub use trainer::{Trainer, VocabularyEntry};
