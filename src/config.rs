use std::env;
use std::path::PathBuf;

/// Launcher settings, read from the environment (and `.env`).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory the trainer is saved to, `WortTrainer` in the home directory if unset
    pub storage_path: Option<String>,
    /// `word;url` file used to seed an empty trainer
    pub word_list: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let storage_path = env::var("WORTTRAINER_PATH")
            .ok()
            .filter(|v| !v.is_empty());

        let word_list = env::var("WORTTRAINER_WORDLIST")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Config {
            storage_path,
            word_list,
        }
    }
}
