use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use dotenv::dotenv;
use log::{info, warn};
use worttrainer::config::Config;
use worttrainer::trainer::wordlist::read_word_list;
use worttrainer::{Controller, VocabularyEntry, XmlPersistence};

const SAVE_COMMAND: &str = ":save";
const QUIT_COMMAND: &str = ":quit";

// Used when there is neither a saved trainer nor a word list file.
const STARTER_WORDS: [(&str, &str); 4] = [
    ("Hund", "https://upload.wikimedia.org/wikipedia/commons/2/26/YellowLabradorLooking_new.jpg"),
    ("Katze", "https://upload.wikimedia.org/wikipedia/commons/3/3a/Cat03.jpg"),
    ("Haus", "https://upload.wikimedia.org/wikipedia/commons/6/6e/Haus_Feldweg.jpg"),
    ("Auto", "https://upload.wikimedia.org/wikipedia/commons/1/1b/VW_Golf_1.jpg"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();
    info!("Starting word trainer...");

    let config = Config::from_env();
    let persistence = match &config.storage_path {
        Some(path) => XmlPersistence::with_path(path)?,
        None => XmlPersistence::new(),
    };

    let mut controller = Controller::new(persistence);
    controller.seed_if_empty(starter_entries(&config)?)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_prompt(&controller)?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match line.as_str() {
            QUIT_COMMAND => break,
            SAVE_COMMAND => save(&controller),
            word => {
                let outcome = controller.check(word);
                println!(
                    "{}  (asked: {}, correct: {}, incorrect: {})",
                    if outcome.correct { "Correct!" } else { "Wrong, try again." },
                    outcome.asked,
                    outcome.correct_count,
                    outcome.incorrect_count
                );
            }
        }
    }

    save(&controller);
    info!("Word trainer stopped");
    Ok(())
}

fn starter_entries(config: &Config) -> io::Result<Vec<VocabularyEntry>> {
    let from_file = match &config.word_list {
        Some(path) => {
            info!("Reading word list from {}", path.display());
            let entries = read_word_list(BufReader::new(File::open(path)?))?;
            if !entries.iter().any(VocabularyEntry::is_valid) {
                warn!(
                    "Word list {} has no valid entries, using the starter words",
                    path.display()
                );
            }
            entries
        }
        None => Vec::new(),
    };

    Ok(entries_or_starter_words(from_file))
}

fn entries_or_starter_words(entries: Vec<VocabularyEntry>) -> Vec<VocabularyEntry> {
    if entries.iter().any(VocabularyEntry::is_valid) {
        return entries;
    }

    STARTER_WORDS
        .iter()
        .map(|(word, url)| VocabularyEntry::unchecked(*word, *url))
        .collect()
}

fn print_prompt<P: worttrainer::Persistence>(controller: &Controller<P>) -> io::Result<()> {
    let trainer = controller.trainer();
    match trainer.previous_attempt_correct() {
        Some(true) => println!("Previous attempt: correct"),
        Some(false) => println!("Previous attempt: wrong"),
        None => {}
    }
    if let Some(url) = controller.current_image_url() {
        println!("\nWhich word does this image show?\n{}", url);
    }
    print!("> ");
    io::stdout().flush()
}

// Save failures are shown to the user; the session goes on.
fn save<P: worttrainer::Persistence>(controller: &Controller<P>) {
    match controller.save() {
        Ok(()) => println!(
            "Saved to {}",
            controller.persistence().storage_path().display()
        ),
        Err(e) => eprintln!("Error while saving: {}", e),
    }
}
