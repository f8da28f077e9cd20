use std::io::{self, BufRead};

use log::debug;

use crate::trainer::VocabularyEntry;

const SEPARATOR: char = ';';

/// Reads a word list with one `word;url` pair per line.
///
/// Blank lines and `#` comments are skipped, as are lines without a separator. Entries
/// are not validated here; [`crate::Trainer::set_entries`] drops the invalid ones.
pub fn read_word_list<R: BufRead>(reader: R) -> io::Result<Vec<VocabularyEntry>> {
    let mut entries = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once(SEPARATOR) {
            Some((word, url)) => entries.push(VocabularyEntry::unchecked(word.trim(), url.trim())),
            None => debug!("skipping word list line {}: no '{}'", number + 1, SEPARATOR),
        }
    }

    return Ok(entries);
}
