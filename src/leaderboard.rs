//! This module contains the leaderboard score log. It is a storage
//! collaborator next to the engine, not part of it: finished games are
//! appended to a plain-text file as pipe-delimited lines of the form
//!
//! ```text
//! nickname|score|time|date|difficulty
//! ```
//!
//! and read back sorted by descending score. Malformed lines are skipped on
//! read, so a damaged log never prevents the rest from loading.

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A single line of the leaderboard log: who finished which difficulty with
/// what score, how long it took, and when. The `time` and `date` fields are
/// preformatted text (e.g. `03:41` and `2024-11-02 19:03`) supplied by the
/// front end, which owns clock formatting.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScoreEntry {

    /// The player's chosen nickname.
    pub nickname: String,

    /// The final score of the game.
    pub score: usize,

    /// The solve time, as preformatted text.
    pub time: String,

    /// The completion date, as preformatted text.
    pub date: String,

    /// The display name of the difficulty that was played.
    pub difficulty: String
}

fn sanitize(field: &str) -> String {
    field.replace('|', " ").replace('\n', " ").replace('\r', " ")
}

impl ScoreEntry {

    /// Parses a single log line into a score entry. Returns `None` for
    /// lines that do not have exactly five pipe-separated fields or whose
    /// score is not a number; such lines are skipped when loading.
    pub fn parse(line: &str) -> Option<ScoreEntry> {
        let parts: Vec<&str> = line.trim().split('|').collect();

        if parts.len() != 5 {
            return None;
        }

        let score = parts[1].parse::<usize>().ok()?;

        Some(ScoreEntry {
            nickname: parts[0].to_string(),
            score,
            time: parts[2].to_string(),
            date: parts[3].to_string(),
            difficulty: parts[4].to_string()
        })
    }
}

impl Display for ScoreEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}|{}|{}", sanitize(&self.nickname), self.score,
            sanitize(&self.time), sanitize(&self.date),
            sanitize(&self.difficulty))
    }
}

/// An append-only leaderboard log backed by a text file. The file does not
/// need to exist; it is created on the first append, and loading from a
/// missing file yields an empty leaderboard.
pub struct Leaderboard {
    path: PathBuf
}

impl Leaderboard {

    /// Creates a leaderboard over the log file at the given path.
    pub fn new(path: impl AsRef<Path>) -> Leaderboard {
        Leaderboard {
            path: path.as_ref().to_path_buf()
        }
    }

    /// Appends the given entry to the end of the log, creating the file if
    /// necessary. Text fields have the `|` separator and line breaks
    /// replaced by spaces so they cannot corrupt the schema.
    ///
    /// # Errors
    ///
    /// Any I/O error raised while opening or writing the file.
    pub fn append(&self, entry: &ScoreEntry) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)
    }

    /// Loads all well-formed entries from the log, sorted by descending
    /// score. A missing file yields an empty list; malformed lines are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Any I/O error raised while reading an existing file.
    pub fn load(&self) -> io::Result<Vec<ScoreEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut entries: Vec<ScoreEntry> = content.lines()
            .filter_map(ScoreEntry::parse)
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(entries)
    }
}
