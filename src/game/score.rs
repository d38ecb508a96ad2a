use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Highscore used when nothing has been saved yet
pub const DEFAULT_HIGHSCORE: u32 = 1;

/// Plain text file holding one newline-terminated decimal highscore
#[derive(Debug, Clone)]
pub struct HighscoreFile {
    path: PathBuf,
}

impl HighscoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved highscore, or None when the file is missing or does not start with a number
    pub fn read(&self) -> Option<u32> {
        if !self.path.exists() {
            return None;
        }
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let parsed = parse_leading_integer(&text);
                if parsed.is_none() {
                    tracing::warn!(
                        path = %self.path.display(),
                        "ignoring malformed highscore file"
                    );
                }
                parsed
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "failed to read highscore file"
                );
                None
            }
        }
    }

    pub fn write(&self, highscore: u32) -> Result<()> {
        fs::write(&self.path, format!("{highscore}\n"))
            .with_context(|| format!("failed to write highscore to {}", self.path.display()))
    }
}

/// Reads an unsigned integer at the start of `text`, after any leading whitespace
fn parse_leading_integer(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text, |end| &text[..end]);
    digits.parse().ok()
}

/// Current score, best score and whether this round beat it
#[derive(Debug)]
pub struct ScoreStore {
    current: u32,
    highscore: u32,
    new_highscore: bool,
    file: HighscoreFile,
}

impl ScoreStore {
    /// Load the saved highscore, falling back to the default
    pub fn load(file: HighscoreFile) -> Self {
        let highscore = file.read().unwrap_or(DEFAULT_HIGHSCORE);
        tracing::info!(highscore, path = %file.path().display(), "highscore loaded");
        Self {
            current: 1,
            highscore,
            new_highscore: false,
            file,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn is_new_highscore(&self) -> bool {
        self.new_highscore
    }

    pub fn on_gameplay_enter(&mut self) {
        self.current = 1;
        self.new_highscore = false;
    }

    pub fn on_growth(&mut self, length: usize) {
        self.current = to_score(length);
    }

    /// Record the final length. A new best is written to disk straight away;
    /// returns whether that write happened.
    pub fn on_game_over(&mut self, final_length: usize) -> bool {
        let final_score = to_score(final_length);
        self.current = final_score;
        if final_score <= self.highscore {
            return false;
        }

        self.highscore = final_score;
        self.new_highscore = true;
        match self.file.write(final_score) {
            Ok(()) => {
                tracing::info!(highscore = final_score, "new highscore saved");
                true
            }
            Err(error) => {
                tracing::warn!(?error, "highscore not saved");
                false
            }
        }
    }
}

fn to_score(length: usize) -> u32 {
    u32::try_from(length).unwrap_or(u32::MAX)
}
