//! Level catalog
//!
//! Level files hold one layout per line. The first line is a guide (a ruler
//! of strip positions for whoever edits the file) and is never played.

use std::path::Path;

use crate::sim::LevelState;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("level file has no levels after the guide line")]
    Empty,
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<String>,
}

impl LevelCatalog {
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let levels: Vec<String> = text
            .lines()
            .skip(1)
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();

        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        log::debug!("found {} levels", levels.len());
        Ok(Self { levels })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.levels.get(index).map(String::as_str)
    }

    /// Which level to play after `index` resolved with `state`.
    ///
    /// Winning advances (wrapping after the last level); losing starts over.
    pub fn next_index(&self, index: usize, state: LevelState) -> usize {
        match state {
            LevelState::InProgress => index,
            LevelState::Failed => 0,
            LevelState::Complete if index + 1 >= self.levels.len() => 0,
            LevelState::Complete => index + 1,
        }
    }
}
