//! Runtime settings
//!
//! Defaults can be overridden from the environment:
//! - `SCOREKEEPER_DATA_DIR`: directory holding the saved game
//! - `SCOREKEEPER_SEED`: seed for reproducible ids

use std::path::PathBuf;

use crate::game::{IdGenerator, RandomIds, SeededIds};

const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
const SEED_VAR: &str = "SCOREKEEPER_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Where the native build keeps its saved game
    pub data_dir: PathBuf,
    /// Fixed seed for id generation (random ids when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".scorekeeper"),
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults with environment overrides applied
    pub fn load() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            settings.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse() {
                Ok(seed) => settings.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {}={:?}: not a u64", SEED_VAR, raw),
            }
        }
        settings
    }

    /// Id generator matching the seed setting
    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.seed {
            Some(seed) => Box::new(SeededIds::new(seed)),
            None => Box::new(RandomIds),
        }
    }
}
