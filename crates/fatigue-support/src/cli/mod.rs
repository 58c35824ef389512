//! Command-line surface over the personnel store

pub mod commands;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::store::{resolve_seed, InMemoryPersonnelStore};

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Settings plus the store generated from them
pub struct Session {
    pub settings: Settings,
    pub seed: u64,
    pub store: InMemoryPersonnelStore,
}

impl Session {
    /// Load settings, apply the seed override and populate the store
    pub fn open(config: Option<&Path>, seed: Option<u64>) -> Result<Self> {
        let mut settings = Settings::load(config)?;
        if seed.is_some() {
            settings.seed = seed;
        }

        let seed = resolve_seed(settings.seed);
        let store = InMemoryPersonnelStore::populate(
            &settings.profiles(),
            seed,
            settings.unknown_shift_policy,
        )?;
        info!(users = store.len(), "personnel store ready");

        Ok(Self {
            settings,
            seed,
            store,
        })
    }

    /// Requested lookback, or the configured default
    pub fn lookback(&self, days: Option<u32>) -> u32 {
        days.unwrap_or(self.settings.lookback_days)
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an optional number with two decimals, or "-"
pub fn format_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}
