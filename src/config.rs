//! Session configuration.

use crate::engine::display::Locale;
use crate::engine::{SortDirection, SortKey};

/// Settings a shell session starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub locale: Locale,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub log_level: String,
    pub color: bool,
    /// Skip the y/N prompt before destructive commands.
    pub assume_yes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            sort: SortKey::CreatedAt,
            direction: SortDirection::Desc,
            log_level: "warn".to_string(),
            color: true,
            assume_yes: false,
        }
    }
}
