use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("WBG_LIBRARY_DIR")
            && !dir.is_empty()
        {
            self.libraries.dir = Some(PathBuf::from(dir));
        }

        if let Ok(capacity_str) = std::env::var("WBG_JOURNAL_CAPACITY")
            && let Ok(capacity) = capacity_str.parse::<usize>()
            && capacity > 0
        {
            self.journal.capacity = capacity;
        }

        if let Ok(disabled) = std::env::var("WBG_JOURNAL_DISABLED")
            && matches!(disabled.trim(), "1" | "true" | "yes")
        {
            self.journal.enabled = false;
        }
    }
}
