use crate::model::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Honours a `CALORIE_TRACKER_STORAGE_KEY` set at build time.
    pub fn from_env() -> Self {
        match option_env!("CALORIE_TRACKER_STORAGE_KEY") {
            Some(key) if !key.is_empty() => Self::new().with_storage_key(key),
            _ => Self::new(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
