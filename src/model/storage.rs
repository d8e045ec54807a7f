use crate::model::Activity;
use std::cell::RefCell;
use std::rc::Rc;

/// Default key the activity list is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "activities";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize activities: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Key-value capability the activity list is mirrored to.
///
/// Implementors only move raw text; encoding and the fallback to an empty
/// list live in the provided methods.
pub trait ActivityStorage {
    fn load_raw(&self) -> Option<String>;

    fn save_raw(&self, payload: &str) -> Result<(), StorageError>;

    /// Persisted activities, or an empty list when nothing usable is stored.
    fn load(&self) -> Vec<Activity> {
        let Some(payload) = self.load_raw() else {
            return Vec::new();
        };
        match serde_json::from_str(&payload) {
            Ok(activities) => activities,
            Err(err) => {
                log::warn!("Discarding unreadable activities: {}", err);
                Vec::new()
            }
        }
    }

    fn save(&self, activities: &[Activity]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(activities)?;
        self.save_raw(&payload)
    }
}

/// In-process storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        MemoryStorage {
            slot: Rc::new(RefCell::new(Some(payload.into()))),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ActivityStorage for MemoryStorage {
    fn load_raw(&self) -> Option<String> {
        self.payload()
    }

    fn save_raw(&self, payload: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// Browser `localStorage` under a single key.
#[cfg(feature = "yew")]
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserStorage {
    key: String,
}

#[cfg(feature = "yew")]
impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        BrowserStorage { key: key.into() }
    }
}

#[cfg(feature = "yew")]
impl ActivityStorage for BrowserStorage {
    fn load_raw(&self) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn save_raw(&self, payload: &str) -> Result<(), StorageError> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .set_item(&self.key, payload)
            .map_err(|err| StorageError::Backend(format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn absent_key_loads_empty() {
        assert!(MemoryStorage::new().load().is_empty());
    }

    #[test]
    fn garbage_loads_empty() {
        assert!(MemoryStorage::with_payload("not json").load().is_empty());
        assert!(MemoryStorage::with_payload(r#"{"id": "a1"}"#).load().is_empty());
        assert!(MemoryStorage::with_payload(
            r#"[{"id": "a1", "category": 7, "name": "x", "calories": 1}]"#
        )
        .load()
        .is_empty());
    }

    #[test]
    fn save_then_load() {
        let storage = MemoryStorage::new();
        let activities = vec![
            Activity::new()
                .with_id("a1")
                .with_name("Salad")
                .with_calories(300),
            Activity::new()
                .with_id("a2")
                .with_category(Category::Exercise)
                .with_name("Run")
                .with_calories(200),
        ];

        storage.save(&activities).unwrap();

        assert_eq!(storage.load(), activities);
        assert!(storage.payload().unwrap().starts_with(r#"[{"id":"a1""#));
    }

    #[test]
    fn reads_list_written_by_earlier_versions() {
        let storage = MemoryStorage::with_payload(
            r#"[{"id":"7b2c","category":1,"name":"Zumo de Naranja","calories":120}]"#,
        );

        let activities = storage.load();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Zumo de Naranja");
        assert_eq!(activities[0].category, Category::Food);
    }

    #[test]
    fn clones_share_the_slot() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.save(&[]).unwrap();
        assert_eq!(handle.payload().as_deref(), Some("[]"));
    }
}
