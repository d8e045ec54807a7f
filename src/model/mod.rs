mod action;
mod activity;
mod category;
mod form;
mod reducer;
mod state;
mod storage;
mod store;
mod summary;

pub use action::ActivityAction;
pub use activity::{Activity, ActivityId};
pub use category::{Category, CategoryError};
pub use form::{load_active_draft, submit_draft, ActivityField, UnknownField};
pub use reducer::activity_reducer;
pub use state::ActivityState;
#[cfg(feature = "yew")]
pub use storage::BrowserStorage;
pub use storage::{ActivityStorage, MemoryStorage, StorageError, DEFAULT_STORAGE_KEY};
pub use store::ActivityStore;
pub use summary::CalorieSummary;
