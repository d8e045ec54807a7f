#[cfg(feature = "yew")]
pub mod app;
#[cfg(feature = "yew")]
pub mod components;
pub mod config;
pub mod model;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::app::{App, AppProps};
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::model::BrowserStorage;
    pub use crate::model::{
        activity_reducer, Activity, ActivityAction, ActivityField, ActivityId, ActivityState,
        ActivityStorage, ActivityStore, CalorieSummary, Category, MemoryStorage, StorageError,
    };
}
