use crate::model::{activity_reducer, ActivityAction, ActivityState, ActivityStorage};
use std::rc::Rc;

/// Owns the current [`ActivityState`] and mirrors its activity list to storage.
pub struct ActivityStore<S>
where
    S: ActivityStorage,
{
    storage: S,
    state: Rc<ActivityState>,
}

impl<S> ActivityStore<S>
where
    S: ActivityStorage,
{
    pub fn new(storage: S) -> Self {
        let activities = storage.load();
        log::info!("Loaded {} activities", activities.len());
        ActivityStore {
            storage,
            state: Rc::new(ActivityState::new(activities)),
        }
    }

    pub fn state(&self) -> Rc<ActivityState> {
        self.state.clone()
    }

    /// Runs `action` through the reducer and swaps in the result.
    ///
    /// Storage is written whenever the activity list changed. A failed write
    /// is logged; the new state is kept either way.
    pub fn dispatch(&mut self, action: ActivityAction) -> Rc<ActivityState> {
        log::debug!("Dispatching {:?}", action);
        let next = activity_reducer(&self.state, action);

        if next.activities != self.state.activities {
            if let Err(err) = self.storage.save(&next.activities) {
                log::warn!("Failed to persist activities: {}", err);
            }
        }

        self.state = Rc::new(next);
        self.state.clone()
    }
}
