use crate::model::{Activity, ActivityId};

/// Activity list plus the entry currently loaded into the form for editing.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ActivityState {
    pub activities: Vec<Activity>,
    pub active_id: Option<ActivityId>,
}

impl ActivityState {
    pub fn new(activities: Vec<Activity>) -> Self {
        ActivityState {
            activities,
            active_id: None,
        }
    }

    pub fn get_activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// The activity `active_id` points at, if it is set and still exists.
    pub fn active_activity(&self) -> Option<&Activity> {
        self.active_id
            .as_deref()
            .and_then(|id| self.get_activity(id))
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_active_id() {
        let state = ActivityState::new(vec![Activity::new().with_id("a1")]);

        assert_eq!(state.activities.len(), 1);
        assert_eq!(state.active_id, None);
        assert!(state.active_activity().is_none());
    }

    #[test]
    fn active_activity_follows_active_id() {
        let mut state = ActivityState::new(vec![
            Activity::new().with_id("a1"),
            Activity::new().with_id("a2"),
        ]);

        state.active_id = Some("a2".to_string());
        assert_eq!(state.active_activity().map(|a| a.id.as_str()), Some("a2"));

        state.active_id = Some("missing".to_string());
        assert!(state.active_activity().is_none());
    }
}
