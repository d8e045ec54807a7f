use crate::model::{ActivityAction, ActivityState};

/// Applies `action` to `state`, returning the next state.
///
/// Saving while an activity is active replaces that entry in place, otherwise
/// the new activity is appended. Either way the active id is cleared.
pub fn activity_reducer(state: &ActivityState, action: ActivityAction) -> ActivityState {
    match action {
        ActivityAction::SaveActivity { new_activity } => {
            let activities = match &state.active_id {
                Some(active_id) => state
                    .activities
                    .iter()
                    .map(|activity| {
                        if &activity.id == active_id {
                            new_activity.clone()
                        } else {
                            activity.clone()
                        }
                    })
                    .collect(),
                None => {
                    let mut activities = state.activities.clone();
                    activities.push(new_activity);
                    activities
                }
            };

            ActivityState {
                activities,
                active_id: None,
            }
        }
        ActivityAction::SetActiveId { id } => ActivityState {
            activities: state.activities.clone(),
            active_id: Some(id),
        },
        ActivityAction::DeleteActivity { id } => ActivityState {
            activities: state
                .activities
                .iter()
                .filter(|activity| activity.id != id)
                .cloned()
                .collect(),
            active_id: state.active_id.clone(),
        },
        ActivityAction::RestartActivity => ActivityState::default(),
        ActivityAction::Unknown => state.clone(),
    }
}
