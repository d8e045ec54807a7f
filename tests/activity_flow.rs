use calorie_tracker::model::{load_active_draft, submit_draft};
use calorie_tracker::prelude::*;

fn summary(store: &ActivityStore<MemoryStorage>) -> CalorieSummary {
    CalorieSummary::from_activities(&store.state().activities)
}

#[test]
fn record_food_and_exercise() {
    let mut store = ActivityStore::new(MemoryStorage::new());

    let salad = Activity::new()
        .with_field(ActivityField::Name, "Salad")
        .with_field(ActivityField::Calories, "300");
    store.dispatch(submit_draft(&salad).unwrap());

    let run = Activity::new()
        .with_field(ActivityField::Category, "2")
        .with_field(ActivityField::Name, "Run")
        .with_field(ActivityField::Calories, "200");
    store.dispatch(submit_draft(&run).unwrap());

    assert_eq!(
        summary(&store),
        CalorieSummary {
            consumed: 300,
            burned: 200,
            net: 100,
        }
    );
}

#[test]
fn edit_an_existing_activity() {
    let mut store = ActivityStore::new(MemoryStorage::new());
    let salad = Activity::new().with_name("Salad").with_calories(300);
    store.dispatch(submit_draft(&salad).unwrap());

    let state = store.dispatch(ActivityAction::SetActiveId {
        id: salad.id.clone(),
    });
    let draft = load_active_draft(&state).unwrap();
    let draft = draft.with_field(ActivityField::Calories, "500");
    let state = store.dispatch(submit_draft(&draft).unwrap());

    assert_eq!(state.activities.len(), 1);
    assert_eq!(state.activities[0].id, salad.id);
    assert_eq!(state.activities[0].calories, 500);
    assert_eq!(state.active_id, None);
}

#[test]
fn blank_draft_never_dispatches() {
    let draft = Activity::new()
        .with_field(ActivityField::Name, "")
        .with_field(ActivityField::Calories, "0");

    assert!(!draft.is_valid());
    assert!(submit_draft(&draft).is_none());
}

#[test]
fn state_survives_a_reload() {
    let storage = MemoryStorage::new();
    let mut store = ActivityStore::new(storage.clone());
    store.dispatch(ActivityAction::SaveActivity {
        new_activity: Activity::new().with_name("Pesas").with_calories(150),
    });

    let reloaded = ActivityStore::new(storage.clone());
    assert_eq!(reloaded.state().activities, store.state().activities);

    let mut reloaded = reloaded;
    reloaded.dispatch(ActivityAction::RestartActivity);
    assert!(ActivityStore::new(storage).state().is_empty());
}
