use crate::components::CalorieDisplayComp;
use crate::model::{Activity, CalorieSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalorieTrackerProps {
    pub activities: Vec<Activity>,
}

#[function_component(CalorieTrackerComp)]
pub fn calorie_tracker_comp(props: &CalorieTrackerProps) -> Html {
    let summary = use_memo(props.activities.clone(), |activities| {
        CalorieSummary::from_activities(activities)
    });

    html! {
        <div class="calorie-tracker-summary">
            <h2 class="calorie-tracker-summary__title">{"Resumen de Calorías"}</h2>
            <div class="calorie-tracker-summary__panels">
                <CalorieDisplayComp calories={summary.consumed as i64} text="Consumidas" />
                <CalorieDisplayComp calories={summary.burned as i64} text="Ejercicio" />
                <CalorieDisplayComp calories={summary.net} text="Diferencia" />
            </div>
        </div>
    }
}
