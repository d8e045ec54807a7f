use crate::components::ActivityComp;
use crate::model::{Activity, ActivityAction};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityListProps {
    pub activities: Vec<Activity>,
    pub on_action: Callback<ActivityAction>,
}

#[function_component(ActivityListComp)]
pub fn activity_list_comp(props: &ActivityListProps) -> Html {
    html! {
        <div class="calorie-tracker-activity-list">
            <h2 class="calorie-tracker-activity-list__title">{"Comida y Actividades"}</h2>
            if props.activities.is_empty() {
                <p class="calorie-tracker-activity-list__empty">{"No hay actividades aún..."}</p>
            } else {
                {for props.activities.iter().map(|activity| {
                    html! {
                        <ActivityComp
                            key={activity.id.clone()}
                            activity={activity.clone()}
                            on_action={props.on_action.clone()}
                        />
                    }
                })}
            }
        </div>
    }
}
