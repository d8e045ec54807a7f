use crate::model::{Activity, ActivityAction, Category};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityProps {
    pub activity: Activity,
    pub on_action: Callback<ActivityAction>,
}

#[function_component(ActivityComp)]
pub fn activity_comp(props: &ActivityProps) -> Html {
    let activity = &props.activity;

    let on_edit = {
        let on_action = props.on_action.clone();
        let id = activity.id.clone();
        Callback::from(move |_| {
            on_action.emit(ActivityAction::SetActiveId { id: id.clone() });
        })
    };

    let on_delete = {
        let on_action = props.on_action.clone();
        let id = activity.id.clone();
        Callback::from(move |_| {
            on_action.emit(ActivityAction::DeleteActivity { id: id.clone() });
        })
    };

    let category_class = match activity.category {
        Category::Food => "food",
        Category::Exercise => "exercise",
    };

    html! {
        <div class={classes!("calorie-tracker-activity", category_class)}>
            <div class="calorie-tracker-activity__content">
                <span class="calorie-tracker-activity__category">{activity.category.label()}</span>
                <span class="calorie-tracker-activity__name">{&activity.name}</span>
                <span class="calorie-tracker-activity__calories">
                    {format!("{} Calorías", activity.calories)}
                </span>
            </div>
            <div class="calorie-tracker-activity__controls">
                <button class="calorie-tracker-activity__edit-button" onclick={on_edit}>
                    {"Editar"}
                </button>
                <button class="calorie-tracker-activity__delete-button" onclick={on_delete}>
                    {"Eliminar"}
                </button>
            </div>
        </div>
    }
}
