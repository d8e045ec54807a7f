use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalorieDisplayProps {
    pub calories: i64,
    pub text: AttrValue,
}

#[function_component(CalorieDisplayComp)]
pub fn calorie_display_comp(props: &CalorieDisplayProps) -> Html {
    html! {
        <p class="calorie-tracker-display">
            <span class="calorie-tracker-display__value">{props.calories}</span>
            <span class="calorie-tracker-display__text">{props.text.clone()}</span>
        </p>
    }
}
