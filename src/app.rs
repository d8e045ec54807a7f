use crate::components::{ActivityFormComp, ActivityListComp, CalorieTrackerComp};
use crate::config::Config;
use crate::model::{ActivityAction, ActivityStore, BrowserStorage};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let store = {
        let key = props.config.storage_key.clone();
        use_mut_ref(move || ActivityStore::new(BrowserStorage::new(key)))
    };

    let state = {
        let store = store.clone();
        use_state(move || store.borrow().state())
    };

    let on_action = {
        let store = store.clone();
        let state = state.clone();
        Callback::from(move |action: ActivityAction| {
            let next = store.borrow_mut().dispatch(action);
            state.set(next);
        })
    };

    let on_restart = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(ActivityAction::RestartActivity);
        })
    };

    html! {
        <div class="calorie-tracker">
            <header class="calorie-tracker-header">
                <h1 class="calorie-tracker-header__title">{"Contador de Calorías"}</h1>
                <button
                    class="calorie-tracker-header__restart-button"
                    disabled={state.is_empty()}
                    onclick={on_restart}
                >
                    {"Reiniciar App"}
                </button>
            </header>

            <section class="calorie-tracker__form">
                <ActivityFormComp state={(*state).clone()} on_action={on_action.clone()} />
            </section>

            <section class="calorie-tracker__summary">
                <CalorieTrackerComp activities={state.activities.clone()} />
            </section>

            <section class="calorie-tracker__activities">
                <ActivityListComp activities={state.activities.clone()} {on_action} />
            </section>
        </div>
    }
}
