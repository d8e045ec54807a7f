use crate::model::{
    load_active_draft, submit_draft, Activity, ActivityAction, ActivityField, ActivityState,
    Category,
};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityFormProps {
    pub state: Rc<ActivityState>,
    pub on_action: Callback<ActivityAction>,
}

/// Form holding a local draft; saving dispatches [`ActivityAction::SaveActivity`].
#[function_component(ActivityFormComp)]
pub fn activity_form_comp(props: &ActivityFormProps) -> Html {
    let draft = use_state(Activity::new);
    let category_ref = use_node_ref();

    {
        let draft = draft.clone();
        use_effect_with(props.state.clone(), move |state| {
            if let Some(activity) = load_active_draft(state) {
                draft.set(activity);
            }
            || ()
        });
    }

    {
        let category_ref = category_ref.clone();
        use_effect_with(draft.category, move |category| {
            if let Some(select) = category_ref.cast::<HtmlSelectElement>() {
                select.set_value(&category.id().to_string());
            }
            || ()
        });
    }

    let on_field = {
        let draft = draft.clone();
        Callback::from(move |(id, value): (String, String)| {
            match id.parse::<ActivityField>() {
                Ok(field) => draft.set(draft.with_field(field, &value)),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    let on_select = {
        let on_field = on_field.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            on_field.emit((target.id(), target.value()));
        })
    };

    let on_input = {
        let on_field = on_field.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((target.id(), target.value()));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(action) = submit_draft(&draft) {
                on_action.emit(action);
                draft.set(Activity::new());
            }
        })
    };

    html! {
        <form class="calorie-tracker-form" onsubmit={on_submit}>
            <div class="calorie-tracker-form__field">
                <label class="calorie-tracker-form__label" for={ActivityField::Category.id()}>
                    {"Categoría"}
                </label>
                <select
                    class="calorie-tracker-form__select"
                    id={ActivityField::Category.id()}
                    name={ActivityField::Category.id()}
                    ref={category_ref}
                    onchange={on_select}
                >
                    <option value="" disabled=true>{"Selecciona"}</option>
                    {for Category::ALL.iter().map(|category| html! {
                        <option
                            key={category.id().to_string()}
                            value={category.id().to_string()}
                            selected={draft.category == *category}
                        >
                            {category.label()}
                        </option>
                    })}
                </select>
            </div>

            <div class="calorie-tracker-form__field">
                <label class="calorie-tracker-form__label" for={ActivityField::Name.id()}>
                    {"Actividad"}
                </label>
                <input
                    class="calorie-tracker-form__input"
                    type="text"
                    id={ActivityField::Name.id()}
                    name={ActivityField::Name.id()}
                    placeholder="Ejemplo: Comida, Zumo de Naranja, Ensalada, Ejercicio, Pesas, Bicicleta"
                    value={draft.name.clone()}
                    oninput={on_input.clone()}
                />
            </div>

            <div class="calorie-tracker-form__field">
                <label class="calorie-tracker-form__label" for={ActivityField::Calories.id()}>
                    {"Calorías"}
                </label>
                <input
                    class="calorie-tracker-form__input"
                    type="number"
                    id={ActivityField::Calories.id()}
                    name={ActivityField::Calories.id()}
                    placeholder="Calorías ej. 300 o 500"
                    value={draft.calories.to_string()}
                    oninput={on_input}
                />
            </div>

            <input
                class="calorie-tracker-form__submit"
                type="submit"
                value={draft.save_label()}
                disabled={!draft.is_valid()}
            />
        </form>
    }
}
