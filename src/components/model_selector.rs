use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModelSelectorProps {
    pub slot: usize,
    pub available: Vec<String>,
    /// Current occupant of this slot, if any.
    pub value: Option<String>,
    /// Models held by the other slots; shown but not selectable here.
    pub taken: Vec<String>,
    pub on_change: Callback<(usize, Option<String>)>,
}

/// Dropdown for one comparison slot
#[function_component(ModelSelector)]
pub fn model_selector(props: &ModelSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        let slot = props.slot;
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            callback.emit((slot, (!value.is_empty()).then_some(value)));
        })
    };

    let placeholder = format!("Select Model {}", props.slot + 1);

    html! {
        <select
            class="model-selector"
            onchange={on_change}
            aria-label={placeholder.clone()}
            title={placeholder.clone()}
        >
            <option value="" selected={props.value.is_none()}>{placeholder}</option>
            {
                props.available.iter().map(|name| {
                    let selected = props.value.as_deref() == Some(name.as_str());
                    let disabled = props.taken.contains(name);
                    html! {
                        <option value={name.clone()} {selected} {disabled}>{name.clone()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
