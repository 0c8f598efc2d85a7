use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StatusKind {
    Loading,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub kind: StatusKind,
    pub message: AttrValue,
}

/// Placeholder shown instead of a screen's content while it loads or after it fails.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match props.kind {
        StatusKind::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{props.message.clone()}</p>
            </div>
        },
        StatusKind::Error => html! {
            <div class="status error" role="alert">
                <p>{"Error: "}{props.message.clone()}</p>
            </div>
        },
    }
}
