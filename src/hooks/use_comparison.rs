use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::screen_state::ScreenState;
use crate::models::comparison::{ModelComparison, SelectedModels};
use crate::services::api::fetch_model_comparison;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonState {
    pub load: ScreenState<ModelComparison>,
    pub selected: SelectedModels,
}

pub enum ComparisonAction {
    Resolved(Result<ModelComparison, String>),
    /// Put `model` into `slot`, or clear it with `None`.
    SelectSlot {
        slot: usize,
        model: Option<String>,
    },
}

impl Reducible for ComparisonState {
    type Action = ComparisonAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ComparisonAction::Resolved(result) => {
                let round = self.load.last_round() + 1;
                let Some(load) = self.load.resolve(round, result) else {
                    return self;
                };
                let selected = load
                    .data
                    .as_deref()
                    .map(SelectedModels::initial)
                    .unwrap_or_default();
                Rc::new(Self { load, selected })
            }
            ComparisonAction::SelectSlot { slot, model } => {
                let Some(comparison) = self.load.data.as_deref() else {
                    return self;
                };
                if let Some(name) = &model {
                    if comparison.find(name).is_none() {
                        return self;
                    }
                }
                Rc::new(Self {
                    load: self.load.clone(),
                    selected: self.selected.replace_slot(slot, model),
                })
            }
        }
    }
}

/// Handle returned by `use_comparison` hook
#[derive(Clone, PartialEq)]
pub struct ComparisonHandle {
    pub state: Rc<ComparisonState>,
    pub select: Callback<(usize, Option<String>)>,
}

/// One-shot load of the comparison list plus slot selection.
#[hook]
pub fn use_comparison() -> ComparisonHandle {
    let state = use_reducer(ComparisonState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = fetch_model_comparison().await.map_err(|e| {
                    gloo::console::error!(&format!("Model comparison failed: {e}"));
                    e.to_string()
                });
                dispatcher.dispatch(ComparisonAction::Resolved(result));
            });
            || ()
        });
    }

    let select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(slot, model): (usize, Option<String>)| {
            dispatcher.dispatch(ComparisonAction::SelectSlot { slot, model });
        })
    };

    ComparisonHandle {
        state: Rc::new((*state).clone()),
        select,
    }
}
