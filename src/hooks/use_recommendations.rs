use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::recommendations::{AppliedRecommendations, Recommendation};
use crate::services::api::fetch_recommendations;

/// Recommendations never enter an error state: a failed fetch shows an empty list.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationsState {
    pub loading: bool,
    pub items: Rc<Vec<Recommendation>>,
    pub applied: AppliedRecommendations,
    /// Index of the recommendation whose detail dialog is open.
    pub selected: Option<usize>,
}

impl Default for RecommendationsState {
    fn default() -> Self {
        Self {
            loading: true,
            items: Rc::new(Vec::new()),
            applied: AppliedRecommendations::default(),
            selected: None,
        }
    }
}

impl RecommendationsState {
    pub fn selected_item(&self) -> Option<&Recommendation> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

pub enum RecommendationsAction {
    Loaded(Vec<Recommendation>),
    Apply(usize),
    Show(usize),
    Dismiss,
}

impl Reducible for RecommendationsState {
    type Action = RecommendationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RecommendationsAction::Loaded(items) => {
                next.loading = false;
                next.items = Rc::new(items);
                next.applied = AppliedRecommendations::default();
                next.selected = None;
            }
            RecommendationsAction::Apply(index) if index < self.items.len() => {
                next.applied = self.applied.apply(index);
            }
            RecommendationsAction::Show(index) if index < self.items.len() => {
                next.selected = Some(index);
            }
            RecommendationsAction::Dismiss => next.selected = None,
            _ => return self,
        }
        Rc::new(next)
    }
}

/// Collapses a failed fetch into an empty list.
pub fn recommendations_or_empty(
    result: Result<Vec<Recommendation>, AppError>,
) -> Vec<Recommendation> {
    result.unwrap_or_default()
}

/// Handle returned by `use_recommendations` hook
#[derive(Clone, PartialEq)]
pub struct RecommendationsHandle {
    pub state: Rc<RecommendationsState>,
    pub apply: Callback<usize>,
    pub show: Callback<usize>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_recommendations() -> RecommendationsHandle {
    let state = use_reducer(RecommendationsState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = fetch_recommendations().await;
                if let Err(e) = &result {
                    gloo::console::error!(&format!("Recommendations unavailable: {e}"));
                }
                dispatcher.dispatch(RecommendationsAction::Loaded(recommendations_or_empty(
                    result,
                )));
            });
            || ()
        });
    }

    let apply = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index| dispatcher.dispatch(RecommendationsAction::Apply(index)))
    };
    let show = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index| dispatcher.dispatch(RecommendationsAction::Show(index)))
    };
    let dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(RecommendationsAction::Dismiss))
    };

    RecommendationsHandle {
        state: Rc::new((*state).clone()),
        apply,
        show,
        dismiss,
    }
}
