use std::rc::Rc;
use yew::prelude::*;

/// Loading / error / data triple shared by every fetching screen.
///
/// Each fetch round carries a sequence number; a result is applied only when
/// its round is newer than the last one applied, so a slow round can never
/// overwrite a fresher one.
#[derive(Debug, PartialEq)]
pub struct ScreenState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<Rc<T>>,
    last_round: u64,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
            last_round: 0,
        }
    }
}

impl<T> Clone for ScreenState<T> {
    fn clone(&self) -> Self {
        Self {
            loading: self.loading,
            error: self.error.clone(),
            data: self.data.clone(),
            last_round: self.last_round,
        }
    }
}

pub enum ScreenAction<T> {
    Resolved {
        round: u64,
        result: Result<T, String>,
    },
}

/// What a screen should draw right now.
#[derive(Debug, PartialEq)]
pub enum ScreenView<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a Rc<T>),
}

impl<T> ScreenState<T> {
    pub fn view(&self) -> ScreenView<'_, T> {
        if self.loading {
            return ScreenView::Loading;
        }
        match (&self.error, &self.data) {
            (Some(message), _) => ScreenView::Failed(message),
            (None, Some(data)) => ScreenView::Ready(data),
            (None, None) => ScreenView::Loading,
        }
    }

    pub fn last_round(&self) -> u64 {
        self.last_round
    }

    /// Applies a round's outcome. Failures keep whatever data was already shown.
    pub fn resolve(&self, round: u64, result: Result<T, String>) -> Option<Self> {
        if round <= self.last_round {
            return None;
        }

        Some(match result {
            Ok(data) => Self {
                loading: false,
                error: None,
                data: Some(Rc::new(data)),
                last_round: round,
            },
            Err(message) => Self {
                loading: false,
                error: Some(message),
                data: self.data.clone(),
                last_round: round,
            },
        })
    }
}

impl<T> Reducible for ScreenState<T> {
    type Action = ScreenAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ScreenAction::Resolved { round, result } => match self.resolve(round, result) {
                Some(next) => Rc::new(next),
                None => self,
            },
        }
    }
}
