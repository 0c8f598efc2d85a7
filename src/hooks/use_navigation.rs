use yew::prelude::*;

use crate::models::navigation::MenuItem;

/// Handle returned by `use_navigation` hook
#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    pub active: MenuItem,
    pub select: Callback<MenuItem>,
}

/// Active menu item, owned by the root component. Selection is unconditional
/// and nothing is remembered across reloads.
#[hook]
pub fn use_navigation() -> NavigationHandle {
    let active = use_state(MenuItem::default);

    let select = {
        let active = active.clone();
        Callback::from(move |item| active.set(item))
    };

    NavigationHandle {
        active: *active,
        select,
    }
}
