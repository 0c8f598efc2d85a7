use yew::prelude::*;

use green_model_dashboard::components::{
    ComparisonScreen, DashboardScreen, EsgReportScreen, Layout, RecommendationsScreen,
};
use green_model_dashboard::hooks::use_navigation::use_navigation;
use green_model_dashboard::models::navigation::Screen;

#[function_component(App)]
fn app() -> Html {
    let nav = use_navigation();

    // Only the active screen is mounted, so switching away stops its polling.
    let screen = match nav.active.screen() {
        Screen::Dashboard => html! { <DashboardScreen /> },
        Screen::Comparison => html! { <ComparisonScreen /> },
        Screen::Recommendations => html! { <RecommendationsScreen /> },
        Screen::Reports => html! { <EsgReportScreen /> },
    };

    html! {
        <>
            <Layout active={nav.active} on_select={nav.select.clone()}>
                {screen}
            </Layout>

            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
