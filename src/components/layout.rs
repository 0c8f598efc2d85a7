use yew::prelude::*;

use crate::models::navigation::MenuItem;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub active: MenuItem,
    pub on_select: Callback<MenuItem>,
    pub children: Html,
}

/// Header, side navigation and the active screen.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <div class="brand">
                    <h1>{"Green Model Optimizer"}</h1>
                    <span class="tagline">{"Eco-AI Platform"}</span>
                </div>
                <span class="section-title">{props.active.label()}</span>
            </header>

            <div class="app-body">
                <nav class="sidebar">
                    <ul>
                        {
                            MenuItem::all().iter().map(|&item| {
                                let onclick = props.on_select.reform(move |_: MouseEvent| item);
                                let class = classes!(
                                    "nav-item",
                                    (item == props.active).then_some("active")
                                );
                                html! {
                                    <li key={item.id()}>
                                        <button {class} {onclick} id={format!("nav-{}", item.id())}>
                                            <span class="nav-icon">{item.icon()}</span>
                                            <span>{item.label()}</span>
                                        </button>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                </nav>

                <main class="app-main">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
