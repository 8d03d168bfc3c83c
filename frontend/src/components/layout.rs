use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Navigation shell; the link of the current route is highlighted
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="layout">
            <nav class="navbar">
                <div class="navbar-inner">
                    <h1 class="brand">{"💰 Family Payment Tracker"}</h1>
                    <div class="nav-links">
                        {for Route::NAVIGATION.iter().map(|route| {
                            let active = current == Some(*route);
                            html! {
                                <Link<Route>
                                    to={*route}
                                    classes={classes!("nav-link", active.then_some("active"))}
                                >
                                    <span class="nav-icon">{route.icon()}</span>
                                    {route.label()}
                                </Link<Route>>
                            }
                        })}
                    </div>
                </div>
            </nav>
            <main class="main">
                {props.children.clone()}
            </main>
        </div>
    }
}
