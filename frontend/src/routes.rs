use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, viewer::ViewerPage};

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/viewer")]
    Viewer,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries of the navigation bar, in display order
    pub const NAVIGATION: [Route; 3] = [Route::Dashboard, Route::Viewer, Route::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Viewer => "Viewer",
            Route::Admin => "Admin",
            Route::NotFound => "Not Found",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "🏠",
            Route::Viewer => "👁",
            Route::Admin => "⚙",
            Route::NotFound => "",
        }
    }
}

pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Viewer => html! { <ViewerPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! {
            <div class="panel centered">
                <h1>{"404"}</h1>
                <p class="text-secondary">{"This page does not exist."}</p>
            </div>
        },
    };

    html! { <Layout>{page}</Layout> }
}
