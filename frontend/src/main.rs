use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod hooks;
mod pages;
mod routes;
mod services;

use config::AppConfig;
use routes::{switch, Route};
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::from_config(&config)
    });

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ContextProvider<ApiClient> context={(*api_client).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<ApiClient>>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    let config = AppConfig::from_env();
    Logger::info_with_component(
        "app",
        &format!("Starting Family Payment Tracker against {}", config.api_base_url),
    );
    yew::Renderer::<App>::new().render();
}
