use yew::prelude::*;

use crate::services::api::ApiClient;

/// The application-wide API client provided at the root of the app
#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}
