use shared::dashboard::connection_error_message;
use shared::{DashboardSummary, Debt, RequestSequence};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct DashboardState {
    pub data: Option<DashboardSummary>,
    pub loading: bool,
    pub error: Option<String>,

    // Debt detail overlay
    pub selected_debt_id: Option<i64>,
    pub selected_debt: Option<Debt>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub refresh: Callback<()>,
    pub select_debt: Callback<i64>,
    pub close_detail: Callback<()>,
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let data = use_state(|| Option::<DashboardSummary>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let summary_sequence = use_mut_ref(RequestSequence::new);

    let selected_debt_id = use_state(|| Option::<i64>::None);
    let selected_debt = use_state(|| Option::<Debt>::None);
    let detail_loading = use_state(|| false);
    let detail_error = use_state(|| Option::<String>::None);
    let detail_sequence = use_mut_ref(RequestSequence::new);

    // Fetch the summary; responses older than one already applied are dropped
    let refresh = {
        let api_client = api_client.clone();
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        let summary_sequence = summary_sequence.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let data = data.clone();
            let loading = loading.clone();
            let error = error.clone();
            let summary_sequence = summary_sequence.clone();
            let ticket = summary_sequence.borrow_mut().issue();

            spawn_local(async move {
                loading.set(true);

                let result = api_client.dashboard_summary().await;

                if !summary_sequence.borrow_mut().accept(ticket) {
                    Logger::debug_with_component(
                        "dashboard",
                        &format!("Discarding stale summary response #{}", ticket),
                    );
                    return;
                }

                match result {
                    Ok(summary) => {
                        data.set(Some(summary));
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "dashboard",
                            &format!("Failed to fetch dashboard summary: {}", e),
                        );
                        error.set(Some(connection_error_message(api_client.base_url())));
                    }
                }

                loading.set(false);
            });
        })
    };

    let select_debt = {
        let api_client = api_client.clone();
        let selected_debt_id = selected_debt_id.clone();
        let selected_debt = selected_debt.clone();
        let detail_loading = detail_loading.clone();
        let detail_error = detail_error.clone();
        let detail_sequence = detail_sequence.clone();

        use_callback((), move |debt_id: i64, _| {
            let api_client = api_client.clone();
            let selected_debt = selected_debt.clone();
            let detail_loading = detail_loading.clone();
            let detail_error = detail_error.clone();
            let detail_sequence = detail_sequence.clone();
            let ticket = detail_sequence.borrow_mut().issue();

            selected_debt_id.set(Some(debt_id));
            selected_debt.set(None);
            detail_error.set(None);
            detail_loading.set(true);

            spawn_local(async move {
                let result = api_client.debt_detail(debt_id).await;

                // A newer selection or a close happened meanwhile
                if !detail_sequence.borrow().is_latest(ticket) {
                    return;
                }
                detail_sequence.borrow_mut().accept(ticket);

                match result {
                    Ok(debt) => selected_debt.set(Some(debt)),
                    Err(e) => {
                        Logger::error_with_component(
                            "dashboard",
                            &format!("Failed to fetch debt {}: {}", debt_id, e),
                        );
                        detail_error.set(Some(e.user_message("Failed to load debt details")));
                    }
                }

                detail_loading.set(false);
            });
        })
    };

    let close_detail = {
        let selected_debt_id = selected_debt_id.clone();
        let selected_debt = selected_debt.clone();
        let detail_loading = detail_loading.clone();
        let detail_error = detail_error.clone();
        let detail_sequence = detail_sequence.clone();

        use_callback((), move |_, _| {
            // Invalidate any detail request still in flight
            detail_sequence.borrow_mut().issue();
            selected_debt_id.set(None);
            selected_debt.set(None);
            detail_loading.set(false);
            detail_error.set(None);
        })
    };

    let state = DashboardState {
        data: (*data).clone(),
        loading: *loading,
        error: (*error).clone(),
        selected_debt_id: *selected_debt_id,
        selected_debt: (*selected_debt).clone(),
        detail_loading: *detail_loading,
        detail_error: (*detail_error).clone(),
    };

    let actions = UseDashboardActions {
        refresh,
        select_debt,
        close_detail,
    };

    UseDashboardResult { state, actions }
}
