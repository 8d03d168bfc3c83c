use shared::{Debt, DebtList};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct DebtListState {
    pub debts: Vec<Debt>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseDebtsResult {
    pub state: DebtListState,
    pub actions: UseDebtsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDebtsActions {
    pub refresh: Callback<()>,
    pub delete_debt: Callback<i64>,
}

/// Admin debt list with installments, loaded on mount
#[hook]
pub fn use_debts(api_client: &ApiClient) -> UseDebtsResult {
    let list = use_mut_ref(DebtList::new);
    let debts = use_state(Vec::<Debt>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let list = list.clone();
        let debts = debts.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let list = list.clone();
            let debts = debts.clone();
            let loading = loading.clone();
            let error = error.clone();
            let ticket = list.borrow_mut().begin_fetch();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_debts().await {
                    Ok(fetched) => {
                        if !list.borrow_mut().apply_fetch(ticket, fetched) {
                            Logger::debug_with_component(
                                "admin",
                                &format!("Discarding stale debt list response #{}", ticket),
                            );
                            loading.set(false);
                            return;
                        }
                        debts.set(list.borrow().debts().to_vec());
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("admin", &format!("Failed to fetch debts: {}", e));
                        error.set(Some(format!("Failed to load debts: {}", e)));
                    }
                }

                loading.set(false);
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    // Removes the row right away; only a failed delete goes back to the server
    // for the authoritative list.
    let delete_debt = {
        let api_client = api_client.clone();
        let list = list.clone();
        let debts = debts.clone();
        let refresh = refresh.clone();

        Callback::from(move |debt_id: i64| {
            if !gloo::dialogs::confirm("Delete this debt and all of its installments?") {
                return;
            }

            list.borrow_mut().begin_delete(debt_id);
            debts.set(list.borrow().debts().to_vec());

            let api_client = api_client.clone();
            let list = list.clone();
            let debts = debts.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = api_client.delete_debt(debt_id).await;
                let refetch = list.borrow_mut().finish_delete(debt_id, &result);

                match result {
                    Ok(()) => {
                        Logger::info_with_component("admin", &format!("Deleted debt {}", debt_id));
                        debts.set(list.borrow().debts().to_vec());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "admin",
                            &format!("Failed to delete debt {}: {}", debt_id, e),
                        );
                        gloo::dialogs::alert(&e.user_message("Failed to delete debt"));
                    }
                }

                if refetch {
                    refresh.emit(());
                }
            });
        })
    };

    let state = DebtListState {
        debts: (*debts).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseDebtsActions { refresh, delete_debt };

    UseDebtsResult { state, actions }
}
