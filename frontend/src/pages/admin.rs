use shared::Installment;
use yew::prelude::*;

use crate::components::admin::{CreateDebtModal, DebtCard, EditInstallmentModal};
use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_debts::use_debts;
use crate::services::date_utils::today;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let api_client = use_api_client();
    let debts = use_debts(&api_client);
    let show_create = use_state(|| false);
    let editing = use_state(|| Option::<Installment>::None);

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(true))
    };

    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_: ()| show_create.set(false))
    };

    let on_created = {
        let show_create = show_create.clone();
        let refresh = debts.actions.refresh.clone();
        Callback::from(move |_: ()| {
            show_create.set(false);
            refresh.emit(());
        })
    };

    let on_edit_installment = {
        let editing = editing.clone();
        Callback::from(move |installment: Installment| editing.set(Some(installment)))
    };

    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let on_edited = {
        let editing = editing.clone();
        let refresh = debts.actions.refresh.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            refresh.emit(());
        })
    };

    let on_retry = {
        let refresh = debts.actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let state = &debts.state;
    let today = today();

    let content = if state.loading && state.debts.is_empty() {
        html! { <div class="loading">{"Loading debts..."}</div> }
    } else if let (Some(error), true) = (state.error.as_ref(), state.debts.is_empty()) {
        html! {
            <div class="error-panel">
                <h2>{"Connection Error"}</h2>
                <p class="text-secondary">{error}</p>
                <button type="button" class="btn btn-secondary" onclick={on_retry}>{"Retry"}</button>
            </div>
        }
    } else if state.debts.is_empty() {
        html! { <div class="panel centered text-secondary">{"No debts yet. Create one to get started."}</div> }
    } else {
        html! {
            <div class="debt-list">
                {for state.debts.iter().map(|debt| html! {
                    <DebtCard
                        key={debt.id}
                        debt={debt.clone()}
                        {today}
                        on_edit_installment={on_edit_installment.clone()}
                        on_delete={debts.actions.delete_debt.clone()}
                    />
                })}
            </div>
        }
    };

    html! {
        <div class="admin">
            <div class="page-header with-action">
                <h1 class="page-title">{"Admin Panel"}</h1>
                <button type="button" class="btn btn-primary" onclick={open_create}>{"+ New Debt"}</button>
            </div>

            {if let (Some(error), false) = (state.error.as_ref(), state.debts.is_empty()) {
                html! { <div class="stale-banner">{error}</div> }
            } else {
                html! {}
            }}

            {content}

            <CreateDebtModal
                is_open={*show_create}
                on_success={on_created}
                on_close={close_create}
            />
            <EditInstallmentModal
                installment={(*editing).clone()}
                on_success={on_edited}
                on_close={close_edit}
            />
        </div>
    }
}
