use shared::forms::{AmountMode, CreateDebtForm};
use shared::money::format_currency;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_api_client::use_api_client;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct CreateDebtModalProps {
    pub is_open: bool,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

fn field_updater(
    form: &UseStateHandle<CreateDebtForm>,
    apply: fn(&mut CreateDebtForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(CreateDebtModal)]
pub fn create_debt_modal(props: &CreateDebtModalProps) -> Html {
    let form = use_state(CreateDebtForm::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let api_client = use_api_client();

    // Reset state when modal opens
    use_effect_with(props.is_open, {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        move |is_open| {
            if *is_open {
                form.set(CreateDebtForm::default());
                is_submitting.set(false);
                error_message.set(None);
            }
            || ()
        }
    });

    let on_title_change = field_updater(&form, |f, v| f.title = v);
    let on_amount_change = field_updater(&form, |f, v| f.amount = v);
    let on_count_change = field_updater(&form, |f, v| f.installment_count = v);
    let on_start_date_change = field_updater(&form, |f, v| f.start_date = v);
    let on_interest_change = field_updater(&form, |f, v| f.interest_rate = v);

    let set_mode = |mode: AmountMode| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.mode = mode;
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let on_success = props.on_success.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.to_request() {
                Ok(request) => request,
                Err(e) => {
                    Logger::warn_with_component("admin", &format!("Create-debt form rejected: {}", e));
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.create_debt(&request).await {
                    Ok(debt) => {
                        Logger::info_with_component("admin", &format!("Created debt {} ({})", debt.id, debt.title));
                        is_submitting.set(false);
                        on_success.emit(());
                    }
                    Err(e) => {
                        is_submitting.set(false);
                        gloo::dialogs::alert(&e.user_message("Failed to create debt"));
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !*is_submitting {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let mode = form.mode;
    let preview = form.preview().map(format_currency);

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Create Debt"}</h3>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="admin-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="debt-title">{"Title"}</label>
                        <input
                            id="debt-title"
                            type="text"
                            placeholder="e.g. Family car"
                            required=true
                            value={form.title.clone()}
                            oninput={on_title_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="mode-toggle">
                        <button
                            type="button"
                            class={classes!("mode-option", (mode == AmountMode::Monthly).then_some("active"))}
                            onclick={set_mode(AmountMode::Monthly)}
                            disabled={*is_submitting}
                        >
                            {AmountMode::Monthly.input_label()}
                        </button>
                        <button
                            type="button"
                            class={classes!("mode-option", (mode == AmountMode::Total).then_some("active"))}
                            onclick={set_mode(AmountMode::Total)}
                            disabled={*is_submitting}
                        >
                            {AmountMode::Total.input_label()}
                        </button>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="debt-amount">{mode.input_label()}</label>
                            <input
                                id="debt-amount"
                                type="number"
                                step="0.01"
                                min="0.01"
                                placeholder="2230.00"
                                required=true
                                value={form.amount.clone()}
                                oninput={on_amount_change}
                                disabled={*is_submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="debt-count">{"Installments"}</label>
                            <input
                                id="debt-count"
                                type="number"
                                step="1"
                                min="1"
                                placeholder="12"
                                required=true
                                value={form.installment_count.clone()}
                                oninput={on_count_change}
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>

                    <div class="form-preview">
                        <span>{mode.preview_label()}</span>
                        <span class="form-preview-value">{preview.unwrap_or_else(|| "—".to_string())}</span>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="debt-start-date">{"Start Date"}</label>
                            <input
                                id="debt-start-date"
                                type="date"
                                required=true
                                value={form.start_date.clone()}
                                oninput={on_start_date_change}
                                disabled={*is_submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="debt-interest">{"Interest Rate (%)"}</label>
                            <input
                                id="debt-interest"
                                type="number"
                                step="0.01"
                                min="0"
                                placeholder="Optional"
                                value={form.interest_rate.clone()}
                                oninput={on_interest_change}
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Creating..." } else { "Create Debt" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel}
                            disabled={*is_submitting}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
