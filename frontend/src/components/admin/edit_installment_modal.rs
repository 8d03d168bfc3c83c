use shared::forms::EditInstallmentForm;
use shared::Installment;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_api_client::use_api_client;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EditInstallmentModalProps {
    /// The installment being edited; the modal is closed when `None`
    pub installment: Option<Installment>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(EditInstallmentModal)]
pub fn edit_installment_modal(props: &EditInstallmentModalProps) -> Html {
    let form = use_state(|| props.installment.as_ref().map(EditInstallmentForm::from_installment));
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let api_client = use_api_client();

    // Pre-fill whenever a different installment is opened
    use_effect_with(props.installment.clone(), {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        move |installment| {
            form.set(installment.as_ref().map(EditInstallmentForm::from_installment));
            is_submitting.set(false);
            error_message.set(None);
            || ()
        }
    });

    let on_amount_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(mut next) = (*form).clone() {
                next.amount = input.value();
                form.set(Some(next));
            }
        })
    };

    let on_due_date_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(mut next) = (*form).clone() {
                next.due_date = input.value();
                form.set(Some(next));
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(current) = (*form).clone() else {
                return;
            };

            let request = match current.to_request() {
                Ok(request) => request,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            if request.is_empty() {
                on_close.emit(());
                return;
            }

            is_submitting.set(true);
            error_message.set(None);

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let api_client = api_client.clone();
            let installment_id = current.installment_id;

            spawn_local(async move {
                match api_client.update_installment(installment_id, &request).await {
                    Ok(_) => {
                        Logger::info_with_component("admin", &format!("Updated installment {}", installment_id));
                        is_submitting.set(false);
                        on_success.emit(());
                    }
                    Err(e) => {
                        is_submitting.set(false);
                        gloo::dialogs::alert(&e.user_message("Failed to update installment"));
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

    let (Some(installment), Some(current)) = (props.installment.as_ref(), (*form).clone()) else {
        return html! {};
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">
                    {format!("Edit Installment #{} of {}", installment.installment_number, installment.debt_title)}
                </h3>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="admin-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="installment-amount">{"Amount"}</label>
                        <input
                            id="installment-amount"
                            type="number"
                            step="0.01"
                            min="0"
                            value={current.amount.clone()}
                            oninput={on_amount_change}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="installment-due-date">{"Due Date"}</label>
                        <input
                            id="installment-due-date"
                            type="date"
                            value={current.due_date.clone()}
                            oninput={on_due_date_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Saving..." } else { "Save" }}
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
