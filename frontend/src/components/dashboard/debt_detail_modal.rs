use shared::money::format_currency;
use shared::Debt;
use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::services::date_utils::format_date;

#[derive(Properties, PartialEq)]
pub struct DebtDetailModalProps {
    pub debt: Option<Debt>,
    pub loading: bool,
    pub error: Option<String>,
    pub on_close: Callback<()>,
}

/// Overlay with the details of a single debt, opened from the dashboard
#[function_component(DebtDetailModal)]
pub fn debt_detail_modal(props: &DebtDetailModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = if props.loading {
        html! { <div class="loading">{"Loading debt details..."}</div> }
    } else if let Some(error) = props.error.as_ref() {
        html! { <div class="form-message error">{error}</div> }
    } else if let Some(debt) = props.debt.as_ref() {
        render_debt(debt)
    } else {
        html! {}
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">
                        {props.debt.as_ref().map(|d| d.title.clone()).unwrap_or_else(|| "Debt Details".to_string())}
                    </h3>
                    <button type="button" class="modal-close" onclick={on_close_click}>{"✕"}</button>
                </div>
                {body}
            </div>
        </div>
    }
}

fn render_debt(debt: &Debt) -> Html {
    html! {
        <div class="debt-detail">
            <dl class="detail-grid">
                <dt>{"Status"}</dt>
                <dd>{debt.status.label()}</dd>
                <dt>{"Total Amount"}</dt>
                <dd>{format_currency(debt.total_amount)}</dd>
                <dt>{"Installments"}</dt>
                <dd>{debt.installment_count.to_string()}</dd>
                <dt>{"Start Date"}</dt>
                <dd>{format_date(debt.start_date)}</dd>
                <dt>{"Interest Rate"}</dt>
                <dd>
                    {debt.interest_rate
                        .map(|rate| format!("{:.2}%", rate))
                        .unwrap_or_else(|| "None".to_string())}
                </dd>
            </dl>

            {if let Some(s) = debt.summary.as_ref() {
                html! {
                    <div class="debt-detail-summary">
                        <dl class="detail-grid">
                            <dt>{"Paid"}</dt>
                            <dd class="text-success">{format_currency(s.paid_amount)}</dd>
                            <dt>{"Remaining"}</dt>
                            <dd class="text-yellow">{format_currency(s.remaining_amount)}</dd>
                            <dt>{"Installments Paid"}</dt>
                            <dd>{format!("{} of {}", s.paid_installments, s.paid_installments + s.remaining_installments)}</dd>
                            <dt>{"Next Due"}</dt>
                            <dd>{s.next_due_date.map(format_date).unwrap_or_else(|| "—".to_string())}</dd>
                        </dl>
                        <ProgressBar percent={s.progress_percentage} />
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
