use chrono::NaiveDate;
use shared::money::format_currency;
use shared::{Debt, DebtStatus, Installment, InstallmentStatus};
use yew::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::services::date_utils::{format_date, format_timestamp};

#[derive(Properties, PartialEq)]
pub struct DebtCardProps {
    pub debt: Debt,
    pub today: NaiveDate,
    pub on_edit_installment: Callback<Installment>,
    pub on_delete: Callback<i64>,
}

#[function_component(DebtCard)]
pub fn debt_card(props: &DebtCardProps) -> Html {
    let debt = &props.debt;

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let debt_id = debt.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(debt_id))
    };

    let installments = debt.sorted_installments();

    html! {
        <div class="debt-card">
            <div class="debt-card-header">
                <div>
                    <h3 class="debt-card-title">{&debt.title}</h3>
                    <div class="debt-card-meta">
                        {format!(
                            "{} · {} installments · from {}",
                            format_currency(debt.total_amount),
                            debt.installment_count,
                            format_date(debt.start_date),
                        )}
                        {debt.interest_rate.map(|rate| format!(" · {:.2}% interest", rate)).unwrap_or_default()}
                    </div>
                </div>
                <div class="debt-card-actions">
                    <span class={classes!("debt-status", (debt.status == DebtStatus::PaidOff).then_some("paid-off"))}>
                        {debt.status.label()}
                    </span>
                    <button type="button" class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </div>

            {if installments.is_empty() {
                html! { <div class="empty-state small">{"No installments"}</div> }
            } else {
                html! {
                    <table class="installments-table">
                        <thead>
                            <tr>
                                <th>{"#"}</th>
                                <th>{"Due Date"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Status"}</th>
                                <th>{"Paid On"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for installments.into_iter().map(|installment| {
                                let status = InstallmentStatus::of_installment(installment, props.today);
                                let on_edit = {
                                    let on_edit = props.on_edit_installment.clone();
                                    let installment = installment.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(installment.clone()))
                                };

                                html! {
                                    <tr key={installment.id}>
                                        <td>{installment.installment_number.to_string()}</td>
                                        <td>{format_date(installment.due_date)}</td>
                                        <td class="amount">{format_currency(installment.amount)}</td>
                                        <td><StatusBadge {status} /></td>
                                        <td class="small">
                                            {installment.paid_at.as_deref().map(format_timestamp).unwrap_or_default()}
                                        </td>
                                        <td>
                                            <button type="button" class="btn btn-small" onclick={on_edit}>
                                                {"Edit"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}
