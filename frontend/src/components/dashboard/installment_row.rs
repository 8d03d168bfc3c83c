use chrono::NaiveDate;
use shared::money::format_currency;
use shared::{InstallmentStatus, InstallmentSummary};
use yew::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::services::date_utils::format_date;

#[derive(Properties, PartialEq)]
pub struct InstallmentRowProps {
    pub installment: InstallmentSummary,
    pub today: NaiveDate,
    /// Emits the parent debt id when the row is clicked
    pub on_select: Callback<i64>,
}

#[function_component(InstallmentRow)]
pub fn installment_row(props: &InstallmentRowProps) -> Html {
    let installment = &props.installment;
    let status = InstallmentStatus::of_summary(installment, props.today);

    // Rows without a debt id are not clickable
    let onclick = installment.debt_id.map(|debt_id| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(debt_id))
    });

    html! {
        <div
            class={classes!("installment-row", installment.debt_id.is_some().then_some("clickable"))}
            {onclick}
        >
            <div class="installment-info">
                <div class="installment-title">{&installment.debt_title}</div>
                <div class="installment-due">{format!("Due: {}", format_date(installment.due_date))}</div>
            </div>
            <div class="installment-amount">{format_currency(installment.amount)}</div>
            <StatusBadge {status} />
        </div>
    }
}
