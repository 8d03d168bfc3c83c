use shared::money::format_currency;
use shared::{DebtBreakdown, DebtStatus};
use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;

#[derive(Properties, PartialEq)]
pub struct DebtProgressListProps {
    pub debts: Vec<DebtBreakdown>,
    pub on_select_debt: Callback<i64>,
}

/// Repayment progress of every debt, one bar per debt
#[function_component(DebtProgressList)]
pub fn debt_progress_list(props: &DebtProgressListProps) -> Html {
    if props.debts.is_empty() {
        return html! {};
    }

    html! {
        <section class="panel">
            <h2 class="panel-title">{"Debt Progress"}</h2>
            <div class="debt-progress-list">
                {for props.debts.iter().map(|debt| {
                    let debt_id = debt.debt_id;
                    let on_select = props.on_select_debt.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(debt_id));
                    let complete = debt.status == DebtStatus::PaidOff;

                    html! {
                        <div key={debt.debt_id} class="debt-progress-row clickable" {onclick}>
                            <div class="debt-progress-header">
                                <span class="debt-progress-title">{&debt.title}</span>
                                <span class={classes!("debt-status", complete.then_some("paid-off"))}>
                                    {debt.status.label()}
                                </span>
                            </div>
                            <div class="progress-caption small">
                                <span>
                                    {format!(
                                        "{} paid of {} ({} left)",
                                        format_currency(debt.paid_amount),
                                        format_currency(debt.total_amount),
                                        format_currency(debt.remaining_amount),
                                    )}
                                </span>
                                <span>{format!("{:.1}%", debt.progress_percentage)}</span>
                            </div>
                            <ProgressBar percent={debt.progress_percentage} {complete} slim=true />
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
