use chrono::NaiveDate;
use shared::money::format_currency;
use shared::MonthlyBreakdown;
use yew::prelude::*;

use super::installment_row::InstallmentRow;
use crate::components::progress_bar::ProgressBar;

#[derive(Properties, PartialEq)]
pub struct CurrentMonthPanelProps {
    pub month: MonthlyBreakdown,
    pub today: NaiveDate,
    pub on_select_debt: Callback<i64>,
}

#[function_component(CurrentMonthPanel)]
pub fn current_month_panel(props: &CurrentMonthPanelProps) -> Html {
    let month = &props.month;
    let progress = month.progress();

    html! {
        <section class="panel current-month">
            <div class="panel-header">
                <div>
                    <h2 class="panel-title">{&month.month_label}</h2>
                    <p class="panel-subtitle">{"Current payment period"}</p>
                </div>
                {if month.is_complete {
                    html! { <div class="period-badge complete">{"✔ All Paid"}</div> }
                } else {
                    html! { <div class="period-badge pending">{"⏱ Pending"}</div> }
                }}
            </div>

            <div class="payment-stats">
                <PaymentStat label="Total Due" value={format_currency(month.total_due)} accent="text-primary" />
                <PaymentStat label="Paid" value={format_currency(month.total_paid)} accent="text-success" />
                <PaymentStat label="Remaining" value={format_currency(month.remaining)} accent="text-yellow" />
            </div>

            <div class="progress-block">
                <div class="progress-caption">
                    <span>{"Payment Progress"}</span>
                    <span>{format!("{:.0}%", progress)}</span>
                </div>
                <ProgressBar percent={progress} complete={month.is_complete} />
            </div>

            {if month.installments.is_empty() {
                html! {}
            } else {
                html! {
                    <div>
                        <h3 class="section-heading">{"Installments This Month"}</h3>
                        <div class="installment-list">
                            {for month.installments.iter().map(|installment| html! {
                                <InstallmentRow
                                    key={installment.installment_id}
                                    installment={installment.clone()}
                                    today={props.today}
                                    on_select={props.on_select_debt.clone()}
                                />
                            })}
                        </div>
                    </div>
                }
            }}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PaymentStatProps {
    label: AttrValue,
    value: AttrValue,
    accent: AttrValue,
}

#[function_component(PaymentStat)]
fn payment_stat(props: &PaymentStatProps) -> Html {
    html! {
        <div class="payment-stat">
            <div class="payment-stat-label">{props.label.to_string()}</div>
            <div class={classes!("payment-stat-value", props.accent.to_string())}>{props.value.to_string()}</div>
        </div>
    }
}
