use shared::money::format_currency;
use shared::MonthlyBreakdown;
use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;

#[derive(Properties, PartialEq)]
pub struct MonthCardProps {
    pub month: MonthlyBreakdown,
}

#[function_component(MonthCard)]
pub fn month_card(props: &MonthCardProps) -> Html {
    let month = &props.month;
    let progress = month.progress();

    html! {
        <div class="month-card">
            <div class="month-card-header">
                <div>
                    <div class="month-card-label">{&month.month_label}</div>
                    <div class="month-card-remaining">
                        {format!("{} remaining", format_currency(month.remaining))}
                    </div>
                </div>
                <div class="month-card-due">{format_currency(month.total_due)}</div>
            </div>
            <div class="progress-caption small">
                <span>{"Progress"}</span>
                <span>{format!("{:.0}%", progress)}</span>
            </div>
            <ProgressBar percent={progress} complete={month.is_complete} slim=true />
        </div>
    }
}
