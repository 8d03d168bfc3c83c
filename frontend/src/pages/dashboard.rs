use shared::breakdown::{current_month, upcoming_months};
use shared::money::format_currency;
use shared::{DashboardPhase, DashboardSummary};
use yew::prelude::*;

use crate::components::dashboard::{CurrentMonthPanel, DebtDetailModal, DebtProgressList, MonthCard, SummaryCard};
use crate::config::AppConfig;
use crate::hooks::use_api_client::use_api_client;
use crate::hooks::use_dashboard::use_dashboard;
use crate::hooks::use_periodic_refresh::{use_periodic_refresh, PeriodicRefreshConfig};
use crate::services::date_utils::today;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api_client = use_api_client();
    let dashboard = use_dashboard(&api_client);
    let config = use_context::<AppConfig>().unwrap_or_default();

    use_periodic_refresh(
        PeriodicRefreshConfig::every(config.refresh_interval_ms),
        dashboard.actions.refresh.clone(),
    );

    let state = &dashboard.state;
    let phase = DashboardPhase::resolve(state.data.is_some(), state.loading, state.error.as_deref());

    let content = match (phase, state.data.as_ref()) {
        (DashboardPhase::Ready { stale_error }, Some(data)) => html! {
            <>
                {if let Some(error) = stale_error {
                    html! { <div class="stale-banner">{format!("⚠ {} Showing the last loaded data.", error)}</div> }
                } else {
                    html! {}
                }}
                {render_summary(data, &dashboard.actions.select_debt)}
            </>
        },
        (DashboardPhase::Failed(error), _) => html! {
            <div class="error-panel">
                <div class="error-icon">{"⚠"}</div>
                <h2>{"Connection Error"}</h2>
                <p class="text-secondary">{error}</p>
            </div>
        },
        (DashboardPhase::Empty, _) => html! {},
        _ => html! {
            <div class="loading large">{"Loading dashboard..."}</div>
        },
    };

    html! {
        <div class="dashboard">
            <div class="page-header">
                <h1 class="page-title">{"Payment Dashboard"}</h1>
                <p class="text-secondary">{"Track your family's payment progress and upcoming installments"}</p>
            </div>

            {content}

            {if state.selected_debt_id.is_some() {
                html! {
                    <DebtDetailModal
                        debt={state.selected_debt.clone()}
                        loading={state.detail_loading}
                        error={state.detail_error.clone()}
                        on_close={dashboard.actions.close_detail.clone()}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_summary(data: &DashboardSummary, on_select_debt: &Callback<i64>) -> Html {
    let summary = &data.summary;
    let current = current_month(&data.monthly_breakdown);
    let upcoming = upcoming_months(&data.monthly_breakdown);
    let today = today();

    html! {
        <>
            <div class="summary-grid">
                <SummaryCard
                    icon="👛"
                    title="Total Outstanding"
                    value={format_currency(summary.total_outstanding)}
                    subtitle="Remaining to pay"
                    accent="text-yellow"
                />
                <SummaryCard
                    icon="✔"
                    title="Total Paid"
                    value={format_currency(summary.total_paid)}
                    subtitle={format!("{:.1}% complete", summary.progress_percentage)}
                    accent="text-success"
                />
                <SummaryCard
                    icon="📅"
                    title="Active Debts"
                    value={summary.active_debts_count.to_string()}
                    subtitle={format!("{} completed", summary.completed_debts_count)}
                    accent="text-info"
                />
                <SummaryCard
                    icon="📈"
                    title="Total Amount"
                    value={format_currency(summary.total_amount)}
                    subtitle="All debts combined"
                    accent="text-secondary"
                />
            </div>

            {if let Some(month) = current {
                html! {
                    <CurrentMonthPanel
                        month={month.clone()}
                        {today}
                        on_select_debt={on_select_debt.clone()}
                    />
                }
            } else {
                html! {}
            }}

            {if upcoming.is_empty() {
                html! {}
            } else {
                html! {
                    <section class="panel">
                        <h2 class="panel-title">{"Upcoming Payments"}</h2>
                        <div class="month-list">
                            {for upcoming.into_iter().map(|month| html! {
                                <MonthCard key={month.month.clone()} month={month.clone()} />
                            })}
                        </div>
                    </section>
                }
            }}

            <DebtProgressList
                debts={data.debt_breakdown.clone()}
                on_select_debt={on_select_debt.clone()}
            />
        </>
    }
}
