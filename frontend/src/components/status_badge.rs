use shared::InstallmentStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: InstallmentStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let icon = match props.status {
        InstallmentStatus::Paid => "✔",
        InstallmentStatus::Overdue => "⚠",
        InstallmentStatus::Pending => "⏱",
    };

    html! {
        <span class={classes!("status-badge", props.status.css_class())}>
            <span class="status-icon">{icon}</span>
            {props.status.label()}
        </span>
    }
}
