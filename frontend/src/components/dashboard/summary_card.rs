use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub value: AttrValue,
    pub subtitle: AttrValue,
    /// Text color class for the icon, e.g. "text-yellow"
    pub accent: AttrValue,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div class="summary-card">
            <div class="summary-card-header">
                <span class={classes!("summary-card-icon", props.accent.to_string())}>{props.icon.to_string()}</span>
                <h3 class="summary-card-title">{props.title.to_string()}</h3>
            </div>
            <div class="summary-card-value">{props.value.to_string()}</div>
            <div class="summary-card-subtitle">{props.subtitle.to_string()}</div>
        </div>
    }
}
