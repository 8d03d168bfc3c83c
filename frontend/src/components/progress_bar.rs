use shared::breakdown::bar_width;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Progress in percent; values outside 0..=100 are clamped
    pub percent: f64,
    #[prop_or_default]
    pub complete: bool,
    #[prop_or_default]
    pub slim: bool,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let fill_class = if props.complete {
        "progress-fill complete"
    } else {
        "progress-fill"
    };

    html! {
        <div class={classes!("progress-track", props.slim.then_some("slim"))}>
            <div
                class={fill_class}
                style={format!("width: {:.1}%", bar_width(props.percent))}
            />
        </div>
    }
}
