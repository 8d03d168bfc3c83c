use yew::prelude::*;

#[function_component(ViewerPage)]
pub fn viewer_page() -> Html {
    html! {
        <div>
            <h1 class="page-title">{"Viewer Mode"}</h1>
            <div class="panel centered">
                <p class="text-secondary">{"Viewer features coming soon..."}</p>
                <p class="text-secondary small">
                    {"This will include: View payment list, mark installments as paid"}
                </p>
            </div>
        </div>
    }
}
