use yew::prelude::*;

mod api;
mod models;
mod rules;
mod state;

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html!(<rules::RuleManagerView />)
}

fn main() {
    yew::Renderer::<App>::new().render();
}
