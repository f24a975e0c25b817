use yew::prelude::*;

use crate::context::language::use_translation;

#[function_component(Footer)]
pub fn footer() -> Html {
    let tr = use_translation();
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="app-footer">
            <p>{format!("© {} {}", year, tr.t("footer_text"))}</p>
        </footer>
    }
}
