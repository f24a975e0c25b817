use yew::prelude::*;

use crate::context::language::use_translation;
use crate::router::{Link, Route};

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    let tr = use_translation();

    html! {
        <section class="page page-not-found">
            <h1>{"404"}</h1>
            <p>{tr.t("not_found_title")}</p>
            <Link to={Route::Home} class={classes!("btn")}>{tr.t("back_home_btn")}</Link>
        </section>
    }
}
