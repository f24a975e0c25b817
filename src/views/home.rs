use yew::prelude::*;

use crate::context::language::use_translation;
use crate::hooks::use_session;
use crate::models::UserRole;
use crate::router::{Link, Route};

fn primary_button() -> Classes {
    classes!("btn", "btn-primary")
}

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let tr = use_translation();
    let session = use_session();

    let cta = match (session.is_signed_in, session.role()) {
        (false, _) => html! {
            <Link to={Route::Login} class={primary_button()}>{tr.t("login_header")}</Link>
        },
        (true, Some(UserRole::Deliverer)) => html! {
            <Link to={Route::DelivererMachines} class={primary_button()}>{tr.t("machines_header")}</Link>
        },
        (true, _) => html! {
            <Link to={Route::Medicines} class={primary_button()}>{tr.t("medicine_header")}</Link>
        },
    };

    html! {
        <section class="page page-home">
            <h1>{tr.t("home_title")}</h1>
            <p>{tr.t("home_subtitle")}</p>
            {cta}
        </section>
    }
}
