use yew::prelude::*;

use crate::components::LanguageMenu;
use crate::context::language::{use_translation, Translator};
use crate::hooks::use_session;
use crate::navigation::{visible_items, NavigationItem, NAVIGATION_ITEMS};
use crate::router::{use_router, Link, Route};

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let router = use_router();
    let tr = use_translation();
    let mobile_open = use_state(|| false);

    let items = visible_items(NAVIGATION_ITEMS, &session);

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };
    let close_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: ()| mobile_open.set(false))
    };

    html! {
        <header class="app-header">
            <Link to={Route::Home} class={classes!("logo")}>{tr.t("app_title")}</Link>

            <nav class="nav-desktop">
                { for items.iter().map(|item| nav_entry(item, router.route, tr, None)) }
            </nav>

            <div class="header-actions">
                <LanguageMenu />
                <button class="btn-menu" aria-label={tr.t("menu_btn").to_string()} onclick={toggle_mobile}>
                    {if *mobile_open { "✕" } else { "☰" }}
                </button>
            </div>

            if *mobile_open {
                <nav class="nav-mobile">
                    { for items.iter().map(|item| nav_entry(item, router.route, tr, Some(close_mobile.clone()))) }
                </nav>
            }
        </header>
    }
}

/// One menu entry; parents render their children underneath unfiltered
fn nav_entry(item: &NavigationItem, current: Route, tr: Translator, on_pick: Option<Callback<()>>) -> Html {
    let label = tr.t(item.label).to_string();

    if item.has_children() {
        return html! {
            <div class="nav-group">
                <span class="nav-group-label">{label}</span>
                <div class="nav-group-items">
                    { for item.children.iter().map(|child| nav_entry(child, current, tr, on_pick.clone())) }
                </div>
            </div>
        };
    }

    match item.href {
        Some(route) => {
            let class = classes!("nav-link", (route == current).then_some("active"));
            html! {
                <Link to={route} {class} onclick={on_pick}>{label}</Link>
            }
        }
        None => html! { <span class="nav-link">{label}</span> },
    }
}
