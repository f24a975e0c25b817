// ============================================================================
// ROUTER - Path <-> Route mapping plus a history-backed navigation context
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Medicines,
    Login,
    Register,
    Cart,
    Profile,
    ProfileOrders,
    DelivererMachines,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Medicines => "/medicines",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Cart => "/cart",
            Route::Profile => "/profile",
            Route::ProfileOrders => "/profile/orders",
            Route::DelivererMachines => "/deliverer/machines",
            Route::NotFound => "/404",
        }
    }

    /// Unknown paths resolve to `NotFound`; query strings and trailing
    /// slashes are ignored
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        match path {
            "" | "/home" => Route::Home,
            "/medicines" => Route::Medicines,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/cart" => Route::Cart,
            "/profile" => Route::Profile,
            "/profile/orders" => Route::ProfileOrders,
            "/deliverer/machines" => Route::DelivererMachines,
            _ => Route::NotFound,
        }
    }

    fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Home)
    }
}

/// Current route and a way to change it, shared through context
#[derive(Clone, PartialEq)]
pub struct RouterHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

impl RouterHandle {
    pub fn push(&self, route: Route) {
        self.navigate.emit(route);
    }
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    pub children: Children,
}

#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    let route = use_state(Route::current);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(Route::current());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = &window {
                if let Err(e) = win.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
                    log::error!("❌ Could not listen to popstate: {:?}", e);
                }
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(next.path())) {
                    log::warn!("⚠️ history.pushState failed: {:?}", e);
                }
            }
            log::debug!("🧭 Navigate to {}", next.path());
            route.set(next);
        })
    };

    let handle = RouterHandle {
        route: *route,
        navigate,
    };

    html! {
        <ContextProvider<RouterHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<RouterHandle>>
    }
}

#[hook]
pub fn use_router() -> RouterHandle {
    use_context::<RouterHandle>().expect("use_router must be called inside RouterProvider")
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    pub children: Children,
}

/// Anchor that navigates without a page reload
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let router = use_router();
    let onclick = {
        let to = props.to;
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            router.push(to);
            if let Some(cb) = &extra {
                cb.emit(());
            }
        })
    };

    html! {
        <a href={props.to.path()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_home_are_home() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/home"), Route::Home);
    }

    #[test]
    fn known_paths_round_trip() {
        for route in [
            Route::Home,
            Route::Medicines,
            Route::Login,
            Route::Register,
            Route::Cart,
            Route::Profile,
            Route::ProfileOrders,
            Route::DelivererMachines,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn query_and_trailing_slash_are_ignored() {
        assert_eq!(Route::from_path("/profile/orders/"), Route::ProfileOrders);
        assert_eq!(Route::from_path("/medicines?page=2"), Route::Medicines);
        assert_eq!(Route::from_path("/cart#top"), Route::Cart);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
        assert_eq!(Route::from_path("/404"), Route::NotFound);
        assert_eq!(Route::from_path("/profile/orders/42"), Route::NotFound);
    }
}
