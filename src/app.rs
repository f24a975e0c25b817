// ============================================================================
// APP - Provider tree, layout and route switch
// ============================================================================

use yew::prelude::*;

use crate::components::{Footer, Header, ToastHost};
use crate::hooks::{SessionProvider, ToastProvider};
use crate::router::{use_router, Route, RouterProvider};
use crate::views::{
    CartView, DelivererMachinesView, HomeView, LoginView, MedicinesView, NotFoundView,
    ProfileOrdersView, ProfileView, RegisterView,
};

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeView /> },
        Route::Medicines => html! { <MedicinesView /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Cart => html! { <CartView /> },
        Route::Profile => html! { <ProfileView /> },
        Route::ProfileOrders => html! { <ProfileOrdersView /> },
        Route::DelivererMachines => html! { <DelivererMachinesView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(Layout)]
fn layout() -> Html {
    let router = use_router();

    html! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {switch(router.route)}
            </main>
            <Footer />
            <ToastHost />
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <RouterProvider>
            <SessionProvider>
                <ToastProvider>
                    <Layout />
                </ToastProvider>
            </SessionProvider>
        </RouterProvider>
    }
}
