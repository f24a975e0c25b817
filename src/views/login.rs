use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::language::use_translation;
use crate::hooks::{use_session, use_toast};
use crate::models::LoginForm;
use crate::router::{use_router, Link, Route};

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let tr = use_translation();
    let session = use_session();
    let toast = use_toast();
    let router = use_router();
    let form = use_state(LoginForm::default);
    let loading = use_state(|| false);

    let on_username = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                username: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                toast.error(tr.t("fill_all_fields_error"));
                return;
            }

            let credentials = (*form).clone();
            let session = session.clone();
            let toast = toast.clone();
            let router = router.clone();
            let loading = loading.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let api = session.api();
                match api.login(&credentials).await {
                    Ok(tokens) => {
                        let authorized = api.with_token(Some(tokens.access_token.clone()));
                        session.authorize(tokens.access_token, tokens.refresh_token);
                        match authorized.current_user().await {
                            Ok(user) => session.set_user(user),
                            Err(e) => log::warn!("⚠️ Signed in but profile not loaded: {}", e),
                        }
                        toast.success(tr.t("login_success"));
                        router.push(Route::Profile);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        toast.error(tr.t("login_fail"));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <section class="page page-auth">
            <div class="auth-card">
                <h1>{tr.t("login_title")}</h1>
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{tr.t("username_input")}</label>
                        <input
                            type="email"
                            id="username"
                            name="username"
                            value={form.username.clone()}
                            oninput={on_username}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{tr.t("password_input")}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value={form.password.clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        {if *loading { tr.t("loading") } else { tr.t("submit_btn") }}
                    </button>
                </form>
                <Link to={Route::Register} class={classes!("auth-switch")}>{tr.t("login_cta")}</Link>
            </div>
        </section>
    }
}
