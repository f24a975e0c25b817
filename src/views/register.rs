use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::language::use_translation;
use crate::hooks::{use_session, use_toast};
use crate::models::user::parse_birthdate;
use crate::models::RegisterRequest;
use crate::router::{use_router, Route};

#[derive(Clone, Copy)]
enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    Birthdate,
}

fn apply_field(request: &mut RegisterRequest, field: Field, value: String) {
    match field {
        Field::FirstName => request.first_name = value,
        Field::LastName => request.last_name = value,
        Field::Email => request.email = value,
        Field::Password => request.password = value,
        Field::Birthdate => request.birthdate = parse_birthdate(&value),
    }
}

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let tr = use_translation();
    let session = use_session();
    let toast = use_toast();
    let router = use_router();
    let request = use_state(RegisterRequest::default);
    let loading = use_state(|| false);

    let on_field = |field: Field| {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            apply_field(&mut next, field, input.value());
            request.set(next);
        })
    };

    let on_deliverer = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.set_deliverer(input.checked());
            request.set(next);
        })
    };

    let on_submit = {
        let request = request.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let body = (*request).clone();
            let session = session.clone();
            let toast = toast.clone();
            let router = router.clone();
            let loading = loading.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let api = session.api();
                let result = match api.register(&body).await {
                    Ok(user) => api.login(&body.login_form()).await.map(|tokens| (user, tokens)),
                    Err(e) => Err(e),
                };
                match result {
                    Ok((user, tokens)) => {
                        log::info!("✅ Registered {} as {:?}", user.email, user.role);
                        session.authorize(tokens.access_token, tokens.refresh_token);
                        session.set_user(user);
                        toast.success(tr.t("register_success"));
                        router.push(Route::Profile);
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        toast.error(tr.t("register_fail"));
                    }
                }
                loading.set(false);
            });
        })
    };

    let birthdate_value = request
        .birthdate
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    html! {
        <section class="page page-auth">
            <div class="auth-card">
                <h1>{tr.t("register_title")}</h1>
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="first_name">{tr.t("firstname_input")}</label>
                        <input type="text" id="first_name" value={request.first_name.clone()}
                            oninput={on_field(Field::FirstName)} required=true />
                    </div>
                    <div class="form-group">
                        <label for="last_name">{tr.t("lastname_input")}</label>
                        <input type="text" id="last_name" value={request.last_name.clone()}
                            oninput={on_field(Field::LastName)} required=true />
                    </div>
                    <div class="form-group">
                        <label for="email">{tr.t("email_input")}</label>
                        <input type="email" id="email" value={request.email.clone()}
                            oninput={on_field(Field::Email)} required=true />
                    </div>
                    <div class="form-group">
                        <label for="password">{tr.t("password_input")}</label>
                        <input type="password" id="password" value={request.password.clone()}
                            oninput={on_field(Field::Password)} required=true />
                    </div>
                    <div class="form-group">
                        <label for="birthdate">{tr.t("birthdate_input")}</label>
                        <input type="date" id="birthdate" value={birthdate_value}
                            oninput={on_field(Field::Birthdate)} />
                    </div>
                    <label class="form-switch">
                        <input type="checkbox" checked={request.is_deliverer()} onchange={on_deliverer} />
                        <span>{tr.t("is_deliverer_input")}</span>
                    </label>
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        {if *loading { tr.t("loading") } else { tr.t("register_header") }}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthdate_field_parses_date_input() {
        let mut request = RegisterRequest::default();
        apply_field(&mut request, Field::Birthdate, "1999-12-31".to_string());
        assert_eq!(
            request.birthdate.map(|d| d.format("%Y-%m-%d").to_string()).as_deref(),
            Some("1999-12-31")
        );

        apply_field(&mut request, Field::Birthdate, String::new());
        assert_eq!(request.birthdate, None);
    }
}
