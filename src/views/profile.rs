use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Modal;
use crate::context::language::use_translation;
use crate::hooks::{use_api_error, use_session, use_toast};
use crate::models::user::parse_birthdate;
use crate::models::{PasswordChange, User, UserUpdate};
use crate::router::{use_router, Route};

#[derive(Clone, Copy)]
enum ProfileField {
    FirstName,
    LastName,
    Email,
    Birthdate,
}

fn edit_user(user: &mut User, field: ProfileField, value: String) {
    match field {
        ProfileField::FirstName => user.first_name = value,
        ProfileField::LastName => user.last_name = value,
        ProfileField::Email => user.email = value,
        ProfileField::Birthdate => user.birthdate = parse_birthdate(&value),
    }
}

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let tr = use_translation();
    let session = use_session();
    let toast = use_toast();
    let router = use_router();
    let on_api_error = use_api_error();

    let editing = use_state(|| false);
    // Form copy of the user while editing
    let draft = use_state(|| session.user.clone());
    let password_open = use_state(|| false);
    let password = use_state(PasswordChange::default);

    // Any failure here sends the visitor to Login; a 401 also signs out
    {
        let session = session.clone();
        let router = router.clone();
        let draft = draft.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match session.api().current_user().await {
                    Ok(user) => {
                        draft.set(Some(user.clone()));
                        session.set_user(user);
                    }
                    Err(e) => {
                        let unauthorized = e.is_unauthorized();
                        on_api_error.emit((e, "user_data_fetch_fail"));
                        if !unauthorized {
                            router.push(Route::Login);
                        }
                    }
                }
            });
            || ()
        });
    }

    let on_field = |field: ProfileField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(mut user) = (*draft).clone() {
                edit_user(&mut user, field, input.value());
                draft.set(Some(user));
            }
        })
    };

    let on_toggle_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if *editing {
                // Cancel drops unsaved edits
                draft.set(session.user.clone());
            }
            editing.set(!*editing);
        })
    };

    let on_save = {
        let draft = draft.clone();
        let editing = editing.clone();
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(user) = (*draft).clone() else {
                return;
            };
            let session = session.clone();
            let toast = toast.clone();
            let editing = editing.clone();
            let draft = draft.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.api().update_current_user(&UserUpdate::from_user(&user)).await {
                    Ok(updated) => {
                        draft.set(Some(updated.clone()));
                        session.set_user(updated);
                        editing.set(false);
                        toast.success(tr.t("user_update_success"));
                    }
                    Err(e) => {
                        log::error!("❌ user_update_error: {}", e);
                        toast.error(tr.t("user_update_error"));
                    }
                }
            });
        })
    };

    let on_logout = {
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            session.sign_out();
            router.push(Route::Login);
            toast.success(tr.t("logout_success"));
        })
    };

    let open_password = {
        let password_open = password_open.clone();
        let password = password.clone();
        Callback::from(move |_: MouseEvent| {
            password.set(PasswordChange::default());
            password_open.set(true);
        })
    };
    let close_password = {
        let password_open = password_open.clone();
        Callback::from(move |_: ()| password_open.set(false))
    };

    let on_new_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(PasswordChange {
                new_password: input.value(),
                ..(*password).clone()
            });
        })
    };
    let on_confirm_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(PasswordChange {
                new_password_confirm: input.value(),
                ..(*password).clone()
            });
        })
    };

    let on_change_password = {
        let password = password.clone();
        let password_open = password_open.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if !password.matches() {
                toast.error(tr.t("pwds_not_matching_error"));
                return;
            }
            let update = UserUpdate::password(password.new_password.clone());
            let session = session.clone();
            let toast = toast.clone();
            let password_open = password_open.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.api().update_current_user(&update).await {
                    Ok(_) => {
                        toast.success(tr.t("pwd_change_success"));
                        password_open.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ pwd_change_error: {}", e);
                        toast.error(tr.t("pwd_change_error"));
                    }
                }
            });
        })
    };

    let Some(user) = (*draft).clone() else {
        return html! {
            <section class="page page-profile">
                <p class="loading">{tr.t("loading")}</p>
            </section>
        };
    };

    html! {
        <section class="page page-profile">
            <div class="profile-card">
                <h1>{tr.t("profile_title")}</h1>

                <div class="form-group">
                    <label for="first_name">{tr.t("firstname_input")}</label>
                    <input type="text" id="first_name" value={user.first_name.clone()}
                        disabled={!*editing} oninput={on_field(ProfileField::FirstName)} />
                </div>
                <div class="form-group">
                    <label for="last_name">{tr.t("lastname_input")}</label>
                    <input type="text" id="last_name" value={user.last_name.clone()}
                        disabled={!*editing} oninput={on_field(ProfileField::LastName)} />
                </div>
                <div class="form-group">
                    <label for="email">{tr.t("email_input")}</label>
                    <input type="email" id="email" value={user.email.clone()}
                        disabled={!*editing} oninput={on_field(ProfileField::Email)} />
                </div>
                <div class="form-group">
                    <label for="birthdate">{tr.t("birthdate_input")}</label>
                    <input type="date" id="birthdate" value={user.birthdate_input_value()}
                        disabled={!*editing} oninput={on_field(ProfileField::Birthdate)} />
                </div>
                <div class="form-group">
                    <label>{tr.t("role_input")}</label>
                    <p class="readonly">{tr.t(user.role.label_key())}</p>
                </div>

                <div class="profile-actions">
                    <button class="btn" onclick={on_toggle_edit}>
                        {if *editing { tr.t("cancel_btn") } else { tr.t("edit_profile_btn") }}
                    </button>
                    if *editing {
                        <button class="btn btn-primary" onclick={on_save}>{tr.t("save_btn")}</button>
                    }
                    <button class="btn" onclick={open_password}>{tr.t("change_pwd_btn")}</button>
                    <button class="btn btn-danger" onclick={on_logout}>{tr.t("logout_btn")}</button>
                </div>
            </div>

            if *password_open {
                <Modal
                    title={tr.t("change_pwd_header").to_string()}
                    on_close={close_password.clone()}
                    footer={html! {
                        <>
                            <button class="btn" onclick={close_password.reform(|_: MouseEvent| ())}>{tr.t("cancel_btn")}</button>
                            <button class="btn btn-primary" onclick={on_change_password}>{tr.t("save_btn")}</button>
                        </>
                    }}
                >
                    <div class="form-group">
                        <label for="new_password">{tr.t("new_pwd_input")}</label>
                        <input type="password" id="new_password" value={password.new_password.clone()}
                            oninput={on_new_password} />
                    </div>
                    <div class="form-group">
                        <label for="new_password_confirm">{tr.t("new_pwd_confirmation_input")}</label>
                        <input type="password" id="new_password_confirm" value={password.new_password_confirm.clone()}
                            oninput={on_confirm_password} />
                    </div>
                </Modal>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn edits_touch_only_the_named_field() {
        let mut user = User {
            id: "u-1".to_string(),
            first_name: "Olena".to_string(),
            last_name: "Koval".to_string(),
            email: "olena@example.com".to_string(),
            birthdate: None,
            role: UserRole::Customer,
        };

        edit_user(&mut user, ProfileField::LastName, "Shevchenko".to_string());
        edit_user(&mut user, ProfileField::Birthdate, "2001-05-17".to_string());

        assert_eq!(user.first_name, "Olena");
        assert_eq!(user.last_name, "Shevchenko");
        assert_eq!(user.birthdate_input_value(), "2001-05-17");
    }
}
