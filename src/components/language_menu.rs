use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::context::language::{use_translation, Language};
use crate::hooks::use_session;

#[function_component(LanguageMenu)]
pub fn language_menu() -> Html {
    let session = use_session();
    let tr = use_translation();

    let onchange = {
        let session = session.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let language = Language::from_code(&select.value());
            log::info!("🌐 Language -> {}", language.code());
            session.set_language(language.code());
        })
    };

    html! {
        <label class="language-menu">
            <span class="visually-hidden">{tr.t("language_label")}</span>
            <select {onchange}>
                { for Language::ALL.iter().map(|language| html! {
                    <option
                        value={language.code()}
                        selected={*language == tr.language}
                    >
                        {language.native_name()}
                    </option>
                }) }
            </select>
        </label>
    }
}
