use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{MedicineCard, Modal};
use crate::config::CONFIG;
use crate::context::language::use_translation;
use crate::hooks::{use_api_error, use_session, use_toast};
use crate::models::{Medicine, MedicineSearch, Pagination};

#[function_component(MedicinesView)]
pub fn medicines_view() -> Html {
    let tr = use_translation();
    let session = use_session();
    let toast = use_toast();
    let on_api_error = use_api_error();

    // `draft` follows the form; `query` is what was last sent
    let draft = use_state(|| MedicineSearch::new(CONFIG.page_size));
    let query = use_state(|| MedicineSearch::new(CONFIG.page_size));
    let medicines = use_state(Vec::<Medicine>::new);
    let loading = use_state(|| false);
    let selected = use_state(|| None::<Medicine>);
    let quantity = use_state(|| 1u32);

    {
        let medicines = medicines.clone();
        let loading = loading.clone();
        let session = session.clone();
        use_effect_with((*query).clone(), move |search| {
            let search = search.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match session.api().search_medicines(&search).await {
                    Ok(page) => medicines.set(page),
                    Err(e) => on_api_error.emit((e, "fetch_medicines_error")),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_substring = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set((*draft).clone().with_substring(&input.value()));
        })
    };

    let on_prescription = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set((*draft).clone().with_prescription_filter(&select.value()));
        })
    };

    let on_order = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set((*draft).clone().with_descending(select.value() == "true"));
        })
    };

    let on_search = {
        let draft = draft.clone();
        let query = query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*draft).clone();
            next.pagination = Pagination::first(next.pagination.limit);
            draft.set(next.clone());
            query.set(next);
        })
    };

    let go_to_page = |forward: bool| {
        let draft = draft.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let pagination = if forward {
                query.pagination.next()
            } else {
                query.pagination.previous()
            };
            let mut next = (*query).clone();
            next.pagination = pagination;
            let mut form = (*draft).clone();
            form.pagination = pagination;
            draft.set(form);
            query.set(next);
        })
    };

    let on_pick = {
        let selected = selected.clone();
        let quantity = quantity.clone();
        Callback::from(move |medicine: Medicine| {
            quantity.set(1);
            selected.set(Some(medicine));
        })
    };

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            quantity.set(input.value().parse::<u32>().unwrap_or(1).max(1));
        })
    };

    let on_add = {
        let selected = selected.clone();
        let quantity = quantity.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(medicine) = (*selected).clone() {
                session.add_to_cart(medicine, *quantity);
                toast.success(tr.t("add_cart_medicine_success"));
                selected.set(None);
            }
        })
    };

    let prescription_value = match draft.simple_filters.prescription_needed {
        Some(true) => "true",
        Some(false) => "false",
        None => "any",
    };

    html! {
        <section class="page page-medicines">
            <h1>{tr.t("title_medicines")}</h1>

            <form class="filters" onsubmit={on_search}>
                <div class="form-group">
                    <label for="search_substring">{tr.t("search_substring_input")}</label>
                    <input
                        type="text"
                        id="search_substring"
                        value={draft.search_substring.clone().unwrap_or_default()}
                        oninput={on_substring}
                    />
                </div>
                <div class="form-group">
                    <label for="prescription_needed">{tr.t("prescriptions_needed_label")}</label>
                    <select id="prescription_needed" onchange={on_prescription}>
                        <option value="true" selected={prescription_value == "true"}>{tr.t("y")}</option>
                        <option value="false" selected={prescription_value == "false"}>{tr.t("n")}</option>
                        <option value="any" selected={prescription_value == "any"}>{tr.t("any")}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="order_by">{tr.t("order_by_name_label")}</label>
                    <select id="order_by" onchange={on_order}>
                        <option value="false" selected={!draft.order_by.desc}>{tr.t("order_by_ascending")}</option>
                        <option value="true" selected={draft.order_by.desc}>{tr.t("order_by_descending")}</option>
                    </select>
                </div>
                <button type="submit" class="btn btn-primary">{tr.t("search_btn")}</button>
            </form>

            if *loading {
                <p class="loading">{tr.t("loading")}</p>
            } else if medicines.is_empty() {
                <p class="empty">{tr.t("no_medicines_msg")}</p>
            } else {
                <div class="medicine-grid">
                    { for medicines.iter().map(|medicine| html! {
                        <MedicineCard key={medicine.id.clone()} medicine={medicine.clone()} on_add={on_pick.clone()} />
                    }) }
                </div>
            }

            <div class="pagination">
                <button class="btn" disabled={!query.pagination.has_previous()} onclick={go_to_page(false)}>
                    {tr.t("previous_btn")}
                </button>
                <button class="btn" disabled={!query.pagination.has_next(medicines.len())} onclick={go_to_page(true)}>
                    {tr.t("next_btn")}
                </button>
            </div>

            if let Some(medicine) = &*selected {
                <Modal
                    title={tr.t("title_add_to_cart").to_string()}
                    on_close={close_modal.clone()}
                    footer={html! {
                        <>
                            <button class="btn" onclick={close_modal.reform(|_: MouseEvent| ())}>{tr.t("cancel_btn")}</button>
                            <button class="btn btn-primary" onclick={on_add}>{tr.t("add_btn")}</button>
                        </>
                    }}
                >
                    <p>{&medicine.name}</p>
                    <label for="quantity">{tr.t("quantity_label")}</label>
                    <input type="number" id="quantity" min="1" value={quantity.to_string()} oninput={on_quantity} />
                </Modal>
            }
        </section>
    }
}
