// ============================================================================
// CART VIEW - lines, delivery selection and checkout
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Modal;
use crate::config::CONFIG;
use crate::context::language::use_translation;
use crate::hooks::{use_api_error, use_session, use_toast};
use crate::models::{CreateOrder, Machine, MachineSearch, PickupPoint, PickupPointSearch};
use crate::router::{use_router, Route};
use crate::utils::format_price;

#[derive(Clone, Copy, PartialEq)]
enum Chooser {
    PickupPoint,
    Machine,
}

#[function_component(CartView)]
pub fn cart_view() -> Html {
    let tr = use_translation();
    let session = use_session();
    let toast = use_toast();
    let router = use_router();
    let on_api_error = use_api_error();

    let pickup_points = use_state(Vec::<PickupPoint>::new);
    let machines = use_state(Vec::<Machine>::new);
    let chooser = use_state(|| None::<Chooser>);
    let submitting = use_state(|| false);

    {
        let pickup_points = pickup_points.clone();
        let machines = machines.clone();
        let session = session.clone();
        let on_api_error = on_api_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = session.api();
                match api.search_pickup_points(&PickupPointSearch::default()).await {
                    Ok(points) => pickup_points.set(points),
                    Err(e) => on_api_error.emit((e, "pickup_points_fetch_error")),
                }
                match api.search_machines(&MachineSearch::all(CONFIG.page_size)).await {
                    Ok(list) => machines.set(list),
                    Err(e) => on_api_error.emit((e, "fetch_machines_error")),
                }
            });
            || ()
        });
    }

    let cart = &session.cart;
    let selected_point = cart
        .pickup_point_id
        .as_deref()
        .and_then(|id| pickup_points.iter().find(|p| p.id == id));
    let selected_machine = cart
        .machine_id
        .as_deref()
        .and_then(|id| machines.iter().find(|m| m.id == id));

    let open_chooser = |which: Chooser| {
        let chooser = chooser.clone();
        Callback::from(move |_: MouseEvent| chooser.set(Some(which)))
    };
    let close_chooser = {
        let chooser = chooser.clone();
        Callback::from(move |_: ()| chooser.set(None))
    };

    let on_count = |medicine_id: String| {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(count) = input.value().parse::<u32>() {
                session.change_cart_count(&medicine_id, count);
            }
        })
    };

    let on_delete = |medicine_id: String| {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.delete_from_cart(&medicine_id))
    };

    let on_pick_point = |point_id: String| {
        let session = session.clone();
        let chooser = chooser.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            session.select_pickup_point(Some(point_id.clone()));
            chooser.set(None);
            toast.success(tr.t("select_pickup_point_success"));
        })
    };

    let on_pick_machine = |machine_id: Option<String>| {
        let session = session.clone();
        let chooser = chooser.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let chosen = machine_id.is_some();
            session.select_machine(machine_id.clone());
            chooser.set(None);
            if chosen {
                toast.success(tr.t("choose_machine_success"));
            }
        })
    };

    let on_create_order = {
        let session = session.clone();
        let toast = toast.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: MouseEvent| {
            if session.cart.pickup_point_id.is_none() {
                toast.error(tr.t("unselected_pickup_point_error"));
                return;
            }

            let session = session.clone();
            let toast = toast.clone();
            let router = router.clone();
            let on_api_error = on_api_error.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let api = session.api();
                let user_id = match &session.user {
                    Some(user) => Ok(user.id.clone()),
                    None => api.current_user().await.map(|user| {
                        let id = user.id.clone();
                        session.set_user(user);
                        id
                    }),
                };

                let result = match user_id {
                    Ok(user_id) => match CreateOrder::from_cart(&user_id, &session.cart) {
                        Some(order) => api.create_order(&order).await.map(Some),
                        None => Ok(None),
                    },
                    Err(e) => Err(e),
                };

                match result {
                    Ok(Some(_)) => {
                        toast.success(tr.t("create_order_success"));
                        session.clear_cart();
                        router.push(Route::ProfileOrders);
                    }
                    Ok(None) => toast.error(tr.t("unselected_pickup_point_error")),
                    Err(e) => on_api_error.emit((e, "create_order_error")),
                }
                submitting.set(false);
            });
        })
    };

    let chooser_modal = match *chooser {
        Some(Chooser::PickupPoint) => html! {
            <Modal title={tr.t("choose_pickup_point_header").to_string()} on_close={close_chooser.clone()}>
                <div class="choice-grid">
                    { for pickup_points.iter().filter(|p| p.is_selectable()).map(|point| html! {
                        <div key={point.id.clone()} class="choice-card" onclick={on_pick_point(point.id.clone())}>
                            <p>{point.location.country.clone().unwrap_or_default()}</p>
                            <p>{point.location.address.clone().unwrap_or_default()}</p>
                        </div>
                    }) }
                </div>
            </Modal>
        },
        Some(Chooser::Machine) => html! {
            <Modal
                title={tr.t("choose_machine_header").to_string()}
                on_close={close_chooser.clone()}
                footer={html! {
                    <button class="btn" onclick={on_pick_machine(None)}>{tr.t("clear_selection_btn")}</button>
                }}
            >
                <div class="choice-grid">
                    { for machines.iter().map(|machine| html! {
                        <div key={machine.id.clone()} class="choice-card" onclick={on_pick_machine(Some(machine.id.clone()))}>
                            <p>{&machine.name}</p>
                        </div>
                    }) }
                </div>
            </Modal>
        },
        None => html! {},
    };

    html! {
        <section class="page page-cart">
            <h1>{tr.t("title_cart")}</h1>

            <table class="cart-table">
                <thead>
                    <tr>
                        <th>{tr.t("cart_column_name")}</th>
                        <th>{format!("{} ({})", tr.t("cart_column_price"), cart.payment_currency)}</th>
                        <th>{tr.t("cart_column_count")}</th>
                        <th>{tr.t("cart_column_actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    if cart.is_empty() {
                        <tr><td colspan="4">{tr.t("cart_no_items_msg")}</td></tr>
                    } else {
                        { for cart.medicines.iter().map(|line| html! {
                            <tr key={line.id().to_string()}>
                                <td>{&line.medicine.name}</td>
                                <td>{format!("{:.2}", line.medicine.price)}</td>
                                <td>
                                    <input type="number" min="1" value={line.count.to_string()}
                                        oninput={on_count(line.id().to_string())} />
                                </td>
                                <td>
                                    <button class="btn btn-danger" onclick={on_delete(line.id().to_string())}>
                                        {tr.t("delete_btn")}
                                    </button>
                                </td>
                            </tr>
                        }) }
                    }
                </tbody>
            </table>

            <div class="cart-selection">
                <span>
                    {tr.t("cart_pickup_point_text")}{" "}
                    {selected_point.map(|p| p.location.display()).unwrap_or_default()}
                </span>
                <button class="btn" onclick={open_chooser(Chooser::PickupPoint)}>{tr.t("change_btn")}</button>
            </div>
            <div class="cart-selection">
                <span>
                    {tr.t("cart_machine_text")}{" "}
                    {selected_machine.map(|m| m.name.clone()).unwrap_or_default()}
                </span>
                <button class="btn" onclick={open_chooser(Chooser::Machine)}>{tr.t("change_btn")}</button>
            </div>

            <p class="cart-total">
                {tr.t("cart_total_price_text")}{" "}
                {format_price(cart.total_price(), cart.payment_currency)}
            </p>

            <button
                class="btn btn-primary btn-block"
                disabled={cart.is_empty() || *submitting}
                onclick={on_create_order}
            >
                {if *submitting { tr.t("loading") } else { tr.t("create_order_btn") }}
            </button>

            {chooser_modal}
        </section>
    }
}
