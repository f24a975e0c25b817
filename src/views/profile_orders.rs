use yew::prelude::*;

use crate::components::Modal;
use crate::context::language::{use_translation, Translator};
use crate::hooks::{use_api_error, use_session};
use crate::models::{Order, OrderDetail, OrderSearch};
use crate::utils::format_datetime;

#[function_component(ProfileOrdersView)]
pub fn profile_orders_view() -> Html {
    let tr = use_translation();
    let session = use_session();
    let on_api_error = use_api_error();

    let orders = use_state(Vec::<Order>::new);
    let selected = use_state(|| None::<OrderDetail>);
    let loading = use_state(|| true);

    // Orders are keyed by user id; the profile is fetched first when missing
    {
        let orders = orders.clone();
        let loading = loading.clone();
        let session = session.clone();
        let on_api_error = on_api_error.clone();
        let user_id = session.user.as_ref().map(|u| u.id.clone());
        use_effect_with(user_id, move |user_id| {
            let user_id = user_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = session.api();
                match user_id {
                    Some(user_id) => {
                        match api.search_orders(&OrderSearch { user_id }).await {
                            Ok(list) => orders.set(list),
                            Err(e) => on_api_error.emit((e, "fetch_orders_error")),
                        }
                        loading.set(false);
                    }
                    None => match api.current_user().await {
                        Ok(user) => session.set_user(user),
                        Err(e) => {
                            loading.set(false);
                            on_api_error.emit((e, "user_data_fetch_fail"));
                        }
                    },
                }
            });
            || ()
        });
    }

    let open_order = |order_id: String| {
        let selected = selected.clone();
        let session = session.clone();
        let on_api_error = on_api_error.clone();
        Callback::from(move |_: MouseEvent| {
            let selected = selected.clone();
            let session = session.clone();
            let on_api_error = on_api_error.clone();
            let order_id = order_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.api().get_order(&order_id).await {
                    Ok(detail) => selected.set(Some(detail)),
                    Err(e) => on_api_error.emit((e, "get_order_by_id_error")),
                }
            });
        })
    };

    let close_detail = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section class="page page-orders">
            <h1>{tr.t("title_order_history")}</h1>

            if *loading {
                <p class="loading">{tr.t("loading")}</p>
            } else if orders.is_empty() {
                <p class="empty">{tr.t("no_orders_msg")}</p>
            } else {
                <table class="orders-table">
                    <thead>
                        <tr>
                            <th>{tr.t("id_label")}</th>
                            <th>{tr.t("status_label")}</th>
                            <th>{tr.t("price_label")}</th>
                            <th>{tr.t("created_at_label")}</th>
                            <th>{tr.t("updated_at_label")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for orders.iter().map(|order| html! {
                            <tr key={order.id.clone()} class="clickable" onclick={open_order(order.id.clone())}>
                                <td>{&order.id}</td>
                                <td>{tr.t(order.status.label_key())}</td>
                                <td>{order.price_label()}</td>
                                <td>{format_datetime(&order.created_at)}</td>
                                <td>{format_datetime(&order.updated_at)}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }

            if let Some(detail) = &*selected {
                <Modal title={tr.t("order_details_header").to_string()} on_close={close_detail}>
                    {order_detail(detail, tr)}
                </Modal>
            }
        </section>
    }
}

fn order_detail(detail: &OrderDetail, tr: Translator) -> Html {
    let order = &detail.order;
    let location = &detail.pickup_point.location;
    let arrival = detail
        .machine_pickup_point
        .as_ref()
        .map(|stop| format_datetime(&stop.arrival_at))
        .unwrap_or_else(|| "N/A".to_string());
    let machine = detail
        .machine
        .as_ref()
        .map(|m| m.name.clone())
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="order-detail">
            <p><strong>{tr.t("id_label")}{": "}</strong>{&order.id}</p>
            <p><strong>{tr.t("status_label")}{": "}</strong>{tr.t(order.status.label_key())}</p>
            <p><strong>{tr.t("price_label")}{": "}</strong>{order.price_label()}</p>
            <p><strong>{tr.t("created_at_label")}{": "}</strong>{format_datetime(&order.created_at)}</p>
            <p><strong>{tr.t("updated_at_label")}{": "}</strong>{format_datetime(&order.updated_at)}</p>

            <p><strong>{tr.t("medicines_label")}{":"}</strong></p>
            <ul>
                { for detail.order_medicines.iter().map(|line| html! {
                    <li key={line.id.clone()}>
                        {format!(
                            "{}: {}, {}: {}",
                            tr.t("name_label"),
                            line.medicine.as_ref().map(|m| m.name.as_str()).unwrap_or("?"),
                            tr.t("count_label"),
                            line.medicine_count,
                        )}
                    </li>
                }) }
            </ul>

            <p><strong>{tr.t("pickup_point_label")}{":"}</strong></p>
            <p class="indent">{format!("{}: {}", tr.t("country_label"), location.country.clone().unwrap_or_default())}</p>
            <p class="indent">{format!("{}: {}", tr.t("address_label"), location.address.clone().unwrap_or_default())}</p>

            <p><strong>{tr.t("machine_label")}{": "}</strong>{machine}</p>
            <p><strong>{tr.t("arrival_at_label")}{": "}</strong>{arrival}</p>
        </div>
    }
}
