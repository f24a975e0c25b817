use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::language::use_translation;
use crate::hooks::{use_api_error, use_session};
use crate::models::{Machine, MachineSearch, MachineStatus};
use crate::utils::format_datetime;

fn status_class(status: MachineStatus) -> &'static str {
    match status {
        MachineStatus::Registered => "status status-ok",
        MachineStatus::Unregistered => "status status-idle",
        MachineStatus::Dysfunctional => "status status-error",
    }
}

#[function_component(DelivererMachinesView)]
pub fn deliverer_machines_view() -> Html {
    let tr = use_translation();
    let session = use_session();
    let on_api_error = use_api_error();
    let machines = use_state(Vec::<Machine>::new);
    let loading = use_state(|| true);

    {
        let machines = machines.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match session.api().search_machines(&MachineSearch::all(CONFIG.page_size)).await {
                    Ok(list) => {
                        log::info!("🤖 {} machines loaded", list.len());
                        machines.set(list);
                    }
                    Err(e) => on_api_error.emit((e, "fetch_machines_error")),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <section class="page page-machines">
            <h1>{tr.t("title_machines")}</h1>
            if *loading {
                <p class="loading">{tr.t("loading")}</p>
            } else if machines.is_empty() {
                <p class="empty">{tr.t("no_machines_msg")}</p>
            } else {
                <div class="machine-grid">
                    { for machines.iter().map(|machine| html! {
                        <div key={machine.id.clone()} class="machine-card">
                            <h3>{&machine.name}</h3>
                            <span class={status_class(machine.status)}>{tr.t(machine.status.label_key())}</span>
                            <p>{format!("MAC: {}", machine.mac)}</p>
                            <p>
                                {format!("{}: {}", tr.t("location_label"),
                                    machine.location.display().unwrap_or_else(|| "N/A".to_string()))}
                            </p>
                            if let Some(date) = &machine.last_maintenance_date {
                                <p>{format!("{}: {}", tr.t("last_maintenance_label"), format_datetime(date))}</p>
                            }
                        </div>
                    }) }
                </div>
            }
        </section>
    }
}
