use yew::prelude::*;

use crate::context::language::use_translation;
use crate::models::Medicine;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct MedicineCardProps {
    pub medicine: Medicine,
    pub on_add: Callback<Medicine>,
}

#[function_component(MedicineCard)]
pub fn medicine_card(props: &MedicineCardProps) -> Html {
    let tr = use_translation();
    let medicine = &props.medicine;

    let onclick = {
        let on_add = props.on_add.clone();
        let medicine = medicine.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(medicine.clone()))
    };

    html! {
        <div class={classes!("medicine-card", (!medicine.is_available).then_some("unavailable"))}>
            <h3>{&medicine.name}</h3>
            <p class="medicine-description">{&medicine.description}</p>
            <p class="medicine-price">
                {format!("{}: {}", tr.t("price_label"), format_price(medicine.price, medicine.currency))}
            </p>
            if medicine.prescription_needed {
                <span class="badge badge-prescription">{tr.t("prescriptions_needed_label")}</span>
            }
            if medicine.is_available {
                <button class="btn btn-primary" {onclick}>{tr.t("title_add_to_cart")}</button>
            } else {
                <span class="badge">{tr.t("unavailable_label")}</span>
            }
        </div>
    }
}
