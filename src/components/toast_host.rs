use yew::prelude::*;

use crate::hooks::use_toast;

/// Renders the live toasts; each one can also be closed by hand
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toast = use_toast();

    html! {
        <div class="toast-host">
            { for toast.toasts().iter().map(|item| {
                let id = item.id;
                let dismiss = {
                    let toast = toast.clone();
                    Callback::from(move |_: MouseEvent| toast.dismiss(id))
                };
                html! {
                    <div key={id} class={item.kind.class()} onclick={dismiss}>
                        {item.message.clone()}
                    </div>
                }
            }) }
        </div>
    }
}
