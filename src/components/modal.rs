use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub footer: Option<Html>,
    pub children: Children,
}

/// Overlay dialog; clicking the backdrop or ✕ closes it
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = props.on_close.clone();
    let close_overlay = props.on_close.clone();

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={Callback::from(move |_| close_overlay.emit(()))}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{props.title.clone()}</h2>
                    <button class="btn-close" onclick={Callback::from(move |_| close.emit(()))}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal-body">
                    {props.children.clone()}
                </div>
                if let Some(footer) = &props.footer {
                    <div class="modal-footer">{footer.clone()}</div>
                }
            </div>
        </div>
    }
}
