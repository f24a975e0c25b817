// ============================================================================
// SESSION CONTEXT - Shares the session handle with the whole app
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session_reducer, SessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_session_reducer();

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
