// ============================================================================
// USE SESSION HOOK - Reducer-backed session with localStorage persistence
// ============================================================================
// The provider owns the reducer; every component reaches it through
// `use_session()`, which reads the context.
// ============================================================================

use std::ops::Deref;

use yew::prelude::*;

use crate::models::{Medicine, User};
use crate::services::ApiClient;
use crate::stores::{LocalStoragePersistence, SessionAction, SessionPersistence, SessionStore};

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    state: UseReducerHandle<SessionStore>,
}

impl Deref for SessionHandle {
    type Target = SessionStore;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl SessionHandle {
    pub fn authorize(&self, token: String, refresh_token: Option<String>) {
        self.state.dispatch(SessionAction::Authorize {
            token,
            refresh_token,
        });
    }

    pub fn sign_out(&self) {
        self.state.dispatch(SessionAction::SignOut);
    }

    pub fn set_user(&self, user: User) {
        self.state.dispatch(SessionAction::SetUser(user));
    }

    pub fn set_language(&self, language: &str) {
        self.state.dispatch(SessionAction::SetLanguage(language.to_string()));
    }

    pub fn add_to_cart(&self, medicine: Medicine, count: u32) {
        self.state.dispatch(SessionAction::AddToCart { medicine, count });
    }

    pub fn change_cart_count(&self, medicine_id: &str, count: u32) {
        self.state.dispatch(SessionAction::ChangeCartMedicineCount {
            medicine_id: medicine_id.to_string(),
            count,
        });
    }

    pub fn delete_from_cart(&self, medicine_id: &str) {
        self.state
            .dispatch(SessionAction::DeleteMedicineFromCart(medicine_id.to_string()));
    }

    pub fn select_pickup_point(&self, pickup_point_id: Option<String>) {
        self.state.dispatch(SessionAction::SelectPickupPoint(pickup_point_id));
    }

    pub fn select_machine(&self, machine_id: Option<String>) {
        self.state.dispatch(SessionAction::SelectMachine(machine_id));
    }

    pub fn clear_cart(&self) {
        self.state.dispatch(SessionAction::ClearCart);
    }

    /// Client carrying the bearer token of this snapshot
    pub fn api(&self) -> ApiClient {
        ApiClient::from_config().with_token(self.bearer_token().map(str::to_string))
    }
}

/// Creates the session reducer, restoring and then persisting it.
/// Only `SessionProvider` calls this.
#[hook]
pub fn use_session_reducer() -> SessionHandle {
    let state = use_reducer(|| LocalStoragePersistence.load());

    {
        let snapshot = (*state).clone();
        use_effect_with(snapshot, |snapshot| {
            LocalStoragePersistence.save(snapshot);
            || ()
        });
    }

    SessionHandle { state }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be called inside SessionProvider")
}
