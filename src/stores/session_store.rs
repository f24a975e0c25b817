// ============================================================================
// SESSION STORE - Sign-in state, preferences and cart
// ============================================================================
// Every mutation goes through `SessionAction`; the Yew reducer hook in
// hooks/use_session.rs persists the result after each change.
// ============================================================================

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::config::CONFIG;
use crate::models::{Cart, Medicine, User, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStore {
    pub is_signed_in: bool,
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub language: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub cart: Cart,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            is_signed_in: false,
            token: None,
            refresh_token: None,
            language: CONFIG.default_language.clone(),
            user: None,
            cart: Cart::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Authorize {
        token: String,
        refresh_token: Option<String>,
    },
    SignOut,
    SetUser(User),
    SetLanguage(String),
    AddToCart {
        medicine: Medicine,
        count: u32,
    },
    ChangeCartMedicineCount {
        medicine_id: String,
        count: u32,
    },
    DeleteMedicineFromCart(String),
    SelectPickupPoint(Option<String>),
    SelectMachine(Option<String>),
    ClearCart,
}

impl SessionStore {
    /// Applies one action in place
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Authorize {
                token,
                refresh_token,
            } => {
                self.token = Some(token);
                self.refresh_token = refresh_token;
                self.is_signed_in = true;
            }
            SessionAction::SignOut => {
                self.token = None;
                self.refresh_token = None;
                self.user = None;
                self.is_signed_in = false;
            }
            SessionAction::SetUser(user) => self.user = Some(user),
            SessionAction::SetLanguage(language) => self.language = language,
            SessionAction::AddToCart { medicine, count } => self.cart.add(medicine, count),
            SessionAction::ChangeCartMedicineCount { medicine_id, count } => {
                self.cart.change_count(&medicine_id, count)
            }
            SessionAction::DeleteMedicineFromCart(medicine_id) => self.cart.remove(&medicine_id),
            SessionAction::SelectPickupPoint(id) => self.cart.select_pickup_point(id),
            SessionAction::SelectMachine(id) => self.cart.select_machine(id),
            SessionAction::ClearCart => self.cart.clear(),
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Token to attach as a bearer credential, only while signed in
    pub fn bearer_token(&self) -> Option<&str> {
        if self.is_signed_in {
            self.token.as_deref()
        } else {
            None
        }
    }
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("🗂️ [SESSION] {:?}", ActionName(&action));
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Debug view of an action that never prints tokens
struct ActionName<'a>(&'a SessionAction);

impl std::fmt::Debug for ActionName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            SessionAction::Authorize { .. } => "Authorize",
            SessionAction::SignOut => "SignOut",
            SessionAction::SetUser(_) => "SetUser",
            SessionAction::SetLanguage(_) => "SetLanguage",
            SessionAction::AddToCart { .. } => "AddToCart",
            SessionAction::ChangeCartMedicineCount { .. } => "ChangeCartMedicineCount",
            SessionAction::DeleteMedicineFromCart(_) => "DeleteMedicineFromCart",
            SessionAction::SelectPickupPoint(_) => "SelectPickupPoint",
            SessionAction::SelectMachine(_) => "SelectMachine",
            SessionAction::ClearCart => "ClearCart",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::tests::medicine;

    fn user(role: UserRole) -> User {
        User {
            id: "u-1".to_string(),
            first_name: "Taras".to_string(),
            last_name: "Melnyk".to_string(),
            email: "taras@example.com".to_string(),
            birthdate: None,
            role,
        }
    }

    #[test]
    fn starts_signed_out_with_empty_cart() {
        let store = SessionStore::default();
        assert!(!store.is_signed_in);
        assert_eq!(store.token, None);
        assert!(store.cart.is_empty());
        assert_eq!(store.bearer_token(), None);
    }

    #[test]
    fn authorize_stores_tokens() {
        let mut store = SessionStore::default();
        store.apply(SessionAction::Authorize {
            token: "jwt".to_string(),
            refresh_token: Some("refresh".to_string()),
        });

        assert!(store.is_signed_in);
        assert_eq!(store.bearer_token(), Some("jwt"));
        assert_eq!(store.refresh_token.as_deref(), Some("refresh"));
    }

    #[test]
    fn sign_out_clears_identity_but_keeps_cart_and_language() {
        let mut store = SessionStore::default();
        store.apply(SessionAction::Authorize {
            token: "jwt".to_string(),
            refresh_token: None,
        });
        store.apply(SessionAction::SetUser(user(UserRole::Customer)));
        store.apply(SessionAction::SetLanguage("UKR".to_string()));
        store.apply(SessionAction::AddToCart {
            medicine: medicine("a", 1.0),
            count: 2,
        });

        store.apply(SessionAction::SignOut);

        assert!(!store.is_signed_in);
        assert_eq!(store.token, None);
        assert_eq!(store.refresh_token, None);
        assert_eq!(store.user, None);
        assert_eq!(store.bearer_token(), None);
        assert_eq!(store.language, "UKR");
        assert_eq!(store.cart.len(), 1);
    }

    #[test]
    fn set_user_exposes_role() {
        let mut store = SessionStore::default();
        assert_eq!(store.role(), None);
        store.apply(SessionAction::SetUser(user(UserRole::Deliverer)));
        assert_eq!(store.role(), Some(UserRole::Deliverer));
    }

    #[test]
    fn cart_actions_route_to_cart() {
        let mut store = SessionStore::default();
        store.apply(SessionAction::AddToCart {
            medicine: medicine("a", 1.0),
            count: 2,
        });
        store.apply(SessionAction::AddToCart {
            medicine: medicine("a", 1.0),
            count: 5,
        });
        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart.get("a").map(|m| m.count), Some(5));

        store.apply(SessionAction::ChangeCartMedicineCount {
            medicine_id: "a".to_string(),
            count: 7,
        });
        assert_eq!(store.cart.get("a").map(|m| m.count), Some(7));

        store.apply(SessionAction::AddToCart {
            medicine: medicine("b", 1.0),
            count: 1,
        });
        store.apply(SessionAction::DeleteMedicineFromCart("a".to_string()));
        assert_eq!(store.cart.len(), 1);

        store.apply(SessionAction::SelectPickupPoint(Some("pp-1".to_string())));
        store.apply(SessionAction::SelectMachine(Some("m-1".to_string())));
        assert_eq!(store.cart.pickup_point_id.as_deref(), Some("pp-1"));
        assert_eq!(store.cart.machine_id.as_deref(), Some("m-1"));

        store.apply(SessionAction::ClearCart);
        assert!(store.cart.is_empty());
        assert_eq!(store.cart.pickup_point_id, None);
        assert_eq!(store.cart.machine_id, None);
    }

    #[test]
    fn reduce_leaves_previous_state_untouched() {
        let before = Rc::new(SessionStore::default());
        let after = before.clone().reduce(SessionAction::SetLanguage("UKR".to_string()));

        assert_eq!(before.language, CONFIG.default_language);
        assert_eq!(after.language, "UKR");
    }
}
