//! Static site menu and the auth/role filter applied to it.

use crate::models::UserRole;
use crate::router::Route;
use crate::stores::SessionStore;

/// One node of the menu. `label` is an i18n key.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub href: Option<Route>,
    pub children: &'static [NavigationItem],
    /// `Some(true)`: only signed-in, `Some(false)`: only signed-out
    pub is_auth_required: Option<bool>,
    pub roles: Option<&'static [UserRole]>,
}

impl NavigationItem {
    pub const fn link(label: &'static str, href: Route) -> Self {
        Self {
            label,
            href: Some(href),
            children: &[],
            is_auth_required: None,
            roles: None,
        }
    }

    pub const fn auth(mut self, required: bool) -> Self {
        self.is_auth_required = Some(required);
        self
    }

    pub const fn roles(mut self, roles: &'static [UserRole]) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Checks this entry's own constraints; children are not inspected
    pub fn is_visible(&self, session: &SessionStore) -> bool {
        let auth_ok = self
            .is_auth_required
            .map_or(true, |required| required == session.is_signed_in);
        let role_ok = self
            .roles
            .map_or(true, |roles| session.role().is_some_and(|role| roles.contains(&role)));
        auth_ok && role_ok
    }
}

pub static NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem::link("home_header", Route::Home),
    NavigationItem::link("login_header", Route::Login).auth(false),
    NavigationItem::link("register_header", Route::Register).auth(false),
    NavigationItem::link("profile_header", Route::Profile).auth(true),
    NavigationItem::link("medicine_header", Route::Medicines)
        .auth(true)
        .roles(&[UserRole::Customer]),
    NavigationItem::link("cart_header", Route::Cart)
        .auth(true)
        .roles(&[UserRole::Customer]),
    NavigationItem::link("my_orders_header", Route::ProfileOrders)
        .auth(true)
        .roles(&[UserRole::Customer]),
    NavigationItem {
        label: "deliverer_header",
        href: None,
        children: &[NavigationItem::link("machines_header", Route::DelivererMachines).auth(true)],
        is_auth_required: None,
        roles: Some(&[UserRole::Deliverer]),
    },
];

/// Top-level entries the session may see, in menu order
pub fn visible_items<'a>(items: &'a [NavigationItem], session: &SessionStore) -> Vec<&'a NavigationItem> {
    items.iter().filter(|item| item.is_visible(session)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::stores::SessionAction;

    fn signed_in(role: Option<UserRole>) -> SessionStore {
        let mut session = SessionStore::default();
        session.apply(SessionAction::Authorize {
            token: "jwt".to_string(),
            refresh_token: None,
        });
        if let Some(role) = role {
            session.apply(SessionAction::SetUser(User {
                id: "u".to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                email: "a@b.c".to_string(),
                birthdate: None,
                role,
            }));
        }
        session
    }

    fn labels(items: Vec<&NavigationItem>) -> Vec<&'static str> {
        items.into_iter().map(|i| i.label).collect()
    }

    #[test]
    fn signed_out_sees_only_public_entries() {
        let items = [
            NavigationItem::link("Login", Route::Login).auth(false),
            NavigationItem::link("Profile", Route::Profile).auth(true),
        ];
        assert_eq!(labels(visible_items(&items, &SessionStore::default())), vec!["Login"]);
        assert_eq!(labels(visible_items(&items, &signed_in(None))), vec!["Profile"]);
    }

    #[test]
    fn unconstrained_entries_are_always_visible() {
        let item = NavigationItem::link("Home", Route::Home);
        assert!(item.is_visible(&SessionStore::default()));
        assert!(item.is_visible(&signed_in(Some(UserRole::Admin))));
    }

    #[test]
    fn role_restricted_entry_needs_matching_user() {
        let item = NavigationItem::link("Machines", Route::DelivererMachines).roles(&[UserRole::Deliverer]);
        assert!(!item.is_visible(&signed_in(Some(UserRole::Customer))));
        assert!(item.is_visible(&signed_in(Some(UserRole::Deliverer))));
        // Signed in but profile not fetched yet
        assert!(!item.is_visible(&signed_in(None)));
    }

    #[test]
    fn children_are_not_filtered() {
        let deliverer = signed_in(Some(UserRole::Deliverer));
        let visible = visible_items(NAVIGATION_ITEMS, &deliverer);
        let menu = visible
            .iter()
            .find(|i| i.label == "deliverer_header")
            .expect("deliverer menu visible");
        assert_eq!(menu.children.len(), 1);
        assert_eq!(menu.children[0].href, Some(Route::DelivererMachines));
    }

    #[test]
    fn customer_menu() {
        let customer = signed_in(Some(UserRole::Customer));
        assert_eq!(
            labels(visible_items(NAVIGATION_ITEMS, &customer)),
            vec!["home_header", "profile_header", "medicine_header", "cart_header", "my_orders_header"]
        );
    }

    #[test]
    fn anonymous_menu() {
        assert_eq!(
            labels(visible_items(NAVIGATION_ITEMS, &SessionStore::default())),
            vec!["home_header", "login_header", "register_header"]
        );
    }

    #[test]
    fn deliverer_menu() {
        let deliverer = signed_in(Some(UserRole::Deliverer));
        assert_eq!(
            labels(visible_items(NAVIGATION_ITEMS, &deliverer)),
            vec!["home_header", "profile_header", "deliverer_header"]
        );
    }
}
