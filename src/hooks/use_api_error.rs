// ============================================================================
// API ERROR HANDLER - log, toast, and sign out on 401
// ============================================================================

use yew::prelude::*;

use crate::context::language::use_translation;
use crate::error::ApiError;
use crate::hooks::{use_session, use_toast};
use crate::router::{use_router, Route};

/// Toast key shown for a failure; a 401 always reads as an expired session
pub fn failure_message_key(error: &ApiError, message_key: &'static str) -> &'static str {
    if error.is_unauthorized() {
        "session_expired"
    } else {
        message_key
    }
}

/// Callback taking the failed call's error and the i18n key to show.
/// A 401 signs out and routes to Login whatever the key.
#[hook]
pub fn use_api_error() -> Callback<(ApiError, &'static str)> {
    let session = use_session();
    let toast = use_toast();
    let router = use_router();
    let tr = use_translation();

    Callback::from(move |(error, message_key): (ApiError, &'static str)| {
        log::error!("❌ {}: {}", message_key, error);
        toast.error(tr.t(failure_message_key(&error, message_key)));
        if error.is_unauthorized() {
            session.sign_out();
            router.push(Route::Login);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_reads_as_expired_session() {
        assert_eq!(
            failure_message_key(&ApiError::Unauthorized, "user_data_fetch_fail"),
            "session_expired"
        );
    }

    #[test]
    fn other_failures_keep_their_key() {
        let error = ApiError::Http {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(
            failure_message_key(&error, "user_data_fetch_fail"),
            "user_data_fetch_fail"
        );
        assert_eq!(
            failure_message_key(&ApiError::Network("offline".into()), "medicines_fetch_fail"),
            "medicines_fetch_fail"
        );
    }
}
