pub mod session_context;
pub mod use_api_error;
pub mod use_session;
pub mod use_toast;

pub use session_context::SessionProvider;
pub use use_api_error::use_api_error;
pub use use_session::{use_session, SessionHandle};
pub use use_toast::{use_toast, Toast, ToastHandle, ToastKind, ToastProvider};
