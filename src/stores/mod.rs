pub mod persistence;
pub mod session_store;

pub use persistence::{LocalStoragePersistence, SessionPersistence};
pub use session_store::{SessionAction, SessionStore};
