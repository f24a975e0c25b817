pub mod format;
pub mod i18n;

pub use format::{format_datetime, format_price};
