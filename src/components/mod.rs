pub mod footer;
pub mod header;
pub mod language_menu;
pub mod medicine_card;
pub mod modal;
pub mod toast_host;

pub use footer::Footer;
pub use header::Header;
pub use language_menu::LanguageMenu;
pub use medicine_card::MedicineCard;
pub use modal::Modal;
pub use toast_host::ToastHost;
