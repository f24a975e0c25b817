pub mod language;

pub use language::{use_translation, Language, Translator};
