use yew::prelude::*;

use crate::hooks::use_session;
use crate::utils::i18n;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    English,
    Ukrainian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Ukrainian];

    /// Code stored in the session
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "ENG",
            Language::Ukrainian => "UKR",
        }
    }

    /// Unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "UKR" => Language::Ukrainian,
            _ => Language::English,
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Ukrainian => "Українська",
        }
    }
}

/// Translator bound to the session language
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Translator {
    pub language: Language,
}

impl Translator {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::t(key, self.language)
    }
}

#[hook]
pub fn use_translation() -> Translator {
    let session = use_session();
    Translator {
        language: Language::from_code(&session.language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
        }
    }

    #[test]
    fn unknown_code_is_english() {
        assert_eq!(Language::from_code("FR"), Language::English);
        assert_eq!(Language::from_code("ukr"), Language::Ukrainian);
    }
}
