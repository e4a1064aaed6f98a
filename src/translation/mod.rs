//! UI language selection and batch translation of UI text.

mod language;
mod session;

pub use language::{
    BASE_LANGUAGE, SUPPORTED_LANGUAGES, language_name, print_languages, validate_language,
};
pub use session::{LanguageSwitch, TranslationSession};
