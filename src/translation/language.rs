//! UI languages offered by the tutor.

use anyhow::Result;

use crate::ui::Style;

/// The language the built-in UI text and the chat backend use.
pub const BASE_LANGUAGE: &str = "en";

/// Selectable UI languages: (code, name, native name).
pub const SUPPORTED_LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("ta", "Tamil", "தமிழ்"),
    ("fr", "French", "Français"),
    ("es", "Spanish", "Español"),
    ("de", "German", "Deutsch"),
    ("hi", "Hindi", "हिन्दी"),
    ("zh", "Chinese", "中文"),
    ("ar", "Arabic", "العربية"),
    ("ru", "Russian", "Русский"),
    ("ja", "Japanese", "日本語"),
];

/// Returns the English name of a supported language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, _)| *name)
}

/// Prints all selectable language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported UI languages"));
    for (code, name, native) in SUPPORTED_LANGUAGES {
        let marker = if *code == BASE_LANGUAGE {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {:4} {} {}{marker}",
            Style::code(code),
            name,
            Style::secondary(native)
        );
    }
}

/// Validates that the given language code is offered by the tutor.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(code: &str) -> Result<()> {
    if language_name(code).is_some() {
        Ok(())
    } else {
        let codes: Vec<_> = SUPPORTED_LANGUAGES.iter().map(|(c, _, _)| *c).collect();
        anyhow::bail!(
            "Invalid language code: '{code}'\n\n\
             Supported codes: {}\n\
             Run 'tutor languages' to see their names.",
            codes.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("ta").is_ok());
        assert!(validate_language("ja").is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("xx").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("TA").is_err());
    }

    #[test]
    fn test_base_language_is_supported() {
        assert_eq!(language_name(BASE_LANGUAGE), Some("English"));
    }
}
