use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current backend and language"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/lang", "Switch display language, e.g. /lang ta"),
    ("/listen", "Toggle voice input"),
    ("/quit", "Exit chat"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    History,
    /// `/lang` with an optional language code; without one, shows the current language.
    Lang(Option<String>),
    Listen,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies one line of input.
///
/// Text is returned as typed, surrounding whitespace included.
pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.as_slice() {
        ["config"] => Input::Command(SlashCommand::Config),
        ["help"] => Input::Command(SlashCommand::Help),
        ["history"] => Input::Command(SlashCommand::History),
        ["lang"] => Input::Command(SlashCommand::Lang(None)),
        ["lang", code] => Input::Command(SlashCommand::Lang(Some((*code).to_string()))),
        ["listen" | "mic"] => Input::Command(SlashCommand::Listen),
        ["quit" | "exit" | "q"] => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input_keeps_raw_line() {
        assert_eq!(
            parse_input("  Vanakkam!  "),
            Input::Text("  Vanakkam!  ".to_string())
        );
        assert_eq!(parse_input("Nandri"), Input::Text("Nandri".to_string()));
    }

    #[test]
    fn test_parse_lang_command() {
        assert_eq!(
            parse_input("/lang ta"),
            Input::Command(SlashCommand::Lang(Some("ta".to_string())))
        );
        assert_eq!(
            parse_input("/lang"),
            Input::Command(SlashCommand::Lang(None))
        );
    }

    #[test]
    fn test_parse_lang_with_extra_words_is_unknown() {
        assert_eq!(
            parse_input("/lang ta fr"),
            Input::Command(SlashCommand::Unknown("lang ta fr".to_string()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
        assert_eq!(
            parse_input("/history"),
            Input::Command(SlashCommand::History)
        );
        assert_eq!(parse_input("/listen"), Input::Command(SlashCommand::Listen));
        assert_eq!(parse_input("/mic"), Input::Command(SlashCommand::Listen));
    }

    #[test]
    fn test_parse_quit_commands() {
        for input in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(input), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown"),
            Input::Command(SlashCommand::Unknown("unknown".to_string()))
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_filters_by_prefix() {
        let mut completer = SlashCommandCompleter;

        assert_eq!(
            completer.get_suggestions("/").unwrap().len(),
            SLASH_COMMANDS.len()
        );

        let suggestions = completer.get_suggestions("/l").unwrap();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].starts_with("/lang"));
        assert!(suggestions[1].starts_with("/listen"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/history  Show the conversation so far".to_string();
        let completion = completer.get_completion("/h", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/history".to_string()));
    }
}
