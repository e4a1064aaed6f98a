//! Built-in Tamil lessons.
//!
//! Tamil script is fixed. Headings and glosses are dictionary keys looked up
//! in the active dictionary, so translating the interface text changes the
//! explanations and never the letters or words being taught.

mod alphabet;
mod grammar;
mod words;

use clap::ValueEnum;

use crate::dictionary::TextDictionary;

/// Heading of the lesson menu.
pub const LESSONS_TITLE: Label = Label::new("lessons_title", "Tamil Lessons");

/// Link from a lesson back to the menu.
pub const BACK_TO_LESSONS: Label = Label::new("back_btn", "Back to Lessons");

/// A heading looked up in the dictionary, with its English default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub key: &'static str,
    pub default: &'static str,
}

impl Label {
    pub const fn new(key: &'static str, default: &'static str) -> Self {
        Self { key, default }
    }

    pub fn resolve<'a>(&self, text: &'a TextDictionary) -> &'a str {
        text.text_or(self.key, self.default)
    }
}

/// One item to learn: Tamil text and the dictionary key of its gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub tamil: &'static str,
    pub gloss_key: &'static str,
}

impl Card {
    pub const fn new(tamil: &'static str, gloss_key: &'static str) -> Self {
        Self { tamil, gloss_key }
    }

    /// The gloss in the dictionary's language, or the key itself when the
    /// dictionary has no text for it.
    pub fn gloss<'a>(&self, text: &'a TextDictionary) -> &'a str {
        text.text_or(self.gloss_key, self.gloss_key)
    }
}

#[derive(Debug)]
pub struct Section {
    pub title: Label,
    pub cards: &'static [Card],
}

#[derive(Debug)]
pub struct Lesson {
    pub title: Label,
    pub sections: &'static [Section],
}

impl Lesson {
    pub fn cards(&self) -> impl Iterator<Item = &'static Card> {
        self.sections.iter().flat_map(|section| section.cards)
    }
}

/// Lesson topics in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Topic {
    /// Vowels, consonants and compound letters with their sounds
    Alphabet,
    /// Common words, numbers, days, months, colors and food
    Words,
    /// Word formation, pronouns, verbs, postpositions and word order
    Grammar,
    /// The twelve vowels and how each one sounds
    Pronunciation,
}

impl Topic {
    pub const ALL: [Self; 4] = [
        Self::Alphabet,
        Self::Words,
        Self::Grammar,
        Self::Pronunciation,
    ];

    pub fn lesson(self) -> &'static Lesson {
        match self {
            Self::Alphabet => &alphabet::ALPHABET,
            Self::Words => &words::BASIC_WORDS,
            Self::Grammar => &grammar::GRAMMAR,
            Self::Pronunciation => &alphabet::PRONUNCIATION,
        }
    }

    /// Argument that selects this topic on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphabet => "alphabet",
            Self::Words => "words",
            Self::Grammar => "grammar",
            Self::Pronunciation => "pronunciation",
        }
    }

    /// Menu entry as (name, description).
    pub const fn module(self) -> (Label, Label) {
        match self {
            Self::Alphabet => (
                Label::new("alphabet_module", "Alphabet & Pronunciation"),
                Label::new(
                    "alphabet_module_desc",
                    "Learn Tamil vowels, consonants, and their sounds.",
                ),
            ),
            Self::Words => (
                Label::new("words_module", "Basic Words"),
                Label::new(
                    "words_module_desc",
                    "Practice common words, numbers, and colors.",
                ),
            ),
            Self::Grammar => (
                Label::new("grammar_module", "Sentences & Phrases"),
                Label::new(
                    "grammar_module_desc",
                    "Grammar basics and everyday sentences.",
                ),
            ),
            Self::Pronunciation => (
                Label::new("sidebar_pronunciation", "Pronunciation"),
                Label::new("pronunciation_module_desc", "Each vowel and its sound."),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{TextValue, builtin};

    #[test]
    fn test_every_label_and_gloss_is_in_builtin_text() {
        let text = builtin();
        for topic in Topic::ALL {
            let lesson = topic.lesson();
            let (name, description) = topic.module();
            for label in [lesson.title, name, description]
                .into_iter()
                .chain(lesson.sections.iter().map(|section| section.title))
            {
                assert!(text.contains_key(label.key), "missing {}", label.key);
                assert_eq!(label.resolve(&text), label.default);
            }
            for card in lesson.cards() {
                let key = card.gloss_key;
                assert!(text.contains_key(key), "missing {key}");
            }
        }
    }

    #[test]
    fn test_gloss_follows_dictionary_language() {
        let mut text = TextDictionary::new();
        text.insert("mother", "mère");
        let card = Card::new("அம்மா", "mother");

        assert_eq!(card.gloss(&text), "mère");
    }

    #[test]
    fn test_missing_gloss_shows_key() {
        let text = TextDictionary::new();
        let vowels = &Topic::Pronunciation.lesson().sections[0];

        let glosses: Vec<_> = vowels.cards.iter().map(|card| card.gloss(&text)).collect();
        assert_eq!(glosses.len(), 12);
        assert_eq!(glosses[0], "Ah");
        assert_eq!(glosses[11], "Au");
    }

    #[test]
    fn test_gloss_of_wrong_shape_shows_key() {
        let mut text = TextDictionary::new();
        text.insert("ka", TextValue::from(["not", "a", "string"]));

        assert_eq!(Card::new("க", "ka").gloss(&text), "ka");
    }

    #[test]
    fn test_alphabet_sections() {
        let sections = Topic::Alphabet.lesson().sections;
        let sizes: Vec<_> = sections.iter().map(|section| section.cards.len()).collect();
        assert_eq!(sizes, vec![12, 18, 14]);
        assert_eq!(sections[0].cards[0], Card::new("அ", "a"));
    }

    #[test]
    fn test_topic_names_match_cli_values() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_str(topic.name(), false), Ok(topic));
        }
    }
}
