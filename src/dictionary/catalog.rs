//! Built-in English UI text for the tutor.

use super::{TextDictionary, TextValue};
use crate::lessons::Topic;

/// Returns the tutor's source dictionary.
///
/// Covers the home page, navigation, lessons and chat. Lesson glosses are
/// keyed by their own English text.
pub fn builtin() -> TextDictionary {
    let glosses = Topic::ALL
        .iter()
        .flat_map(|topic| topic.lesson().cards())
        .map(|card| (card.gloss_key, TextValue::from(card.gloss_key)));

    home()
        .into_iter()
        .chain(navigation())
        .chain(glosses)
        .chain(lessons())
        .chain(chat())
        .collect()
}

fn home() -> Vec<(&'static str, TextValue)> {
    vec![
        ("header", TextValue::from("AI Tamil Tutor")),
        ("start_learning", TextValue::from("Start Learning")),
        ("start_learning_now", TextValue::from("Start Learning Now")),
        (
            "subtitle",
            TextValue::from(
                "Learn Tamil through interactive conversations with AI – anytime, anywhere.",
            ),
        ),
        ("about_title", TextValue::from("Why Learn Tamil with AI?")),
        (
            "about_text",
            TextValue::from(
                "Tamil is one of the oldest and most beautiful languages in the world. \
                 Our AI-powered tutor makes it simple, fun, and interactive:",
            ),
        ),
        (
            "about_points",
            TextValue::from([
                "Practice real conversations with AI",
                "Get instant feedback on pronunciation and grammar",
                "Improve your vocabulary with smart suggestions",
                "Learn at your own pace – from beginner to advanced",
            ]),
        ),
        ("features_title", TextValue::from("Key Features")),
        (
            "features",
            TextValue::from([
                [
                    "🗣️",
                    "Voice & Text Chat",
                    "Speak or type in Tamil and get real-time replies.",
                ],
                [
                    "🎧",
                    "Pronunciation Practice",
                    "AI listens to your Tamil and corrects you instantly.",
                ],
                [
                    "📚",
                    "Grammar & Vocabulary",
                    "Learn proper usage with simple examples.",
                ],
                [
                    "🔄",
                    "Adaptive Learning",
                    "Lessons adjust based on your progress.",
                ],
            ]),
        ),
        ("how_title", TextValue::from("How It Works")),
        (
            "how_points",
            TextValue::from([
                "1️⃣ Start a Chat → Enter text or use your microphone.",
                "2️⃣ AI Responds → Get instant replies in Tamil (with English support if needed).",
                "3️⃣ Get Feedback → AI highlights mistakes and suggests corrections.",
                "4️⃣ Track Progress → Watch your skills improve over time.",
            ]),
        ),
        ("demo_title", TextValue::from("Try It Out!")),
        (
            "demo_subtitle",
            TextValue::from("Start your first Tamil conversation:"),
        ),
        (
            "demo_prompt",
            TextValue::from("👉 Type or say “Vanakkam 👋” and see how the AI responds!"),
        ),
        ("benefits_title", TextValue::from("Who Can Use This?")),
        (
            "benefits",
            TextValue::from([
                "✨ Students learning Tamil as a second language",
                "🌍 Travelers visiting Tamil Nadu or Sri Lanka",
                "📖 Heritage learners connecting with Tamil culture",
                "🧑‍🏫 Professionals preparing for exams or interviews in Tamil",
            ]),
        ),
        ("testimonials_title", TextValue::from("What Learners Say")),
        (
            "testimonials",
            TextValue::from([
                "⭐ “I learned conversational Tamil in just 2 months with this AI tutor!”",
                "⭐ “The pronunciation feedback was a game-changer for me.”",
            ]),
        ),
        ("cta_title", TextValue::from("Ready to Speak Tamil?")),
        (
            "cta_subtitle",
            TextValue::from(
                "Start your Tamil learning journey today with AI. Simple. Fun. Effective.",
            ),
        ),
        ("cta_button", TextValue::from("Start Free Trial")),
        (
            "footer_links",
            TextValue::from("Home | About | Contact | Privacy Policy"),
        ),
        (
            "footer_copyright",
            TextValue::from("© 2025 AI Tamil Learning Platform. All Rights Reserved."),
        ),
    ]
}

fn navigation() -> Vec<(&'static str, TextValue)> {
    vec![
        ("sidebar_title", TextValue::from("Tamil Learning")),
        ("sidebar_home", TextValue::from("Home")),
        ("sidebar_chat", TextValue::from("Chat Practice")),
        ("sidebar_pronunciation", TextValue::from("Pronunciation")),
        ("sidebar_lessons", TextValue::from("Lessons")),
        ("sidebar_progress", TextValue::from("Progress")),
        ("sidebar_login", TextValue::from("Login")),
        ("language", TextValue::from("Language")),
        ("sidebar_home_btn", TextValue::from("Go to home")),
    ]
}

fn lessons() -> Vec<(&'static str, TextValue)> {
    vec![
        // letters that share a sound with an earlier one
        ("na2", TextValue::from("na")),
        ("la2", TextValue::from("la")),
        ("ra2", TextValue::from("ra")),
        ("na3", TextValue::from("na")),
        ("vowels_title", TextValue::from("Tamil Vowels")),
        (
            "alphabet_title",
            TextValue::from("Tamil Alphabet & Pronunciation"),
        ),
        ("vowels_btn", TextValue::from("Uyir Ezhuthukkal (Vowels)")),
        (
            "consonants_btn",
            TextValue::from("Mei Ezhuthukkal (Consonants)"),
        ),
        (
            "compounds_btn",
            TextValue::from("Uyirmei Ezhuthukkal (Compounds)"),
        ),
        ("basic_words_title", TextValue::from("Basic Words")),
        ("one_letter_section", TextValue::from("One-letter words")),
        ("two_letter_section", TextValue::from("Two-letter words")),
        ("common_section", TextValue::from("Common nouns")),
        ("numbers_section", TextValue::from("Numbers")),
        ("days_section", TextValue::from("Days of the Week")),
        ("months_section", TextValue::from("Months")),
        ("colors_section", TextValue::from("Colors")),
        ("foods_section", TextValue::from("Food Items")),
        ("grammar_basics_title", TextValue::from("Tamil Grammar Basics")),
        ("word_formation_section", TextValue::from("Word Formation")),
        ("pronouns_section", TextValue::from("Pronouns")),
        ("verbs_section", TextValue::from("Verbs")),
        ("postpositions_section", TextValue::from("Postpositions")),
        (
            "sentence_structures_section",
            TextValue::from("Sentence Structures"),
        ),
        ("lessons_title", TextValue::from("Tamil Lessons")),
        ("alphabet_module", TextValue::from("Alphabet & Pronunciation")),
        (
            "alphabet_module_desc",
            TextValue::from("Learn Tamil vowels, consonants, and their sounds."),
        ),
        ("words_module", TextValue::from("Basic Words")),
        (
            "words_module_desc",
            TextValue::from("Practice common words, numbers, and colors."),
        ),
        ("grammar_module", TextValue::from("Sentences & Phrases")),
        (
            "grammar_module_desc",
            TextValue::from("Grammar basics and everyday sentences."),
        ),
        (
            "pronunciation_module_desc",
            TextValue::from("Each vowel and its sound."),
        ),
        ("back_btn", TextValue::from("Back to Lessons")),
    ]
}

fn chat() -> Vec<(&'static str, TextValue)> {
    vec![
        ("chat_title", TextValue::from("Interactive Tamil Chat")),
        ("chat_placeholder", TextValue::from("Type your message...")),
        (
            "chat_help",
            TextValue::from("Type a message, /help for commands, Ctrl+C to quit"),
        ),
        ("chat_listening", TextValue::from("Listening...")),
        ("chat_goodbye", TextValue::from("Goodbye! Keep practising.")),
    ]
}
