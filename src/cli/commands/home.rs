//! Home page command handler.

use anyhow::Result;

use super::{ConnectionOptions, interface_text};
use crate::dictionary::TextDictionary;
use crate::ui::Style;

pub async fn run_home(connection: &ConnectionOptions, lang: Option<String>) -> Result<()> {
    let resolved = connection.resolve(lang, false)?;
    let text = interface_text(&resolved).await;
    print_home(&text);
    Ok(())
}

/// Where each navigation entry leads: (dictionary key, default, command).
const NAVIGATION: &[(&str, &str, &str)] = &[
    ("sidebar_home", "Home", "tutor home"),
    ("sidebar_chat", "Chat Practice", "tutor chat"),
    (
        "sidebar_pronunciation",
        "Pronunciation",
        "tutor lessons pronunciation",
    ),
    ("sidebar_lessons", "Lessons", "tutor lessons"),
    ("sidebar_login", "Login", "tutor login --email <EMAIL>"),
    ("language", "Language", "tutor languages"),
];

fn print_home(text: &TextDictionary) {
    println!(
        "{}",
        Style::header(text.text_or("header", "AI Tamil Tutor"))
    );
    println!("{}", text.text_or("subtitle", ""));
    println!(
        "{} {}",
        Style::success(text.text_or("start_learning_now", "Start Learning Now")),
        Style::command("tutor chat")
    );
    println!();

    section(text.text_or("about_title", "Why Learn Tamil with AI?"));
    println!("{}", text.text_or("about_text", ""));
    bullets(text.list_or("about_points", &[]));

    section(text.text_or("features_title", "Key Features"));
    for feature in text.tuples_or("features", &[]) {
        match feature.as_slice() {
            [icon, title, description] => {
                println!(
                    "  {icon} {}  {}",
                    Style::value(title),
                    Style::secondary(description)
                );
            }
            other => println!("  {}", other.join(" ")),
        }
    }
    println!();

    section(text.text_or("how_title", "How It Works"));
    for step in text.list_or("how_points", &[]) {
        println!("  {step}");
    }
    println!();

    section(text.text_or("demo_title", "Try It Out!"));
    println!("{}", text.text_or("demo_subtitle", ""));
    println!("{}", text.text_or("demo_prompt", ""));
    println!();

    section(text.text_or("benefits_title", "Who Can Use This?"));
    bullets(text.list_or("benefits", &[]));

    section(text.text_or("testimonials_title", "What Learners Say"));
    bullets(text.list_or("testimonials", &[]));

    section(text.text_or("cta_title", "Ready to Speak Tamil?"));
    println!("{}", text.text_or("cta_subtitle", ""));
    println!(
        "{} {}",
        Style::success(text.text_or("cta_button", "Start Free Trial")),
        Style::command("tutor register")
    );
    println!();

    section(text.text_or("sidebar_title", "Tamil Learning"));
    for (key, default, command) in NAVIGATION {
        let label = text.text_or(key, default);
        println!("  {label:<24} {}", Style::command(command));
    }
    println!();

    println!("{}", Style::secondary(text.text_or("footer_links", "")));
    println!("{}", Style::secondary(text.text_or("footer_copyright", "")));
}

fn section(title: &str) {
    println!("{}", Style::header(title));
}

fn bullets(items: &[String]) {
    for item in items {
        println!("  • {item}");
    }
    println!();
}
