//! Lesson browser command handler.

use anyhow::Result;

use super::{ConnectionOptions, interface_text};
use crate::dictionary::TextDictionary;
use crate::lessons::{BACK_TO_LESSONS, LESSONS_TITLE, Lesson, Topic};
use crate::ui::Style;

pub struct LessonOptions {
    pub connection: ConnectionOptions,
    pub topic: Option<Topic>,
    pub lang: Option<String>,
}

/// Prints one lesson, or the lesson menu when no topic is given.
///
/// Headings and glosses follow the display language; Tamil text does not.
pub async fn run_lessons(options: LessonOptions) -> Result<()> {
    let resolved = options.connection.resolve(options.lang, false)?;
    let text = interface_text(&resolved).await;

    match options.topic {
        Some(topic) => print_lesson(topic.lesson(), &text),
        None => print_menu(&text),
    }
    Ok(())
}

fn print_menu(text: &TextDictionary) {
    println!("{}", Style::header(LESSONS_TITLE.resolve(text)));
    println!();
    for topic in Topic::ALL {
        let (name, description) = topic.module();
        let description = Style::secondary(description.resolve(text));
        println!(
            "  {}  {}",
            Style::command(format!("{:<14}", topic.name())),
            Style::value(name.resolve(text))
        );
        println!("  {:<14}  {description}", "");
    }
    println!();
    println!("{}", Style::hint("Open a lesson: tutor lessons <topic>"));
}

fn print_lesson(lesson: &Lesson, text: &TextDictionary) {
    println!("{}", Style::header(lesson.title.resolve(text)));
    println!();

    for section in lesson.sections {
        println!("{}", Style::success(section.title.resolve(text)));
        for card in section.cards {
            println!("  {}  {}", Style::value(card.tamil), card.gloss(text));
        }
        println!();
    }

    println!(
        "{} {}",
        Style::hint(BACK_TO_LESSONS.resolve(text)),
        Style::command("tutor lessons")
    );
    println!(
        "{} {}",
        Style::hint(text.text_or("sidebar_home_btn", "Go to home")),
        Style::command("tutor home")
    );
}
