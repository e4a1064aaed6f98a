use super::{Card, Label, Lesson, Section};

const ONE_LETTER: &[Card] = &[Card::new("ஊ", "yes"), Card::new("ஐ", "eye")];

const TWO_LETTER: &[Card] = &[Card::new("அம்", "yes/ok"), Card::new("என்", "my")];

const COMMON_NOUNS: &[Card] = &[
    Card::new("அம்மா", "mother"),
    Card::new("அப்பா", "father"),
    Card::new("தண்ணீர்", "water"),
    Card::new("நண்பன்", "friend"),
];

const NUMBERS: &[Card] = &[
    Card::new("ஒன்று", "one"),
    Card::new("இரண்டு", "two"),
    Card::new("மூன்று", "three"),
    Card::new("நான்கு", "four"),
    Card::new("ஐந்து", "five"),
];

const DAYS: &[Card] = &[
    Card::new("திங்கள்", "Monday"),
    Card::new("செவ்வாய்", "Tuesday"),
    Card::new("புதன்", "Wednesday"),
    Card::new("வியாழன்", "Thursday"),
    Card::new("வெள்ளி", "Friday"),
    Card::new("சனி", "Saturday"),
    Card::new("ஞாயிறு", "Sunday"),
];

const MONTHS: &[Card] = &[
    Card::new("சித்திரை", "Chithirai (April-May)"),
    Card::new("ஆனி", "Aani (June-July)"),
    Card::new("ஆடி", "Aadi (July-August)"),
    Card::new("ஆவணி", "Aavani (Aug-Sep)"),
];

const COLORS: &[Card] = &[
    Card::new("சிவப்பு", "red"),
    Card::new("பச்சை", "green"),
    Card::new("நீலம்", "blue"),
    Card::new("கருப்பு", "black"),
    Card::new("வெள்ளை", "white"),
];

const FOODS: &[Card] = &[
    Card::new("சோறு", "rice"),
    Card::new("இட்லி", "idli"),
    Card::new("தோசை", "dosa"),
    Card::new("சாம்பார்", "sambar"),
];

pub static BASIC_WORDS: Lesson = Lesson {
    title: Label::new("basic_words_title", "Basic Words"),
    sections: &[
        Section {
            title: Label::new("one_letter_section", "One-letter words"),
            cards: ONE_LETTER,
        },
        Section {
            title: Label::new("two_letter_section", "Two-letter words"),
            cards: TWO_LETTER,
        },
        Section {
            title: Label::new("common_section", "Common nouns"),
            cards: COMMON_NOUNS,
        },
        Section {
            title: Label::new("numbers_section", "Numbers"),
            cards: NUMBERS,
        },
        Section {
            title: Label::new("days_section", "Days of the Week"),
            cards: DAYS,
        },
        Section {
            title: Label::new("months_section", "Months"),
            cards: MONTHS,
        },
        Section {
            title: Label::new("colors_section", "Colors"),
            cards: COLORS,
        },
        Section {
            title: Label::new("foods_section", "Food Items"),
            cards: FOODS,
        },
    ],
};
