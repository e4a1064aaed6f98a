//! Uyir, mei and uyirmei letters.

use super::{Card, Label, Lesson, Section};

const VOWELS: &[Card] = &[
    Card::new("அ", "a"),
    Card::new("ஆ", "aa"),
    Card::new("இ", "i"),
    Card::new("ஈ", "ee"),
    Card::new("உ", "u"),
    Card::new("ஊ", "oo"),
    Card::new("எ", "e"),
    Card::new("ஏ", "ae"),
    Card::new("ஐ", "ai"),
    Card::new("ஒ", "o"),
    Card::new("ஓ", "oa"),
    Card::new("ஔ", "au"),
];

const CONSONANTS: &[Card] = &[
    Card::new("க", "ka"),
    Card::new("ங", "nga"),
    Card::new("ச", "cha"),
    Card::new("ஞ", "nya"),
    Card::new("ட", "ta"),
    Card::new("ண", "na"),
    Card::new("த", "tha"),
    Card::new("ந", "na2"),
    Card::new("ப", "pa"),
    Card::new("ம", "ma"),
    Card::new("ய", "ya"),
    Card::new("ர", "ra"),
    Card::new("ல", "la"),
    Card::new("வ", "va"),
    Card::new("ழ", "zha"),
    Card::new("ள", "la2"),
    Card::new("ற", "ra2"),
    Card::new("ன", "na3"),
];

// A sample of the 216 combinations.
const COMPOUNDS: &[Card] = &[
    Card::new("கா", "kaa"),
    Card::new("கி", "ki"),
    Card::new("கீ", "kee"),
    Card::new("கு", "ku"),
    Card::new("கூ", "koo"),
    Card::new("கெ", "ke"),
    Card::new("கே", "kae"),
    Card::new("கை", "kai"),
    Card::new("கொ", "ko"),
    Card::new("கோ", "koa"),
    Card::new("கௌ", "kau"),
    Card::new("மா", "maa"),
    Card::new("சி", "chi"),
    Card::new("தொ", "tho"),
];

pub static ALPHABET: Lesson = Lesson {
    title: Label::new("alphabet_title", "Tamil Alphabet & Pronunciation"),
    sections: &[
        Section {
            title: Label::new("vowels_btn", "Uyir Ezhuthukkal (Vowels)"),
            cards: VOWELS,
        },
        Section {
            title: Label::new("consonants_btn", "Mei Ezhuthukkal (Consonants)"),
            cards: CONSONANTS,
        },
        Section {
            title: Label::new("compounds_btn", "Uyirmei Ezhuthukkal (Compounds)"),
            cards: COMPOUNDS,
        },
    ],
};

/// Vowels glossed with the sound a reader of English would say.
const SPOKEN_VOWELS: &[Card] = &[
    Card::new("அ", "Ah"),
    Card::new("ஆ", "Aa"),
    Card::new("இ", "Ih"),
    Card::new("ஈ", "Ee"),
    Card::new("உ", "Uh"),
    Card::new("ஊ", "Oo"),
    Card::new("எ", "Eh"),
    Card::new("ஏ", "Eeh"),
    Card::new("ஐ", "Ai"),
    Card::new("ஒ", "Oh"),
    Card::new("ஓ", "Ooh"),
    Card::new("ஔ", "Au"),
];

pub static PRONUNCIATION: Lesson = Lesson {
    title: Label::new("vowels_title", "Tamil Vowels"),
    sections: &[Section {
        title: Label::new("sidebar_pronunciation", "Pronunciation"),
        cards: SPOKEN_VOWELS,
    }],
};
