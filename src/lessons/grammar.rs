use super::{Card, Label, Lesson, Section};

const WORD_FORMATION: &[Card] = &[
    Card::new("கல் + கள் = கற்கள்", "stone + plural suffix = stones"),
    Card::new("மரம் + இல் = மரத்தில்", "tree + locative = on the tree"),
];

const PRONOUNS: &[Card] = &[
    Card::new("நான்", "I"),
    Card::new("நீ", "You (informal)"),
    Card::new("அவர்", "He/She (formal)"),
    Card::new("அவர்கள்", "They"),
];

const VERBS: &[Card] = &[
    Card::new("போ", "to go"),
    Card::new("போகிறேன்", "I go (present)"),
    Card::new("போனேன்", "I went (past)"),
    Card::new("போவேன்", "I will go (future)"),
];

const POSTPOSITIONS: &[Card] = &[
    Card::new("க்கு", "to/for"),
    Card::new("இல்", "in/at"),
    Card::new("உடன்", "with"),
    Card::new("மீது", "on/over"),
];

// Tamil is subject-object-verb.
const SENTENCES: &[Card] = &[
    Card::new("நான் உணவு சாப்பிடுகிறேன்", "I eat food (SOV)"),
    Card::new("அவன் பள்ளிக்குச் செல்கிறான்", "He goes to school (SOV)"),
];

pub static GRAMMAR: Lesson = Lesson {
    title: Label::new("grammar_basics_title", "Tamil Grammar Basics"),
    sections: &[
        Section {
            title: Label::new("word_formation_section", "Word Formation"),
            cards: WORD_FORMATION,
        },
        Section {
            title: Label::new("pronouns_section", "Pronouns"),
            cards: PRONOUNS,
        },
        Section {
            title: Label::new("verbs_section", "Verbs"),
            cards: VERBS,
        },
        Section {
            title: Label::new("postpositions_section", "Postpositions"),
            cards: POSTPOSITIONS,
        },
        Section {
            title: Label::new("sentence_structures_section", "Sentence Structures"),
            cards: SENTENCES,
        },
    ],
};
