//! One affirmation per day, cycling through the list by day of year.
use chrono::{Datelike, Local, NaiveDate};

pub const AFFIRMATIONS: [&str; 31] = [
    "you are worthy of love and kindness 💜",
    "today, you are enough just as you are 🌸",
    "your presence makes the world brighter ✨",
    "you deserve moments of peace and joy 🌿",
    "you are stronger than you know 💪",
    "it's okay to take things one step at a time 🦋",
    "you matter more than you realize 🌟",
    "be gentle with yourself today 🌷",
    "you are doing better than you think 💫",
    "your feelings are valid and important 🤍",
    "every small step forward counts 🌱",
    "you are worthy of rest and care 🌙",
    "today is a fresh start, take it slow 🌅",
    "you bring something special to this world 🌈",
    "you deserve compassion, especially from yourself 💗",
    "breathe deeply, you've got this 🌬️",
    "your journey is unique and beautiful 🦋",
    "you are allowed to ask for help 🤝",
    "small progress is still progress 🌻",
    "you are loved more than you know 💕",
    "take a moment to appreciate yourself 🌺",
    "your best is always good enough 🌼",
    "you make a difference just by being you ⭐",
    "today, choose kindness towards yourself 💐",
    "you are resilient and capable 🌿",
    "it's okay to not have all the answers 🤍",
    "you deserve happiness and peace 🕊️",
    "your heart is full of strength 💜",
    "take things at your own pace 🐢",
    "you are a beautiful work in progress 🎨",
    "today, let yourself just be 🌸",
];

pub fn for_date(date: NaiveDate) -> &'static str {
    AFFIRMATIONS[date.ordinal() as usize % AFFIRMATIONS.len()]
}

pub fn today() -> &'static str {
    for_date(Local::now().date_naive())
}
