//! Built-in reminder corpus, ten reminders per mood.
use shared::{Mood, Reminder};

const SEED: &[(&str, &str, &str, Mood)] = &[
    // sad
    ("it's okay to feel sad. your feelings are valid.", "gentle", "💜", Mood::Sad),
    ("you don't have to smile right now. just breathe.", "soft", "🌸", Mood::Sad),
    ("sadness passes like clouds. you're still here.", "warm", "☁️", Mood::Sad),
    ("it's okay to not be okay today.", "gentle", "🤍", Mood::Sad),
    ("your tears are not weakness. they're release.", "soft", "💧", Mood::Sad),
    ("even on hard days, you matter so much.", "warm", "💛", Mood::Sad),
    ("let yourself feel what you need to feel.", "gentle", "🌙", Mood::Sad),
    ("you're allowed to have hard days. this is one.", "soft", "🌧️", Mood::Sad),
    ("grief and sadness mean you loved deeply.", "warm", "💗", Mood::Sad),
    ("this feeling won't last forever. hold on.", "gentle", "🌈", Mood::Sad),

    // tired
    ("being tired doesn't mean you've failed.", "gentle", "🌙", Mood::Tired),
    ("rest is not laziness. it's healing.", "soft", "✨", Mood::Tired),
    ("you're allowed to slow down today.", "warm", "🍃", Mood::Tired),
    ("today, rest counts as progress too.", "gentle", "🌿", Mood::Tired),
    ("your body knows what it needs. listen to it.", "soft", "💫", Mood::Tired),
    ("it's okay to take a moment to breathe.", "warm", "🌬️", Mood::Tired),
    ("you've been carrying so much. set it down for now.", "gentle", "🎒", Mood::Tired),
    ("sleep is not a reward. it's a necessity.", "soft", "😴", Mood::Tired),
    ("give yourself permission to do less today.", "warm", "🛋️", Mood::Tired),
    ("you can't pour from an empty cup. rest.", "gentle", "☕", Mood::Tired),

    // overwhelmed
    ("one small step is still a step forward.", "gentle", "🪴", Mood::Overwhelmed),
    ("you don't have to solve everything today.", "soft", "🌈", Mood::Overwhelmed),
    ("breathe. you're doing more than you realize.", "warm", "🌻", Mood::Overwhelmed),
    ("it's okay to ask for help. you're not alone.", "gentle", "🤝", Mood::Overwhelmed),
    ("take things one moment at a time.", "soft", "⏳", Mood::Overwhelmed),
    ("you're handling more than most people see.", "warm", "💪", Mood::Overwhelmed),
    ("break it down into smaller pieces. you've got this.", "gentle", "🧩", Mood::Overwhelmed),
    ("not everything needs your attention right now.", "soft", "🎯", Mood::Overwhelmed),
    ("pause. the world can wait for a moment.", "warm", "⏸️", Mood::Overwhelmed),
    ("you are not your to-do list.", "gentle", "📝", Mood::Overwhelmed),

    // numb
    ("feeling nothing is still feeling something.", "gentle", "🫧", Mood::Numb),
    ("you're still here. that matters.", "soft", "🌟", Mood::Numb),
    ("it's okay to just exist right now.", "warm", "🌊", Mood::Numb),
    ("sometimes the quiet is what we need.", "gentle", "🕊️", Mood::Numb),
    ("you don't have to feel anything specific.", "soft", "🌙", Mood::Numb),
    ("being here is enough. you are enough.", "warm", "💗", Mood::Numb),
    ("your worth isn't measured by how you feel.", "gentle", "⭐", Mood::Numb),
    ("emptiness can be a space for new things.", "soft", "🌱", Mood::Numb),
    ("you don't have to explain your feelings.", "warm", "🤫", Mood::Numb),
    ("just existing takes courage. you're brave.", "gentle", "🦁", Mood::Numb),

    // okay
    ("you're moving at your own pace, not anyone else's.", "gentle", "🦋", Mood::Okay),
    ("small victories still count as victories.", "soft", "🎉", Mood::Okay),
    ("you're doing your best, and that's beautiful.", "warm", "🌸", Mood::Okay),
    ("every moment is a fresh start if you want it to be.", "gentle", "🌅", Mood::Okay),
    ("you deserve moments of peace. this is one.", "soft", "☀️", Mood::Okay),
    ("you're allowed to feel content. embrace it.", "warm", "🌻", Mood::Okay),
    ("being okay is a gift. savor it.", "gentle", "🎁", Mood::Okay),
    ("you've made it through 100% of your hard days.", "soft", "💯", Mood::Okay),
    ("your calm is a strength, not complacency.", "warm", "🧘", Mood::Okay),
    ("appreciate the quiet moments between storms.", "gentle", "🌤️", Mood::Okay),
];

pub fn seed_reminders() -> Vec<Reminder> {
    SEED.iter()
        .map(|&(message, emotion, icon, category)| Reminder {
            message: message.to_string(),
            emotion: emotion.to_string(),
            icon: icon.to_string(),
            category,
        })
        .collect()
}
