//! # Shared Payloads
//!
//! Types passed between the reminder server and its clients.
//!
//! ## Reminder
//! - message (**string**): the comforting text itself, unique within the corpus
//! - emotion (**string**): free text tone tag such as "gentle" or "warm"
//! - icon (**string**): a single emoji
//! - category (**mood**): lowercase mood name
//!
//! ## Mood
//! Closed set of `sad`, `tired`, `overwhelmed`, `numb` and `okay`. Used by the
//! client as the selected mood and by the server as the category filter key.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sad,
    Tired,
    Overwhelmed,
    Numb,
    #[default]
    Okay,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Sad,
        Mood::Tired,
        Mood::Overwhelmed,
        Mood::Numb,
        Mood::Okay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Sad => "sad",
            Mood::Tired => "tired",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Numb => "numb",
            Mood::Okay => "okay",
        }
    }

    /// Name shown to the user when picking a mood.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Overwhelmed => "anxious",
            other => other.as_str(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mood::Sad => "💧",
            Mood::Tired => "🌙",
            Mood::Overwhelmed => "🌊",
            Mood::Numb => "🫧",
            Mood::Okay => "🌸",
        }
    }

    /// `okay` draws from the whole pool instead of a single category.
    pub fn is_neutral(self) -> bool {
        self == Mood::Okay
    }

    pub fn valid_options() -> String {
        Mood::ALL
            .iter()
            .map(|mood| mood.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid category. Valid options: {options}", options = Mood::valid_options())]
pub struct InvalidMood(pub String);

impl FromStr for Mood {
    type Err = InvalidMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| InvalidMood(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub message: String,
    pub emotion: String,
    pub icon: String,
    pub category: Mood,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemindersResponse {
    pub reminders: Vec<Reminder>,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    pub message: String,
    pub total_reminders: usize,
    pub endpoints: Vec<String>,
}
