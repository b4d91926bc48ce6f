//! # Reminder Store
//!
//! Immutable corpus of reminders plus the random selectors behind the API.
//!
//! ## Layout
//! - `reminders`: every record, in seed order
//! - `by_category`: mood to indices into `reminders`, built once at startup
//!
//! Every mood must own at least one reminder. A corpus that breaks this is
//! rejected when the store is built, so selection never sees an empty pool.
//!
//! Selection takes no locks. The store is only ever read after construction
//! and each pick draws from the calling thread's RNG.
use std::collections::HashMap;

use rand::Rng;
use shared::{InvalidMood, Mood, Reminder, RemindersResponse};
use thiserror::Error;

use crate::seed::seed_reminders;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Reminder corpus is empty")]
    Empty,

    #[error("No reminders seeded for category {0}")]
    MissingCategory(Mood),
}

pub struct ReminderStore {
    reminders: Vec<Reminder>,
    by_category: HashMap<Mood, Vec<usize>>,
}

impl ReminderStore {
    pub fn new(reminders: Vec<Reminder>) -> Result<Self, StoreError> {
        if reminders.is_empty() {
            return Err(StoreError::Empty);
        }

        let mut by_category: HashMap<Mood, Vec<usize>> = HashMap::new();
        for (index, reminder) in reminders.iter().enumerate() {
            by_category.entry(reminder.category).or_default().push(index);
        }

        if let Some(&missing) = Mood::ALL
            .iter()
            .find(|mood| !by_category.contains_key(*mood))
        {
            return Err(StoreError::MissingCategory(missing));
        }

        Ok(Self {
            reminders,
            by_category,
        })
    }

    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(seed_reminders())
    }

    pub fn count(&self) -> usize {
        self.reminders.len()
    }

    pub fn get_random(&self) -> &Reminder {
        self.get_random_with(&mut rand::rng())
    }

    pub fn get_random_with<R: Rng>(&self, rng: &mut R) -> &Reminder {
        &self.reminders[rng.random_range(0..self.reminders.len())]
    }

    pub fn get_random_by_category(&self, category: &str) -> Result<&Reminder, InvalidMood> {
        self.get_random_by_category_with(category, &mut rand::rng())
    }

    pub fn get_random_by_category_with<R: Rng>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Result<&Reminder, InvalidMood> {
        let mood: Mood = category.parse()?;

        // non-empty, checked in new()
        let pool = &self.by_category[&mood];

        Ok(&self.reminders[pool[rng.random_range(0..pool.len())]])
    }

    pub fn list_all(&self) -> RemindersResponse {
        RemindersResponse {
            reminders: self.reminders.clone(),
            count: self.reminders.len(),
        }
    }
}
