use std::sync::Arc;

use anyhow::Result;

use super::{config::Config, store::ReminderStore};

pub struct AppState {
    pub store: ReminderStore,
    pub config: Config,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>> {
        let config = Config::load()?;
        let store = ReminderStore::seeded()?;

        Ok(Self::with_store(store, config))
    }

    pub fn with_store(store: ReminderStore, config: Config) -> Arc<Self> {
        Arc::new(Self { store, config })
    }
}
