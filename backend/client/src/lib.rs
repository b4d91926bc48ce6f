//! # Reminder Client
//!
//! Terminal front-end for the reminder server.
//!
//! - `source`: one HTTP request per reminder against the server's `/api` routes
//! - `controller`: per-mood session that avoids showing the same reminder twice
//! - `affirmation`: the affirmation of the day
//!
//! ## Configuration
//! - `REMINDER_API_URL` or `--base-url`: server base path, default `http://localhost:3000/api`
//! - `REMINDER_TIMEOUT_SECS` or `--timeout-secs`: per request timeout
//! - `RUST_LOG`: tracing filter
pub mod affirmation;
pub mod controller;
pub mod error;
pub mod source;

pub use controller::{ReminderController, View};
pub use error::ClientError;
pub use source::{HttpSource, ReminderSource};
