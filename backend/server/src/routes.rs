use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use shared::{ApiInfo, Reminder, RemindersResponse};
use tracing::debug;

use crate::{error::AppError, state::AppState};

pub const ENDPOINTS: [&str; 4] = [
    "GET /api/reminder",
    "GET /api/reminders",
    "GET /api/reminders/random",
    "GET /api/reminders/category/:id",
];

pub async fn info_handler(State(state): State<Arc<AppState>>) -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Do You Need a Small Reminder? API".to_string(),
        total_reminders: state.store.count(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

pub async fn reminder_handler(State(state): State<Arc<AppState>>) -> Json<Reminder> {
    Json(state.store.get_random().clone())
}

pub async fn reminders_handler(State(state): State<Arc<AppState>>) -> Json<RemindersResponse> {
    Json(state.store.list_all())
}

pub async fn category_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Reminder>, AppError> {
    let reminder = state
        .store
        .get_random_by_category(&id)
        .inspect_err(|_| debug!("Rejected category {id:?}"))?;

    Ok(Json(reminder.clone()))
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
