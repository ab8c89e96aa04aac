//! Reading-streak handlers.

use actix_web::{HttpResponse, web};

use raga_core::domain::Streak;
use raga_shared::dto::StreakResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/streaks/{user_id}/read
pub async fn record_read(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("user id is required".to_string()));
    }

    let today = chrono::Utc::now().date_naive();
    let streak = state.streaks.record_read(&user_id, today).await?;

    Ok(HttpResponse::Ok().json(response_of(streak)))
}

/// GET /api/streaks/{user_id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    match state.streaks.find_by_user(&user_id).await? {
        Some(streak) => Ok(HttpResponse::Ok().json(response_of(streak))),
        None => Err(AppError::NotFound(format!("streak for '{user_id}'"))),
    }
}

pub(crate) fn response_of(streak: Streak) -> StreakResponse {
    StreakResponse {
        user_id: streak.user_id,
        count: streak.count,
        last_read_date: streak.last_read_date.to_string(),
    }
}
