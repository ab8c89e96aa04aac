//! Admin / dev dashboard handlers.
//!
//! An ad-hoc browser over the stored collections and the object store.
//! Every route requires the [`AdminAccess`] guard.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use raga_shared::ApiResponse;
use raga_shared::dto::CollectionInfo;

use crate::middleware::admin::AdminAccess;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::submissions::view_of;

const LOG_COUNT_WINDOW: u64 = 1000;

/// GET /api/admin/collections
pub async fn collections(
    _admin: AdminAccess,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let submissions = state.submissions.count().await?;
    let streaks = state.streaks.list_all().await?.len() as u64;
    // The log stream has no cheap count; report the tail window size.
    let logs = state.logs.tail(LOG_COUNT_WINDOW).await?.len() as u64;

    let info = vec![
        CollectionInfo {
            name: "submissions".to_string(),
            rows: submissions,
        },
        CollectionInfo {
            name: "streaks".to_string(),
            rows: streaks,
        },
        CollectionInfo {
            name: "logs".to_string(),
            rows: logs,
        },
    ];

    Ok(HttpResponse::Ok().json(ApiResponse::ok(info)))
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<u64>,
}

/// GET /api/admin/submissions
pub async fn list_submissions(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    params: web::Query<LimitParams>,
) -> AppResult<HttpResponse> {
    let limit = params.limit.unwrap_or(100);
    let submissions = state.submissions.list_recent(limit).await?;
    let views: Vec<_> = submissions.into_iter().map(view_of).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(views)))
}

/// DELETE /api/admin/submissions/{id}
pub async fn delete_submission(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let id: Uuid = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{id}' is not a submission id")))?;

    state.submissions.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/admin/streaks
pub async fn list_streaks(
    _admin: AdminAccess,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let streaks = state.streaks.list_all().await?;
    let views: Vec<_> = streaks.into_iter().map(super::streaks::response_of).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(views)))
}

/// GET /api/admin/logs
pub async fn logs(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    params: web::Query<LimitParams>,
) -> AppResult<HttpResponse> {
    let limit = params.limit.unwrap_or(100);
    let entries = state.logs.tail(limit).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(entries)))
}

#[derive(Debug, Deserialize)]
pub struct PrefixParams {
    #[serde(default)]
    pub prefix: String,
}

/// GET /api/admin/objects
pub async fn list_objects(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    params: web::Query<PrefixParams>,
) -> AppResult<HttpResponse> {
    let objects = state.store.list(&params.prefix).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(objects)))
}

/// GET /api/admin/objects/{key}
pub async fn get_object(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let key = path.into_inner();
    match state.store.get(&key).await? {
        Some(object) => Ok(HttpResponse::Ok()
            .content_type(object.content_type)
            .body(object.bytes)),
        None => Err(AppError::NotFound(format!("object '{key}'"))),
    }
}

/// PUT /api/admin/objects/{key}
///
/// Uploads a test asset; the body is stored verbatim under the key.
pub async fn put_object(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let key = path.into_inner();
    let content_type = req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    state.store.put(&key, &content_type, body.to_vec()).await?;
    Ok(HttpResponse::Created().finish())
}

/// DELETE /api/admin/objects/{key}
pub async fn delete_object(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.store.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
