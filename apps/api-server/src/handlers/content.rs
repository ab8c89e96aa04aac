//! Content handlers - the normalized editorial feed.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use raga_core::domain::ContentKind;
use raga_core::ports::ContentQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query filters accepted on listing routes, mapped onto the upstream
/// parameters. Absent fields fall through to the kind's defaults.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub per_page: Option<u32>,
    pub categories: Option<u64>,
    pub tags: Option<u64>,
    pub search: Option<String>,
}

impl ListParams {
    fn into_query(self) -> ContentQuery {
        let mut query = ContentQuery::new();
        if let Some(per_page) = self.per_page {
            query = query.per_page(per_page);
        }
        if let Some(category) = self.categories {
            query = query.category(category);
        }
        if let Some(tag) = self.tags {
            query = query.tag(tag);
        }
        if let Some(search) = self.search {
            query = query.search(search);
        }
        query
    }
}

/// GET /api/content/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let page = state
        .content
        .list(ContentKind::Post, params.into_inner().into_query())
        .await;
    HttpResponse::Ok().json(page)
}

/// GET /api/content/events
pub async fn list_events(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let page = state
        .content
        .list(ContentKind::Event, params.into_inner().into_query())
        .await;
    HttpResponse::Ok().json(page)
}

/// GET /api/content/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    match state.content.find_by_slug(ContentKind::Post, &slug).await {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(AppError::NotFound(format!("post '{slug}'"))),
    }
}

/// GET /api/content/events/{slug}
pub async fn get_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    match state.content.find_by_slug(ContentKind::Event, &slug).await {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(AppError::NotFound(format!("event '{slug}'"))),
    }
}

/// GET /api/content/categories
pub async fn categories(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.content.categories().await)
}

/// GET /api/content/tags
pub async fn tags(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.content.tags().await)
}
