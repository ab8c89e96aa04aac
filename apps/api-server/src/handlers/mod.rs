//! HTTP handlers and route configuration.

mod admin;
mod content;
mod health;
mod streaks;
mod submissions;

use actix_web::web;

use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    let submissions_scope = web::scope("/submissions")
        .service(
            web::resource("")
                .route(web::post().to(submissions::submit))
                .route(web::get().to(submissions::list)),
        )
        .wrap(RateLimitMiddleware::new(state.limiter.clone()));

    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Normalized content feed
            .service(
                web::scope("/content")
                    .route("/posts", web::get().to(content::list_posts))
                    .route("/posts/{slug}", web::get().to(content::get_post))
                    .route("/events", web::get().to(content::list_events))
                    .route("/events/{slug}", web::get().to(content::get_event))
                    .route("/categories", web::get().to(content::categories))
                    .route("/tags", web::get().to(content::tags)),
            )
            // Contributor submissions (POST is rate limited)
            .service(submissions_scope)
            // Reading streaks
            .service(
                web::scope("/streaks")
                    .route("/{user_id}", web::get().to(streaks::get))
                    .route("/{user_id}/read", web::post().to(streaks::record_read)),
            )
            // Internal dashboard
            .service(
                web::scope("/admin")
                    .route("/collections", web::get().to(admin::collections))
                    .route("/submissions", web::get().to(admin::list_submissions))
                    .route(
                        "/submissions/{id}",
                        web::delete().to(admin::delete_submission),
                    )
                    .route("/streaks", web::get().to(admin::list_streaks))
                    .route("/logs", web::get().to(admin::logs))
                    .route("/objects", web::get().to(admin::list_objects))
                    .service(
                        web::resource("/objects/{key:.*}")
                            .route(web::get().to(admin::get_object))
                            .route(web::put().to(admin::put_object))
                            .route(web::delete().to(admin::delete_object)),
                    ),
            ),
    );
}
