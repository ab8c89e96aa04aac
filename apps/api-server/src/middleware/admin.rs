//! Admin guard extractor.
//!
//! The admin surface is internal tooling behind a static bearer token from
//! configuration. Identity and session handling proper stay delegated to
//! the managed identity provider; this is only a shared-secret gate.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use raga_shared::ErrorResponse;

use crate::state::AppState;

/// Proof that the request carried the admin token.
///
/// Use this in handlers to gate the admin surface:
/// ```ignore
/// async fn admin_route(_admin: AdminAccess) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AdminAccess;

/// Error type for admin guard failures.
#[derive(Debug)]
pub struct AdminAccessError;

impl std::fmt::Display for AdminAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "admin access denied")
    }
}

impl actix_web::ResponseError for AdminAccessError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = ErrorResponse::unauthorized()
            .with_detail("Provide the admin token as a Bearer token in the Authorization header.");
        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for AdminAccess {
    type Error = AdminAccessError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AdminAccessError));
        };

        // No configured token means the admin surface is disabled outright.
        let Some(expected) = state.admin_token.as_deref() else {
            return ready(Err(AdminAccessError));
        };

        let presented = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match presented {
            Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => {
                ready(Ok(AdminAccess))
            }
            _ => ready(Err(AdminAccessError)),
        }
    }
}

/// Length-independent comparison so the token cannot be probed byte by
/// byte through response timing.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_time_eq_matches_equality() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(!constant_time_eq(b"secret", b"secre7"));
        assert!(!constant_time_eq(b"secret", b"longer-secret"));
    }
}
