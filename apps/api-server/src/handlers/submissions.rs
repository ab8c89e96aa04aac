//! Contributor submission handlers.

use actix_web::{HttpResponse, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use uuid::Uuid;

use raga_core::domain::{NewSubmission, Submission, SubmissionKind, validate_photo};
use raga_shared::ApiResponse;
use raga_shared::dto::{SubmissionOutcome, SubmissionRequest, SubmissionView};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/submissions
///
/// Validation failures come back as a structured outcome, never as a bare
/// transport error; only storage trouble surfaces as a 5xx.
pub async fn submit(
    state: web::Data<AppState>,
    body: web::Json<SubmissionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let kind = match req.kind.as_str() {
        "music" => SubmissionKind::Music,
        _ => SubmissionKind::Artist,
    };

    let form = NewSubmission {
        kind,
        artist_name: req.artist_name,
        email: req.email,
        genre: req.genre,
        bio: req.bio,
        portfolio_url: req.portfolio_url,
        track_url: req.track_url,
    };

    let mut errors = form.validate();

    // Decode the optional press photo up front so its size can be checked
    // against the real byte count, not the base64 length.
    let photo = match &req.photo {
        Some(upload) => match BASE64.decode(&upload.data) {
            Ok(bytes) => {
                errors.extend(validate_photo(&upload.content_type, bytes.len()));
                Some((upload.content_type.clone(), bytes))
            }
            Err(_) => {
                errors.push("photo data is not valid base64".to_string());
                None
            }
        },
        None => None,
    };

    if !errors.is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(SubmissionOutcome::rejected(errors)));
    }

    let photo_key = match photo {
        Some((content_type, bytes)) => {
            let key = format!(
                "press-photos/{}.{}",
                Uuid::new_v4(),
                extension_for(&content_type)
            );
            state.store.put(&key, &content_type, bytes).await?;
            Some(key)
        }
        None => None,
    };

    let submission = form.into_submission(photo_key);
    let saved = state.submissions.save(submission).await?;

    tracing::info!(id = %saved.id, kind = saved.kind.as_str(), "submission accepted");

    Ok(HttpResponse::Created().json(SubmissionOutcome::accepted(saved.id.to_string())))
}

/// GET /api/submissions
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let submissions = state.submissions.list_recent(100).await?;
    let views: Vec<SubmissionView> = submissions.into_iter().map(view_of).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(views)))
}

pub(crate) fn view_of(submission: Submission) -> SubmissionView {
    SubmissionView {
        id: submission.id.to_string(),
        kind: submission.kind.as_str().to_string(),
        artist_name: submission.artist_name,
        email: submission.email,
        genre: submission.genre,
        bio: submission.bio,
        portfolio_url: submission.portfolio_url,
        track_url: submission.track_url,
        photo_key: submission.photo_key,
        submitted_at: submission.submitted_at.to_rfc3339(),
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}
