//! Submission entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use raga_core::domain::{Submission, SubmissionKind};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kind: String,
    pub artist_name: String,
    pub email: String,
    pub genre: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub portfolio_url: Option<String>,
    pub track_url: String,
    pub photo_key: Option<String>,
    pub submitted_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Submission.
impl From<Model> for Submission {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            kind: match model.kind.as_str() {
                "music" => SubmissionKind::Music,
                _ => SubmissionKind::Artist,
            },
            artist_name: model.artist_name,
            email: model.email,
            genre: model.genre,
            bio: model.bio,
            portfolio_url: model.portfolio_url,
            track_url: model.track_url,
            photo_key: model.photo_key,
            submitted_at: model.submitted_at.into(),
        }
    }
}

/// Conversion from the domain Submission to a SeaORM ActiveModel.
impl From<Submission> for ActiveModel {
    fn from(submission: Submission) -> Self {
        Self {
            id: Set(submission.id),
            kind: Set(submission.kind.as_str().to_string()),
            artist_name: Set(submission.artist_name),
            email: Set(submission.email),
            genre: Set(submission.genre),
            bio: Set(submission.bio),
            portfolio_url: Set(submission.portfolio_url),
            track_url: Set(submission.track_url),
            photo_key: Set(submission.photo_key),
            submitted_at: Set(submission.submitted_at.into()),
        }
    }
}
