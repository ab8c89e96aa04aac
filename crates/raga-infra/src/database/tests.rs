#[cfg(test)]
mod tests {
    use crate::database::entity::{log_entry, submission};
    use crate::database::postgres_repo::{PostgresLogRepository, PostgresSubmissionRepository};
    use raga_core::domain::Submission;
    use raga_core::ports::{BaseRepository, LogRepository, SubmissionRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn submission_model(name: &str) -> submission::Model {
        submission::Model {
            id: uuid::Uuid::new_v4(),
            kind: "artist".to_owned(),
            artist_name: name.to_owned(),
            email: format!("{name}@example.com"),
            genre: "khayal".to_owned(),
            bio: "Bio".to_owned(),
            portfolio_url: None,
            track_url: "https://example.com/track".to_owned(),
            photo_key: None,
            submitted_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_submission_by_id() {
        let model = submission_model("Ravi");
        let id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresSubmissionRepository::new(db);

        let result: Option<Submission> = repo.find_by_id(id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.artist_name, "Ravi");
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn test_list_recent_maps_rows_in_order() {
        let first = submission_model("Newer");
        let second = submission_model("Older");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first, second]])
            .into_connection();

        let repo = PostgresSubmissionRepository::new(db);

        let listed = repo.list_recent(10).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].artist_name, "Newer");
    }

    #[tokio::test]
    async fn test_log_tail_maps_rows() {
        let model = log_entry::Model {
            id: uuid::Uuid::new_v4(),
            level: "WARN".to_owned(),
            target: "raga_infra::wp".to_owned(),
            message: "content fetch failed at transport level".to_owned(),
            logged_at: chrono::Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresLogRepository::new(db);

        let tail = repo.tail(5).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].level, "WARN");
    }
}
