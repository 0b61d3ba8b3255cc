use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::json;

use crate::{
    models::content_models::{TeamMember, Testimonial},
    repositories::content_repository::RepositoryError,
    AppState,
};

type ApiError = (StatusCode, Json<serde_json::Value>);

fn database_error(what: &str, e: RepositoryError) -> ApiError {
    tracing::error!("Failed to load {}: {}", what, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": format!("Database error: {}", e)}))
    )
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// Unmatched `/api/*` paths, so they never fall through to the frontend.
pub async fn api_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}

pub async fn get_team_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    let members = state.content.list_team_members()
        .map_err(|e| database_error("team members", e))?;
    tracing::debug!("Returning {} team members", members.len());
    Ok(Json(members))
}

pub async fn get_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let quotes = state.content.list_testimonials()
        .map_err(|e| database_error("testimonials", e))?;
    tracing::debug!("Returning {} testimonials", quotes.len());
    Ok(Json(quotes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::content_repository::MockContentStore;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn member(id: i32, name: &str) -> TeamMember {
        TeamMember {
            id,
            name: name.to_string(),
            role: "Designer".to_string(),
            bio: None,
            image_url: Some("/assets/team/placeholder.png".to_string()),
            created_at: 1_700_000_000,
        }
    }

    async fn get_json(store: MockContentStore, uri: &str) -> (StatusCode, serde_json::Value) {
        let state = Arc::new(AppState { content: Arc::new(store) });
        let response = crate::api_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn team_members_are_passed_through() {
        let mut store = MockContentStore::new();
        store.expect_list_team_members()
            .times(1)
            .returning(|| Ok(vec![member(1, "Ada"), member(2, "Linus"), member(3, "Grace")]));

        let (status, body) = get_json(store, "/api/team-members").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["name"], "Ada");
        assert_eq!(rows[0]["bio"], serde_json::Value::Null);
        assert_eq!(rows[2]["image_url"], "/assets/team/placeholder.png");
    }

    #[tokio::test]
    async fn testimonials_are_passed_through() {
        let mut store = MockContentStore::new();
        store.expect_list_testimonials()
            .times(1)
            .returning(|| Ok(vec![Testimonial {
                id: 7,
                author: "Jordan".to_string(),
                role: Some("CTO".to_string()),
                company: None,
                quote: "Fast and careful.".to_string(),
                created_at: 1_700_000_000,
            }]));

        let (status, body) = get_json(store, "/api/testimonials").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{
            "id": 7,
            "author": "Jordan",
            "role": "CTO",
            "company": null,
            "quote": "Fast and careful.",
            "created_at": 1_700_000_000
        }]));
    }

    #[tokio::test]
    async fn store_failure_becomes_internal_error() {
        let mut store = MockContentStore::new();
        store.expect_list_testimonials()
            .times(1)
            .returning(|| Err(RepositoryError::Query(diesel::result::Error::NotFound)));

        let (status, body) = get_json(store, "/api/testimonials").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("Database error"));
    }

    #[tokio::test]
    async fn empty_table_is_an_empty_array() {
        let mut store = MockContentStore::new();
        store.expect_list_team_members().returning(|| Ok(Vec::new()));

        let (status, body) = get_json(store, "/api/team-members").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let state = Arc::new(AppState { content: Arc::new(MockContentStore::new()) });
        let response = crate::api_router(state)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }
}
