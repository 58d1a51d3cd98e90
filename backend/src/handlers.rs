use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::{Deserialize, Serialize};

use folio_shared::keywords::MIN_KEYWORDS;
use folio_shared::{BlogPost, GeneratedArticle, NewBlogPost};

use crate::auth::{self, AdminSession};
use crate::contact::ContactMessage;
use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<BlogPost>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub deleted: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub passphrase: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub sent: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /api/posts`
///
/// An unreachable or unconfigured store degrades to an empty list so the
/// public site can fall back to its bundled samples.
pub async fn list_posts(State(state): State<AppState>) -> Json<PostListResponse> {
    let posts = match state.store() {
        Some(store) => match store.list_posts().await {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!("Failed to list articles, serving none: {}", err);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let total = posts.len();
    Json(PostListResponse { posts, total })
}

/// `POST /api/posts`
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewBlogPost>,
) -> Result<(StatusCode, Json<CreatePostResponse>), (StatusCode, Json<ErrorResponse>)> {
    let _admin = require_admin(&state, &headers)?;

    let Some(store) = state.store() else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Article store is not configured",
        ));
    };

    let mut post = payload
        .normalized()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, &e.to_string()))?;
    if post.date.is_empty() {
        post.date = publish_date_today();
    }

    let id = store
        .create_post(post)
        .await
        .map_err(|e| internal_error("Failed to save article", e))?;

    Ok((StatusCode::CREATED, Json(CreatePostResponse { id })))
}

/// `DELETE /api/posts/:id`
///
/// Deletion is permanent. There is no trash tier to restore from.
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeletePostResponse>, (StatusCode, Json<ErrorResponse>)> {
    let _admin = require_admin(&state, &headers)?;

    let Some(store) = state.store() else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Article store is not configured",
        ));
    };

    match store.delete_post(&id).await {
        Ok(()) => Ok(Json(DeletePostResponse { deleted: true })),
        Err(StoreError::NotFound(_)) => Err(error_response(
            StatusCode::NOT_FOUND,
            "Article not found",
        )),
        Err(err) => Err(internal_error("Failed to delete article", err)),
    }
}

/// `POST /api/admin/login`
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.gate().login(&payload.passphrase) {
        Some(token) => Ok(Json(LoginResponse { token })),
        None => Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Invalid passphrase",
        )),
    }
}

/// `POST /api/admin/logout`
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<LogoutResponse> {
    let revoked = auth::bearer_token(&headers)
        .map(|token| state.gate().logout(token))
        .unwrap_or(false);
    Json(LogoutResponse { revoked })
}

/// `POST /api/generate`
pub async fn generate_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GeneratedArticle>, (StatusCode, Json<ErrorResponse>)> {
    let _admin = require_admin(&state, &headers)?;

    let keywords: Vec<String> = payload
        .keywords
        .iter()
        .map(|keyword| keyword.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect();
    if keywords.len() < MIN_KEYWORDS {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "At least 3 keywords are required",
        ));
    }

    let Some(generator) = state.generator() else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Article generation is not configured",
        ));
    };

    match generator.generate(&keywords).await {
        Ok(draft) => Ok(Json(draft)),
        Err(err) => Err(upstream_error("Article generation failed", err)),
    }
}

/// `POST /api/contact`
pub async fn send_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessage>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(relay) = state.contact() else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Contact relay is not configured",
        ));
    };

    let message = payload
        .normalized()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, &e.to_string()))?;

    match relay.forward(&message).await {
        Ok(()) => Ok(Json(ContactResponse { sent: true })),
        Err(err) => Err(upstream_error("Failed to send message", err)),
    }
}

fn require_admin(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AdminSession, (StatusCode, Json<ErrorResponse>)> {
    auth::bearer_token(headers)
        .and_then(|token| state.gate().authorize(token))
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "Admin session required"))
}

// Publish dates are display strings, not timestamps. Ordering comes from
// the store's createdAt field.
fn publish_date_today() -> String {
    chrono::Utc::now().format("%B %-d, %Y").to_string()
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            code: status.as_u16(),
        }),
    )
}

fn internal_error(message: &str, err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("{}: {}", message, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn upstream_error(message: &str, err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("{}: {}", message, err);
    error_response(StatusCode::BAD_GATEWAY, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPostStore;
    use axum::http::header::AUTHORIZATION;
    use std::sync::Arc;

    const TEST_PASSPHRASE: &str = "letmein";

    fn state_with_store() -> AppState {
        AppState::for_tests(Some(Arc::new(MemoryPostStore::new())), TEST_PASSPHRASE)
    }

    fn state_without_store() -> AppState {
        AppState::for_tests(None, TEST_PASSPHRASE)
    }

    async fn admin_headers(state: &AppState) -> HeaderMap {
        let response = login(
            State(state.clone()),
            Json(LoginRequest {
                passphrase: TEST_PASSPHRASE.to_string(),
            }),
        )
        .await
        .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", response.0.token).parse().unwrap(),
        );
        headers
    }

    fn article_payload(title: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            excerpt: "A short hook.".to_string(),
            category: "Rust".to_string(),
            image: String::new(),
            read_time: String::new(),
            date: "March 1, 2026".to_string(),
            content: vec!["One paragraph.".to_string()],
        }
    }

    #[tokio::test]
    async fn listing_is_empty_without_a_store() {
        let response = list_posts(State(state_without_store())).await;
        assert_eq!(response.0.total, 0);
        assert!(response.0.posts.is_empty());
    }

    #[tokio::test]
    async fn create_requires_a_live_admin_token() {
        let state = state_with_store();
        let err = create_post(
            State(state),
            HeaderMap::new(),
            Json(article_payload("Unauthorized")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_without_a_store_is_service_unavailable() {
        let state = state_without_store();
        let headers = admin_headers(&state).await;
        let err = create_post(State(state), headers, Json(article_payload("Nowhere")))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn create_then_list_returns_newest_first() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        create_post(
            State(state.clone()),
            headers.clone(),
            Json(article_payload("Older")),
        )
        .await
        .unwrap();
        create_post(
            State(state.clone()),
            headers,
            Json(article_payload("Newer")),
        )
        .await
        .unwrap();

        let response = list_posts(State(state)).await;
        assert_eq!(response.0.total, 2);
        assert_eq!(response.0.posts[0].title, "Newer");
        assert_eq!(response.0.posts[1].title, "Older");
    }

    #[tokio::test]
    async fn create_rejects_content_of_only_blank_paragraphs() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        let mut payload = article_payload("Blank body");
        payload.content = vec!["   ".to_string(), String::new()];
        let err = create_post(State(state), headers, Json(payload))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_stamps_a_date_when_the_payload_has_none() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        let mut payload = article_payload("Undated");
        payload.date = String::new();
        create_post(State(state.clone()), headers, Json(payload))
            .await
            .unwrap();

        let response = list_posts(State(state)).await;
        assert_eq!(response.0.posts[0].date, publish_date_today());
    }

    #[tokio::test]
    async fn delete_removes_the_article_permanently() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        let created = create_post(
            State(state.clone()),
            headers.clone(),
            Json(article_payload("Doomed")),
        )
        .await
        .unwrap();
        let id = created.1 .0.id;

        delete_post(State(state.clone()), headers, Path(id.clone()))
            .await
            .unwrap();

        let response = list_posts(State(state)).await;
        assert!(response.0.posts.iter().all(|post| post.id != id));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        let err = delete_post(State(state), headers, Path("missing".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn login_rejects_the_wrong_passphrase() {
        let err = login(
            State(state_with_store()),
            Json(LoginRequest {
                passphrase: "guess".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logout_revokes_the_session() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        let response = logout(State(state.clone()), headers.clone()).await;
        assert!(response.0.revoked);

        let err = create_post(State(state), headers, Json(article_payload("Stale token")))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn generate_requires_three_usable_keywords() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        let err = generate_article(
            State(state),
            headers,
            Json(GenerateRequest {
                keywords: vec!["rust".to_string(), "  ".to_string(), String::new()],
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_without_an_api_key_is_service_unavailable() {
        let state = state_with_store();
        let headers = admin_headers(&state).await;

        let err = generate_article(
            State(state),
            headers,
            Json(GenerateRequest {
                keywords: vec!["rust".to_string(), "wasm".to_string(), "yew".to_string()],
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn contact_without_a_webhook_is_service_unavailable() {
        let err = send_contact(
            State(state_with_store()),
            Json(ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hi.".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
    }
}
