use folio_shared::{BlogPost, GeneratedArticle, NewBlogPost};
use gloo_net::http::Request;
use js_sys::Date;
use serde::{Deserialize, Serialize};

// API base URL - read from the environment at compile time so a release
// bundle can point at a deployed backend.
pub const API_BASE: &str = match option_env!("FOLIO_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

#[derive(Debug, Deserialize)]
struct PostListResponse {
    posts: Vec<BlogPost>,
    #[allow(dead_code)]
    total: usize,
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    passphrase: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    keywords: &'a [String],
}

/// Contact-form payload relayed through the backend.
#[derive(Debug, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Fetch every published post, newest first. The store already orders by
/// creation time, so no client-side sort is needed.
pub async fn fetch_posts() -> Result<Vec<BlogPost>, String> {
    let url = format!("{}/posts?_ts={}", API_BASE, Date::now() as u64);

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let json_response: PostListResponse =
        response.json().await.map_err(|e| format!("Parse error: {:?}", e))?;

    Ok(json_response.posts)
}

/// Exchange the admin passphrase for a session token. `Ok(None)` means the
/// passphrase was rejected, everything else failed some other way.
pub async fn login(passphrase: &str) -> Result<Option<String>, String> {
    let url = format!("{}/admin/login", API_BASE);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(&LoginRequest {
            passphrase,
        })
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if response.status() == 401 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let json_response: LoginResponse =
        response.json().await.map_err(|e| format!("Parse error: {:?}", e))?;

    Ok(Some(json_response.token))
}

/// Revoke an admin session token. Best effort; the caller drops its copy
/// either way.
pub async fn logout(token: &str) -> Result<(), String> {
    let url = format!("{}/admin/logout", API_BASE);

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

/// Publish a new post. Returns the id the store assigned.
pub async fn create_post(token: &str, post: &NewBlogPost) -> Result<String, String> {
    let url = format!("{}/posts", API_BASE);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .json(post)
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let json_response: CreatePostResponse =
        response.json().await.map_err(|e| format!("Parse error: {:?}", e))?;

    Ok(json_response.id)
}

/// Permanently delete a post by id.
pub async fn delete_post(token: &str, id: &str) -> Result<(), String> {
    let url = format!("{}/posts/{}", API_BASE, id);

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

/// Ask the backend to draft an article from the keyword list. The draft
/// only pre-fills the authoring form; nothing is persisted here.
pub async fn generate_article(
    token: &str,
    keywords: &[String],
) -> Result<GeneratedArticle, String> {
    let url = format!("{}/generate", API_BASE);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .json(&GenerateRequest {
            keywords,
        })
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {:?}", e))
}

/// Relay a contact-form message through the backend webhook.
pub async fn send_contact(request: &ContactRequest) -> Result<(), String> {
    let url = format!("{}/contact", API_BASE);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
