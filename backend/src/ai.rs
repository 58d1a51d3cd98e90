//! Client for the hosted article generation model.
//!
//! The model is asked for strict JSON matching [`GeneratedArticle`]. A
//! response that does not parse into that shape is an error, never a
//! partially filled draft.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use folio_shared::GeneratedArticle;

use crate::config::GenerationConfig;

const GENERATION_TIMEOUT_SECONDS: u64 = 60;

const PROMPT_GUIDELINES: &str = r#"The article should be insightful and sound like it's written by a senior software engineer.

Return the response in JSON format with the following structure:
{
  "title": "A catchy and click-worthy title",
  "excerpt": "A short 2-sentence hook for the article",
  "category": "The most relevant tech category (e.g., AI, Frontend, Career, Architecture)",
  "content": ["paragraph 1", "paragraph 2", "paragraph 3", "paragraph 4", "paragraph 5"],
  "imageSearchTerm": "A single simple English word related to the topic for an image search (e.g. 'code', 'robot', 'server', 'laptop')"
}"#;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct RequestGenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Talks to the generation API configured at startup.
pub struct ArticleGenerator {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl ArticleGenerator {
    /// Builds the client for the configured endpoint.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(GENERATION_TIMEOUT_SECONDS))
            .build()
            .context("failed to build generation http client")?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Requests a complete article draft for the given keywords.
    pub async fn generate(&self, keywords: &[String]) -> Result<GeneratedArticle> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: build_prompt(keywords),
                }],
            }],
            generation_config: RequestGenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("failed to call generation api")?
            .error_for_status()
            .context("generation api returned bad status")?;

        let payload: GenerateContentResponse = response
            .json()
            .await
            .context("failed to decode generation response json")?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.trim().is_empty())
            .context("generation response text is empty")?;

        let draft: GeneratedArticle = serde_json::from_str(text.trim())
            .context("generation response is not a complete article")?;

        Ok(draft)
    }
}

fn build_prompt(keywords: &[String]) -> String {
    format!(
        "Write a professional, engaging, and high-quality tech blog article based on these keywords: {}.\n{}",
        keywords.join(", "),
        PROMPT_GUIDELINES
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator_for(server: &MockServer) -> ArticleGenerator {
        ArticleGenerator::new(&GenerationConfig {
            api_base: server.uri(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        })
        .unwrap()
    }

    fn draft_json() -> serde_json::Value {
        json!({
            "title": "Async Rust in Production",
            "excerpt": "What actually breaks. And how to see it coming.",
            "category": "Architecture",
            "content": ["First.", "Second.", "Third."],
            "imageSearchTerm": "server"
        })
    }

    fn model_reply(text: String) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[tokio::test]
    async fn parses_a_well_formed_draft() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(model_reply(draft_json().to_string())),
            )
            .mount(&server)
            .await;

        let keywords = vec!["rust".to_string(), "async".to_string(), "tokio".to_string()];
        let draft = generator_for(&server).generate(&keywords).await.unwrap();
        assert_eq!(draft.title, "Async Rust in Production");
        assert_eq!(draft.image_search_term, "server");
        assert_eq!(draft.content.len(), 3);
    }

    #[tokio::test]
    async fn prompt_contains_every_keyword() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model:generateContent"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(model_reply(draft_json().to_string())),
            )
            .expect(1)
            .mount(&server)
            .await;

        let keywords = vec!["wasm".to_string(), "yew".to_string(), "spa".to_string()];
        generator_for(&server).generate(&keywords).await.unwrap();

        let prompt = build_prompt(&keywords);
        assert!(prompt.contains("wasm, yew, spa"));
        assert!(prompt.contains("imageSearchTerm"));
    }

    #[tokio::test]
    async fn rejects_a_draft_missing_required_fields() {
        let server = MockServer::start().await;
        let mut incomplete = draft_json();
        incomplete.as_object_mut().unwrap().remove("category");
        Mock::given(method("POST"))
            .and(path("/models/test-model:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(model_reply(incomplete.to_string())),
            )
            .mount(&server)
            .await;

        let keywords = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = generator_for(&server).generate(&keywords).await.unwrap_err();
        assert!(err.to_string().contains("not a complete article"));
    }

    #[tokio::test]
    async fn rejects_an_empty_candidate_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let keywords = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = generator_for(&server).generate(&keywords).await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[tokio::test]
    async fn surfaces_upstream_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model:generateContent"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let keywords = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = generator_for(&server).generate(&keywords).await.unwrap_err();
        assert!(err.to_string().contains("bad status"));
    }
}
