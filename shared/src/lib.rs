//! Data model shared between the folio backend and frontend.

use serde::{Deserialize, Serialize};

pub mod content;
pub mod keywords;
pub mod pagination;

/// One published article, as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Store-assigned opaque id.
    pub id: String,
    /// Article headline.
    pub title: String,
    /// Short teaser shown on cards and the detail lede.
    pub excerpt: String,
    /// Single free-form category label.
    pub category: String,
    /// Cover image URL.
    pub image: String,
    /// Display label such as "4 min read".
    #[serde(rename = "readTime")]
    pub read_time: String,
    /// Display date string, stamped at publish time.
    pub date: String,
    /// Body paragraphs, in order.
    pub content: Vec<String>,
}

/// Creation payload: every [`BlogPost`] field except the store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBlogPost {
    /// Article headline.
    pub title: String,
    /// Short teaser shown on cards and the detail lede.
    pub excerpt: String,
    /// Single free-form category label.
    pub category: String,
    /// Cover image URL; blank gets the default stock cover.
    pub image: String,
    /// Display label; blank gets [`content::DEFAULT_READ_TIME`].
    #[serde(rename = "readTime")]
    pub read_time: String,
    /// Display date; blank is stamped server-side at publish time.
    pub date: String,
    /// Body paragraphs, in order.
    pub content: Vec<String>,
}

/// AI draft. Only ever pre-fills the authoring form; a human submits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    /// Suggested headline.
    pub title: String,
    /// Suggested teaser.
    pub excerpt: String,
    /// Suggested category label.
    pub category: String,
    /// Drafted body paragraphs.
    pub content: Vec<String>,
    /// Single search term for deriving a stock cover image.
    #[serde(rename = "imageSearchTerm")]
    pub image_search_term: String,
}

/// Why a creation payload was rejected at the gateway boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPost {
    /// Title was blank.
    #[error("title is required")]
    MissingTitle,
    /// Excerpt was blank.
    #[error("excerpt is required")]
    MissingExcerpt,
    /// Category was blank.
    #[error("category is required")]
    MissingCategory,
    /// No paragraph survived blank filtering.
    #[error("content must contain at least one paragraph")]
    EmptyContent,
}

/// Chooses what the public blog surfaces render: the fetched list when it
/// has content, the bundled fallback otherwise. A failed fetch and an
/// empty store both fall back, so the pages never go blank while fallback
/// posts exist.
pub fn posts_or<E>(fetched: Result<Vec<BlogPost>, E>, fallback: Vec<BlogPost>) -> Vec<BlogPost> {
    match fetched {
        Ok(posts) if !posts.is_empty() => posts,
        _ => fallback,
    }
}

impl NewBlogPost {
    /// Trims every field, drops blank paragraphs, fills the default stock
    /// image, then checks the required fields. All persisted posts go
    /// through here, so malformed input is rejected before it reaches the
    /// store.
    pub fn normalized(self) -> Result<NewBlogPost, InvalidPost> {
        let title = self.title.trim().to_string();
        let excerpt = self.excerpt.trim().to_string();
        let category = self.category.trim().to_string();
        let image = {
            let trimmed = self.image.trim();
            if trimmed.is_empty() {
                content::DEFAULT_POST_IMAGE.to_string()
            } else {
                trimmed.to_string()
            }
        };
        let read_time = {
            let trimmed = self.read_time.trim();
            if trimmed.is_empty() {
                content::DEFAULT_READ_TIME.to_string()
            } else {
                trimmed.to_string()
            }
        };
        let content: Vec<String> = self
            .content
            .iter()
            .map(|paragraph| paragraph.trim().to_string())
            .filter(|paragraph| !paragraph.is_empty())
            .collect();

        if title.is_empty() {
            return Err(InvalidPost::MissingTitle);
        }
        if excerpt.is_empty() {
            return Err(InvalidPost::MissingExcerpt);
        }
        if category.is_empty() {
            return Err(InvalidPost::MissingCategory);
        }
        if content.is_empty() {
            return Err(InvalidPost::EmptyContent);
        }

        Ok(NewBlogPost {
            title,
            excerpt,
            category,
            image,
            read_time,
            date: self.date.trim().to_string(),
            content,
        })
    }
}

impl BlogPost {
    /// Attaches the store-assigned id to a creation payload.
    pub fn from_new(id: String, new: NewBlogPost) -> Self {
        BlogPost {
            id,
            title: new.title,
            excerpt: new.excerpt,
            category: new.category,
            image: new.image,
            read_time: new.read_time,
            date: new.date,
            content: new.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{content, posts_or, BlogPost, InvalidPost, NewBlogPost};

    fn payload() -> NewBlogPost {
        NewBlogPost {
            title: "Ownership in Practice".to_string(),
            excerpt: "Two sentences about ownership.".to_string(),
            category: "Rust".to_string(),
            image: "https://example.com/cover.jpg".to_string(),
            read_time: "4 min read".to_string(),
            date: "August 22, 2026".to_string(),
            content: vec!["First paragraph.".to_string(), "Second paragraph.".to_string()],
        }
    }

    #[test]
    fn normalized_accepts_complete_payload() {
        let normalized = payload().normalized().unwrap();
        assert_eq!(normalized.title, "Ownership in Practice");
        assert_eq!(normalized.content.len(), 2);
    }

    #[test]
    fn normalized_drops_blank_paragraphs() {
        let mut post = payload();
        post.content = vec![
            "  First.  ".to_string(),
            "   ".to_string(),
            String::new(),
            "Second.".to_string(),
        ];
        let normalized = post.normalized().unwrap();
        assert_eq!(normalized.content, vec!["First.".to_string(), "Second.".to_string()]);
    }

    #[test]
    fn normalized_rejects_blank_title() {
        let mut post = payload();
        post.title = "   ".to_string();
        assert_eq!(post.normalized().unwrap_err(), InvalidPost::MissingTitle);
    }

    #[test]
    fn normalized_rejects_content_of_only_blanks() {
        let mut post = payload();
        post.content = vec!["  ".to_string(), String::new()];
        assert_eq!(post.normalized().unwrap_err(), InvalidPost::EmptyContent);
    }

    #[test]
    fn normalized_fills_default_image_and_read_time() {
        let mut post = payload();
        post.image = String::new();
        post.read_time = "  ".to_string();
        let normalized = post.normalized().unwrap();
        assert_eq!(normalized.image, content::DEFAULT_POST_IMAGE);
        assert_eq!(normalized.read_time, content::DEFAULT_READ_TIME);
    }

    #[test]
    fn wire_names_stay_camel_case() {
        let json = serde_json::to_string(&payload()).unwrap();
        assert!(json.contains("\"readTime\""));
        assert!(!json.contains("read_time"));
    }

    fn post(id: &str) -> BlogPost {
        BlogPost::from_new(id.to_string(), payload())
    }

    #[test]
    fn posts_or_keeps_fetched_content() {
        let fetched: Result<_, String> = Ok(vec![post("live-1")]);
        let chosen = posts_or(fetched, vec![post("sample-1")]);
        assert_eq!(chosen[0].id, "live-1");
    }

    #[test]
    fn posts_or_falls_back_on_fetch_error() {
        let fetched: Result<Vec<BlogPost>, String> = Err("network down".to_string());
        let chosen = posts_or(fetched, vec![post("sample-1")]);
        assert_eq!(chosen[0].id, "sample-1");
    }

    #[test]
    fn posts_or_falls_back_on_an_empty_store() {
        let fetched: Result<Vec<BlogPost>, String> = Ok(Vec::new());
        let chosen = posts_or(fetched, vec![post("sample-1"), post("sample-2")]);
        assert_eq!(chosen.len(), 2);
    }
}
