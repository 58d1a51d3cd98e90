//! MongoDB gateway for published articles.
//!
//! Documents are read as raw BSON and normalized here so a single malformed
//! document degrades to a skipped entry instead of failing the whole list.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime as BsonDateTime, Document};
use futures::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Client, Collection};

use folio_shared::content::{split_paragraphs, DEFAULT_POST_IMAGE, DEFAULT_READ_TIME};
use folio_shared::{BlogPost, NewBlogPost};

/// Collection holding one document per published article.
pub const POSTS_COLLECTION: &str = "blog_posts";

/// Errors surfaced by the article store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document matched the requested id.
    #[error("no article with id {0}")]
    NotFound(String),
    /// The database rejected or failed the operation.
    #[error("database error: {0}")]
    Database(String),
}

/// Gateway trait for article persistence.
///
/// The trait allows swapping the database out in handler tests.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Lists every published article, newest first.
    async fn list_posts(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Persists a new article and returns its generated id.
    async fn create_post(&self, post: NewBlogPost) -> Result<String, StoreError>;

    /// Permanently removes an article. There is no soft-delete tier.
    async fn delete_post(&self, id: &str) -> Result<(), StoreError>;
}

/// MongoDB implementation of [`PostStore`].
pub struct MongoPostStore {
    collection: Collection<Document>,
}

impl MongoPostStore {
    /// Connects to the database and binds the article collection.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(Self {
            collection: client.database(database).collection(POSTS_COLLECTION),
        })
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let mut cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut posts = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?
        {
            match document_to_post(&document) {
                Some(post) => posts.push(post),
                None => {
                    tracing::warn!(
                        id = %document.get_object_id("_id").map(|id| id.to_hex()).unwrap_or_default(),
                        "skipping malformed article document"
                    );
                }
            }
        }

        Ok(posts)
    }

    async fn create_post(&self, post: NewBlogPost) -> Result<String, StoreError> {
        let document = post_to_document(&post);
        let inserted = self
            .collection
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match inserted.inserted_id {
            Bson::ObjectId(id) => Ok(id.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    async fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        // Ids that never came out of this store cannot match anything.
        let object_id =
            ObjectId::parse_str(id).map_err(|_| StoreError::NotFound(id.to_string()))?;

        let deleted = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if deleted.deleted_count == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Converts a stored document into the wire model, or `None` when the
/// document is missing a required field.
fn document_to_post(document: &Document) -> Option<BlogPost> {
    let id = document
        .get_object_id("_id")
        .map(|id| id.to_hex())
        .ok()
        .or_else(|| document.get_str("_id").ok().map(str::to_string))?;

    let title = required_str(document, "title")?;
    let excerpt = required_str(document, "excerpt")?;
    let category = required_str(document, "category")?;

    // Older documents stored content as one newline-joined string.
    let content: Vec<String> = match document.get_array("content") {
        Ok(items) => items
            .iter()
            .filter_map(Bson::as_str)
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => document
            .get_str("content")
            .map(split_paragraphs)
            .unwrap_or_default(),
    };
    if content.is_empty() {
        return None;
    }

    Some(BlogPost {
        id,
        title,
        excerpt,
        category,
        image: optional_str(document, "image").unwrap_or_else(|| DEFAULT_POST_IMAGE.to_string()),
        read_time: optional_str(document, "readTime")
            .unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
        date: optional_str(document, "date").unwrap_or_default(),
        content,
    })
}

/// Builds the BSON document persisted for a new article.
///
/// `createdAt` is stamped server-side so the newest-first sort never depends
/// on client clocks.
fn post_to_document(post: &NewBlogPost) -> Document {
    doc! {
        "title": &post.title,
        "excerpt": &post.excerpt,
        "category": &post.category,
        "image": &post.image,
        "readTime": &post.read_time,
        "date": &post.date,
        "content": &post.content,
        "createdAt": BsonDateTime::now(),
    }
}

fn required_str(document: &Document, key: &str) -> Option<String> {
    document
        .get_str(key)
        .ok()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn optional_str(document: &Document, key: &str) -> Option<String> {
    document
        .get_str(key)
        .ok()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// In-memory store backing handler tests.
#[cfg(test)]
pub(crate) struct MemoryPostStore {
    posts: std::sync::Mutex<Vec<BlogPost>>,
    next_id: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl MemoryPostStore {
    pub(crate) fn new() -> Self {
        Self {
            posts: std::sync::Mutex::new(Vec::new()),
            next_id: std::sync::atomic::AtomicU64::new(1),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().rev().cloned().collect())
    }

    async fn create_post(&self, post: NewBlogPost) -> Result<String, StoreError> {
        let id = format!(
            "mem-{}",
            self.next_id
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
        );
        let mut posts = self.posts.lock().unwrap();
        posts.push(BlogPost::from_new(id.clone(), post));
        Ok(id)
    }

    async fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_document() -> Document {
        doc! {
            "_id": ObjectId::new(),
            "title": "Understanding Ownership",
            "excerpt": "A walk through moves and borrows.",
            "category": "Programming",
            "image": "https://example.com/cover.png",
            "readTime": "4 min read",
            "date": "May 3, 2025",
            "content": ["First paragraph.", "Second paragraph."],
            "createdAt": BsonDateTime::now(),
        }
    }

    fn sample_new_post(title: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            excerpt: "excerpt".into(),
            category: "General".into(),
            image: DEFAULT_POST_IMAGE.into(),
            read_time: "1 min read".into(),
            date: "July 4, 2025".into(),
            content: vec!["body".into()],
        }
    }

    #[test]
    fn maps_complete_document_to_post() {
        let document = complete_document();
        let post = document_to_post(&document).unwrap();
        assert_eq!(post.title, "Understanding Ownership");
        assert_eq!(post.category, "Programming");
        assert_eq!(post.read_time, "4 min read");
        assert_eq!(post.content.len(), 2);
    }

    #[test]
    fn rejects_document_without_title() {
        let mut document = complete_document();
        document.remove("title");
        assert!(document_to_post(&document).is_none());

        let mut blank = complete_document();
        blank.insert("title", "   ");
        assert!(document_to_post(&blank).is_none());
    }

    #[test]
    fn rejects_document_with_no_usable_paragraphs() {
        let mut document = complete_document();
        document.insert("content", vec!["   ", ""]);
        assert!(document_to_post(&document).is_none());
    }

    #[test]
    fn splits_legacy_string_content() {
        let mut document = complete_document();
        document.insert("content", "one\n\ntwo\nthree");
        let post = document_to_post(&document).unwrap();
        assert_eq!(post.content, vec!["one", "two", "three"]);
    }

    #[test]
    fn fills_defaults_for_missing_presentation_fields() {
        let mut document = complete_document();
        document.remove("image");
        document.remove("readTime");
        document.remove("date");
        let post = document_to_post(&document).unwrap();
        assert_eq!(post.image, DEFAULT_POST_IMAGE);
        assert_eq!(post.read_time, DEFAULT_READ_TIME);
        assert_eq!(post.date, "");
    }

    #[test]
    fn stored_document_uses_wire_field_names() {
        let post = NewBlogPost {
            title: "t".into(),
            excerpt: "e".into(),
            category: "c".into(),
            image: "i".into(),
            read_time: "2 min read".into(),
            date: "June 1, 2025".into(),
            content: vec!["p".into()],
        };
        let document = post_to_document(&post);
        assert_eq!(document.get_str("readTime").unwrap(), "2 min read");
        assert!(document.contains_key("createdAt"));
    }

    #[tokio::test]
    async fn memory_store_lists_newest_first() {
        let store = MemoryPostStore::new();
        let first = store
            .create_post(sample_new_post("older"))
            .await
            .unwrap();
        let second = store
            .create_post(sample_new_post("newer"))
            .await
            .unwrap();

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts[0].id, second);
        assert_eq!(posts[1].id, first);
    }

    #[tokio::test]
    async fn memory_store_delete_unknown_id_is_not_found() {
        let store = MemoryPostStore::new();
        let err = store.delete_post("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
