use folio_shared::BlogPost;
use web_sys::{window, Document, Element};

use crate::language_context::Language;
use crate::router::Route;

const SITE_NAME: &str = "Mustafa Altas";
const SITE_BASE_URL: &str = "https://mustafaaltas.dev";
const DEFAULT_OG_IMAGE: &str = "/static/og-card.png";
const DEFAULT_DESCRIPTION: &str = "Portfolio of Mustafa Altas, a highly motivated developer \
                                   passionate about continuous learning and innovation.";

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn head() -> Option<Element> {
    let doc = document()?;
    doc.query_selector("head").ok().flatten()
}

fn upsert_head_element(selector: &str, tag_name: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = head()?;
    let created = doc.create_element(tag_name).ok()?;
    let _ = head.append_child(&created);
    Some(created)
}

fn normalize_whitespace(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut out = String::new();
    let mut count = 0usize;
    for ch in value.chars() {
        if count >= max_chars {
            break;
        }
        out.push(ch);
        count += 1;
    }
    if value.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

fn normalize_meta_text(value: &str, max_chars: usize) -> String {
    let compact = normalize_whitespace(value);
    if compact.is_empty() {
        String::new()
    } else if compact.chars().count() > max_chars {
        truncate_chars(&compact, max_chars)
    } else {
        compact
    }
}

fn set_meta_name(name: &str, content: &str) {
    let selector = format!("meta[name=\"{}\"]", name);
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute("name", name);
    let _ = element.set_attribute("content", content);
}

fn set_meta_property(property: &str, content: &str) {
    let selector = format!("meta[property=\"{}\"]", property);
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute("property", property);
    let _ = element.set_attribute("content", content);
}

fn set_link_canonical(url: &str) {
    let Some(element) = upsert_head_element("link[rel=\"canonical\"]", "link") else {
        return;
    };
    let _ = element.set_attribute("rel", "canonical");
    let _ = element.set_attribute("href", url);
}

fn set_html_lang(lang: &str) {
    let Some(doc) = document() else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", lang);
    }
}

pub fn set_document_title(title: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(title);
}

pub fn absolute_url(path_or_url: &str) -> String {
    let trimmed = path_or_url.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return trimmed.to_string();
    }
    let normalized_path =
        if trimmed.starts_with('/') { trimmed.to_string() } else { format!("/{}", trimmed) };
    format!("{}{}", SITE_BASE_URL.trim_end_matches('/'), normalized_path)
}

fn og_locale(language: Language) -> &'static str {
    match language {
        Language::En => "en_US",
        Language::Tr => "tr_TR",
        Language::De => "de_DE",
    }
}

fn apply_common_seo(
    title: &str,
    description: &str,
    canonical_url: &str,
    og_type: &str,
    robots: &str,
    html_lang: &str,
    og_locale: &str,
    og_image_url: &str,
) {
    let normalized_title = normalize_meta_text(title, 88);
    let normalized_desc = {
        let candidate = normalize_meta_text(description, 180);
        if candidate.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            candidate
        }
    };

    set_document_title(&normalized_title);
    set_html_lang(html_lang);
    set_link_canonical(canonical_url);

    set_meta_name("description", &normalized_desc);
    set_meta_name("robots", robots);
    set_meta_name("googlebot", robots);
    set_meta_name("author", SITE_NAME);
    set_meta_name("twitter:card", "summary_large_image");
    set_meta_name("twitter:title", &normalized_title);
    set_meta_name("twitter:description", &normalized_desc);
    set_meta_name("twitter:image", og_image_url);

    set_meta_property("og:type", og_type);
    set_meta_property("og:site_name", SITE_NAME);
    set_meta_property("og:title", &normalized_title);
    set_meta_property("og:description", &normalized_desc);
    set_meta_property("og:url", canonical_url);
    set_meta_property("og:locale", og_locale);
    set_meta_property("og:image", og_image_url);
}

fn route_path_for(route: &Route) -> String {
    match route {
        Route::Home => "/".to_string(),
        Route::Posts => "/posts".to_string(),
        Route::PostDetail {
            id,
        } => format!("/posts/{}", urlencoding::encode(id)),
        Route::Admin => "/admin".to_string(),
        Route::NotFound => "/404".to_string(),
    }
}

/// Route-level defaults. Detail pages overwrite these once their post data
/// arrives via [`apply_post_seo`].
pub fn apply_route_seo(route: Option<&Route>, language: Language) {
    let fallback_home = Route::Home;
    let active_route = route.unwrap_or(&fallback_home);
    let canonical_url = absolute_url(&route_path_for(active_route));
    let og_image = absolute_url(DEFAULT_OG_IMAGE);
    let t = language.translations();
    let html_lang = language.code();
    let locale = og_locale(language);

    match active_route {
        Route::Home => {
            apply_common_seo(
                t.seo.title,
                t.seo.description,
                &canonical_url,
                "website",
                "index,follow,max-image-preview:large",
                html_lang,
                locale,
                &og_image,
            );
        },
        Route::Posts => {
            apply_common_seo(
                &format!("{} · {}", t.blog.all_posts_title, SITE_NAME),
                t.blog.all_posts_subtitle,
                &canonical_url,
                "website",
                "index,follow,max-image-preview:large",
                html_lang,
                locale,
                &og_image,
            );
        },
        Route::PostDetail {
            id,
        } => {
            apply_common_seo(
                &format!("{} · {}", normalize_meta_text(id, 52), SITE_NAME),
                t.seo.description,
                &canonical_url,
                "article",
                "index,follow,max-image-preview:large",
                html_lang,
                locale,
                &og_image,
            );
        },
        // The console is never meant to be crawled.
        Route::Admin => {
            apply_common_seo(
                &format!("Admin · {}", SITE_NAME),
                "Content management console.",
                &canonical_url,
                "website",
                "noindex,nofollow,noarchive",
                "en",
                "en_US",
                &og_image,
            );
        },
        Route::NotFound => {
            apply_common_seo(
                &format!("404 · {}", SITE_NAME),
                "Page not found.",
                &canonical_url,
                "website",
                "noindex,nofollow,noarchive",
                html_lang,
                locale,
                &og_image,
            );
        },
    }
}

/// Full metadata for a loaded post, replacing the placeholder tags the
/// route-level pass left behind.
pub fn apply_post_seo(post: &BlogPost, language: Language) {
    let canonical_url = absolute_url(&route_path_for(&Route::PostDetail {
        id: post.id.clone(),
    }));
    let og_image = if post.image.trim().is_empty() {
        absolute_url(DEFAULT_OG_IMAGE)
    } else {
        absolute_url(&post.image)
    };

    apply_common_seo(
        &format!("{} · {}", normalize_meta_text(&post.title, 78), SITE_NAME),
        &post.excerpt,
        &canonical_url,
        "article",
        "index,follow,max-image-preview:large",
        language.code(),
        og_locale(language),
        &og_image,
    );
}
