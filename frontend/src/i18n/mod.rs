//! Translated copy for the public site.
//!
//! One [`Translations`] table per language; the active table comes from
//! [`crate::language_context`]. The admin console is English-only and does
//! not read from these tables.

#![allow(dead_code)]

pub mod de;
pub mod en;
pub mod tr;

/// Every string one language needs to render the public site.
pub struct Translations {
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub blog: Blog,
    pub cover_letter: CoverLetter,
    pub cv: Cv,
    pub contact: Contact,
    pub seo: Seo,
}

pub struct Nav {
    pub home: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub blog: &'static str,
    pub cover_letter: &'static str,
    pub cv: &'static str,
    pub contact: &'static str,
}

pub struct Hero {
    pub greeting: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

pub struct About {
    pub title: &'static str,
    pub description: &'static str,
    pub experience_title: &'static str,
}

pub struct Skills {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct Blog {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub read_more: &'static str,
    pub maintenance_message: &'static str,
    pub view_all: &'static str,
    pub back_to_home: &'static str,
    pub back_to_blog: &'static str,
    pub all_posts_title: &'static str,
    pub all_posts_subtitle: &'static str,
    pub prev_page: &'static str,
    pub next_page: &'static str,
    pub page: &'static str,
    pub of: &'static str,
}

pub struct CoverLetter {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: &'static [&'static str],
}

pub struct Cv {
    pub title: &'static str,
    pub description: &'static str,
    pub download: &'static str,
}

pub struct Contact {
    pub title: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
}

pub struct Seo {
    pub title: &'static str,
    pub description: &'static str,
}
