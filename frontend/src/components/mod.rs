// Reusable components live here.

pub mod footer;
pub mod header;
pub mod icons;
pub mod pagination;
pub mod post_card;
pub mod theme_toggle;
