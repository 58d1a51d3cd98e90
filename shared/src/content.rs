//! Text helpers for authoring and rendering blog content.

/// Stock cover applied when the author leaves the image field blank.
pub const DEFAULT_POST_IMAGE: &str =
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=800";

/// Read-time label used until a real estimate replaces it.
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Average reading speed used to estimate read time.
pub const WORDS_PER_MINUTE: usize = 200;

/// Splits raw textarea input into paragraphs: one paragraph per line,
/// blank lines discarded. Blank-line-separated input works too since the
/// empty entries are filtered out.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Inverse of [`split_paragraphs`] for pre-filling the textarea.
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join("\n")
}

/// Total whitespace-separated words across all paragraphs.
pub fn word_count(paragraphs: &[String]) -> usize {
    paragraphs
        .iter()
        .map(|paragraph| paragraph.split_whitespace().count())
        .sum()
}

/// Estimates a read-time label from paragraph word count at
/// [`WORDS_PER_MINUTE`], rounding up, never below one minute.
pub fn estimate_read_time(paragraphs: &[String]) -> String {
    let words = word_count(paragraphs);
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// Builds a stock-photo URL for a search term. The `cache_buster` value
/// lands in the `sig` parameter so repeated lookups for the same term
/// fetch a fresh image instead of a cached one.
pub fn stock_image_url(search_term: &str, cache_buster: u32) -> String {
    let term: String = search_term
        .trim()
        .chars()
        .map(|ch| if ch.is_whitespace() { '-' } else { ch })
        .collect();
    format!("https://source.unsplash.com/800x600/?{term}&sig={cache_buster}")
}

#[cfg(test)]
mod tests {
    use super::{
        estimate_read_time, join_paragraphs, split_paragraphs, stock_image_url, word_count,
    };

    #[test]
    fn split_paragraphs_filters_blank_lines() {
        let raw = "First paragraph.\n\n   \nSecond paragraph.\nThird.";
        let paragraphs = split_paragraphs(raw);
        assert_eq!(
            paragraphs,
            vec!["First paragraph.".to_string(), "Second paragraph.".to_string(), "Third.".to_string()]
        );
    }

    #[test]
    fn split_paragraphs_handles_blank_line_separated_input() {
        let raw = "One.\n\nTwo.\n\nThree.";
        assert_eq!(split_paragraphs(raw).len(), 3);
    }

    #[test]
    fn split_paragraphs_of_whitespace_is_empty() {
        assert!(split_paragraphs("  \n\n \n").is_empty());
    }

    #[test]
    fn join_then_split_round_trips() {
        let paragraphs = vec!["A.".to_string(), "B.".to_string()];
        assert_eq!(split_paragraphs(&join_paragraphs(&paragraphs)), paragraphs);
    }

    #[test]
    fn word_count_sums_across_paragraphs() {
        let paragraphs = vec!["one two three".to_string(), "four five".to_string()];
        assert_eq!(word_count(&paragraphs), 5);
    }

    #[test]
    fn read_time_rounds_up() {
        // 201 words at 200 wpm is two minutes
        let words = vec!["word"; 201].join(" ");
        assert_eq!(estimate_read_time(&[words]), "2 min read");
    }

    #[test]
    fn read_time_is_at_least_one_minute() {
        assert_eq!(estimate_read_time(&["short".to_string()]), "1 min read");
        assert_eq!(estimate_read_time(&[]), "1 min read");
    }

    #[test]
    fn read_time_exact_multiple_does_not_round_up() {
        let words = vec!["word"; 400].join(" ");
        assert_eq!(estimate_read_time(&[words]), "2 min read");
    }

    #[test]
    fn stock_image_url_embeds_term_and_buster() {
        let url = stock_image_url("server", 42);
        assert_eq!(url, "https://source.unsplash.com/800x600/?server&sig=42");
    }

    #[test]
    fn stock_image_url_hyphenates_spaces() {
        let url = stock_image_url("  rust code ", 7);
        assert!(url.contains("?rust-code&"));
    }
}
