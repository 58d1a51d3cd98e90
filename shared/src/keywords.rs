//! Keyword-chip editor state, kept free of DOM types so the transitions
//! are testable on their own.

/// Keywords required before article generation unlocks.
pub const MIN_KEYWORDS: usize = 3;

/// Key presses the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// Commits the pending text as a chip.
    Enter,
    /// Commits like Enter; never lands in the input.
    Comma,
    /// Pops the newest chip when the input is empty.
    Backspace,
    /// Any key the editor passes through.
    Other,
}

impl KeyPress {
    /// Maps a DOM `KeyboardEvent::key` value onto the editor's alphabet.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => KeyPress::Enter,
            "," => KeyPress::Comma,
            "Backspace" => KeyPress::Backspace,
            _ => KeyPress::Other,
        }
    }
}

/// What a key press did, so the caller knows whether to swallow the
/// default input behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A chip was added.
    Committed,
    /// The newest chip was removed.
    Popped,
    /// Nothing changed.
    Ignored,
}

/// Chip list plus the text still being typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordEditor {
    keywords: Vec<String>,
    pending: String,
}

impl KeywordEditor {
    /// An editor with no chips and an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed chips, oldest first.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Text typed since the last commit.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Mirrors the text input into the editor.
    pub fn set_pending(&mut self, value: impl Into<String>) {
        self.pending = value.into();
    }

    /// Enter and comma commit the pending text as a chip; Backspace on an
    /// empty input pops the newest chip. Everything else passes through.
    pub fn handle_key(&mut self, key: KeyPress) -> KeyOutcome {
        match key {
            KeyPress::Enter | KeyPress::Comma => {
                if self.commit_pending() {
                    KeyOutcome::Committed
                } else {
                    // still swallow the comma so it never lands in the input
                    self.pending.clear();
                    KeyOutcome::Ignored
                }
            },
            KeyPress::Backspace if self.pending.is_empty() => {
                if self.keywords.pop().is_some() {
                    KeyOutcome::Popped
                } else {
                    KeyOutcome::Ignored
                }
            },
            _ => KeyOutcome::Ignored,
        }
    }

    /// Commits the pending text if it trims to something new; duplicates
    /// and blanks are dropped. Returns whether a chip was added.
    pub fn commit_pending(&mut self) -> bool {
        let keyword = self.pending.trim().to_string();
        self.pending.clear();
        if keyword.is_empty() || self.keywords.contains(&keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    /// Removes the chip at `index`; out-of-range indexes are a no-op.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.keywords.len() {
            self.keywords.remove(index);
        }
    }

    /// Generation stays locked below [`MIN_KEYWORDS`] chips.
    pub fn can_generate(&self) -> bool {
        self.keywords.len() >= MIN_KEYWORDS
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyOutcome, KeyPress, KeywordEditor, MIN_KEYWORDS};

    fn editor_with(words: &[&str]) -> KeywordEditor {
        let mut editor = KeywordEditor::new();
        for word in words {
            editor.set_pending(*word);
            editor.commit_pending();
        }
        editor
    }

    #[test]
    fn enter_commits_pending_text() {
        let mut editor = KeywordEditor::new();
        editor.set_pending("rust");
        assert_eq!(editor.handle_key(KeyPress::Enter), KeyOutcome::Committed);
        assert_eq!(editor.keywords(), ["rust"]);
        assert!(editor.pending().is_empty());
    }

    #[test]
    fn comma_commits_like_enter() {
        let mut editor = KeywordEditor::new();
        editor.set_pending(" memory ");
        assert_eq!(editor.handle_key(KeyPress::Comma), KeyOutcome::Committed);
        assert_eq!(editor.keywords(), ["memory"]);
    }

    #[test]
    fn blank_pending_commits_nothing() {
        let mut editor = KeywordEditor::new();
        editor.set_pending("   ");
        assert_eq!(editor.handle_key(KeyPress::Enter), KeyOutcome::Ignored);
        assert!(editor.keywords().is_empty());
    }

    #[test]
    fn duplicates_are_dropped() {
        let mut editor = editor_with(&["rust"]);
        editor.set_pending("rust");
        assert_eq!(editor.handle_key(KeyPress::Enter), KeyOutcome::Ignored);
        assert_eq!(editor.keywords().len(), 1);
    }

    #[test]
    fn backspace_on_empty_input_pops_newest_chip() {
        let mut editor = editor_with(&["rust", "memory"]);
        assert_eq!(editor.handle_key(KeyPress::Backspace), KeyOutcome::Popped);
        assert_eq!(editor.keywords(), ["rust"]);
    }

    #[test]
    fn backspace_with_pending_text_passes_through() {
        let mut editor = editor_with(&["rust"]);
        editor.set_pending("m");
        assert_eq!(editor.handle_key(KeyPress::Backspace), KeyOutcome::Ignored);
        assert_eq!(editor.keywords(), ["rust"]);
    }

    #[test]
    fn backspace_on_empty_editor_is_ignored() {
        let mut editor = KeywordEditor::new();
        assert_eq!(editor.handle_key(KeyPress::Backspace), KeyOutcome::Ignored);
    }

    #[test]
    fn remove_at_drops_the_right_chip() {
        let mut editor = editor_with(&["a", "b", "c"]);
        editor.remove_at(1);
        assert_eq!(editor.keywords(), ["a", "c"]);
        editor.remove_at(10); // out of range is a no-op
        assert_eq!(editor.keywords().len(), 2);
    }

    #[test]
    fn generation_unlocks_at_three_keywords() {
        let mut editor = editor_with(&["rust", "memory"]);
        assert!(!editor.can_generate());
        editor.set_pending("safety");
        editor.commit_pending();
        assert!(editor.can_generate());
        assert_eq!(editor.keywords().len(), MIN_KEYWORDS);
    }

    #[test]
    fn key_press_parses_dom_key_values() {
        assert_eq!(KeyPress::from_key("Enter"), KeyPress::Enter);
        assert_eq!(KeyPress::from_key(","), KeyPress::Comma);
        assert_eq!(KeyPress::from_key("Backspace"), KeyPress::Backspace);
        assert_eq!(KeyPress::from_key("a"), KeyPress::Other);
    }
}
