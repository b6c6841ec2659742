//! Transcript accumulation for one speaker's utterance stream

/// One incremental piece of transcript or spoken-reply text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFragment {
    pub text: String,
    /// Committed (permanent) vs provisional (replaceable) status
    pub is_final: bool,
}

impl TextFragment {
    /// Create an interim (provisional) fragment
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// Create a final (committed) fragment
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Growing finalized/interim text for one speaker within a session
///
/// Displayed text is always `committed ++ pending interim`. Committed text
/// only ever grows within a session; interim fragments replace each other
/// and never compound.
#[derive(Debug, Clone, Default)]
pub struct TranscriptAccumulator {
    committed: String,
    interim: String,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all accumulated text; called once per new session before any
    /// fragment is applied
    pub fn reset(&mut self) {
        self.committed.clear();
        self.interim.clear();
    }

    /// Apply one fragment and return the full text to display
    ///
    /// An interim fragment replaces the pending interim. A final fragment
    /// promotes the pending interim into the committed text and appends its
    /// own text permanently. Empty fragments leave committed text untouched
    /// and clear the interim display.
    pub fn apply(&mut self, fragment: &TextFragment) -> String {
        if fragment.text.is_empty() {
            self.interim.clear();
            return self.committed.clone();
        }

        if fragment.is_final {
            let promoted = join(&self.committed, &self.interim);
            self.committed = join(&promoted, &fragment.text);
            self.interim.clear();
        } else {
            self.interim = fragment.text.clone();
        }

        self.text()
    }

    /// Current display text: committed plus pending interim
    pub fn text(&self) -> String {
        join(&self.committed, &self.interim)
    }

    /// Committed (permanent) text only
    pub fn committed(&self) -> &str {
        &self.committed
    }
}

/// Concatenate two pieces of transcript text
///
/// Inserts a single separating space only when both sides are non-empty and
/// the seam has no whitespace of its own; service fragments frequently carry
/// their own leading space.
fn join(left: &str, right: &str) -> String {
    if left.is_empty() {
        return right.to_string();
    }
    if right.is_empty() {
        return left.to_string();
    }

    let seam_has_space = left.ends_with(char::is_whitespace)
        || right.starts_with(char::is_whitespace);

    if seam_has_space {
        format!("{}{}", left, right)
    } else {
        format!("{} {}", left, right)
    }
}
