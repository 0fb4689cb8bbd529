//! Styled text segments that the typing effect reveals in source order.

use serde::{Deserialize, Serialize};

/// Display-style tag carried by a segment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentStyle {
    #[default]
    Plain,
    Accent,
    Highlight,
    Muted,
    /// Raw class list supplied by the caller.
    Custom(String),
}

impl SegmentStyle {
    pub fn class(&self) -> &str {
        match self {
            SegmentStyle::Plain => "typed-plain",
            SegmentStyle::Accent => "typed-accent",
            SegmentStyle::Highlight => "typed-highlight",
            SegmentStyle::Muted => "typed-muted",
            SegmentStyle::Custom(class) => class.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    #[serde(default)]
    pub style: SegmentStyle,
}

impl TextSegment {
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Plain)
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered content of a typing effect.
///
/// A plain string is a single [`SegmentStyle::Plain`] segment, so both the
/// plain and the multi-coloured variants share one code path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSource {
    segments: Vec<TextSegment>,
}

impl TypingSource {
    pub fn new(segments: Vec<TextSegment>) -> Self {
        Self { segments }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![TextSegment::plain(text)])
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(TextSegment::char_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distributes `shown` characters across the segments in source order.
    ///
    /// Each segment shows `max(0, min(len, shown - preceding))` characters.
    /// Segments with nothing visible are left out of the result.
    pub fn visible(&self, shown: usize) -> Vec<TextSegment> {
        let mut preceding = 0usize;
        let mut visible = Vec::new();
        for segment in &self.segments {
            let len = segment.char_len();
            let count = shown.saturating_sub(preceding).min(len);
            preceding += len;
            if count == 0 {
                continue;
            }
            visible.push(TextSegment {
                text: char_prefix(&segment.text, count).to_string(),
                style: segment.style.clone(),
            });
        }
        visible
    }

    pub fn visible_text(&self, shown: usize) -> String {
        self.visible(shown)
            .into_iter()
            .map(|segment| segment.text)
            .collect()
    }

    pub fn full_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for TypingSource {
    fn from(text: &str) -> Self {
        TypingSource::plain(text)
    }
}

impl From<String> for TypingSource {
    fn from(text: String) -> Self {
        TypingSource::plain(text)
    }
}

impl From<Vec<TextSegment>> for TypingSource {
    fn from(segments: Vec<TextSegment>) -> Self {
        TypingSource::new(segments)
    }
}

fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
