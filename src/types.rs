//! Shared boundary types for the quote quiz.
//!
//! This module defines the two key data contracts:
//! - Quiz → Engine: `Message`s attached to props, `Position`s for layout
//! - Engine → Render host: `RenderedElement`s carrying attributes and a click message

use serde::{Deserialize, Serialize};

/// Milliseconds on the host clock. Monotonically non-decreasing.
pub type Timestamp = u64;

// ---------------------------------------------------------------------------
// Prop events
// ---------------------------------------------------------------------------

/// The event a prop emits when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    RevealHint,
    RevealAnswer,
    NextQuote,
    NoOp,
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Absolute position of a prop in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub left: i32,
    pub top: i32,
}

impl Position {
    pub const fn new(left: i32, top: i32) -> Self {
        Position { left, top }
    }
}

/// Format a pixel length the way style attributes expect it.
pub fn px(value: i64) -> String {
    format!("{value}px")
}

/// Parse a `"<int>px"` length. Returns `None` for anything else.
pub fn parse_px(value: &str) -> Option<i64> {
    value.strip_suffix("px")?.trim().parse().ok()
}

// ---------------------------------------------------------------------------
// Engine → Render host boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    Label,
    Button,
}

/// One style attribute, e.g. `("width", "20px")`.
pub type Attribute = (String, String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedElement {
    pub kind: PropKind,
    pub text: String,
    /// Ordered style attributes. When a name repeats, the later entry wins.
    pub attributes: Vec<Attribute>,
    pub message: Message,
}

impl RenderedElement {
    /// Effective value of an attribute after later-wins resolution.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Effective value of a pixel-length attribute.
    pub fn px_attribute(&self, name: &str) -> Option<i64> {
        self.attribute(name).and_then(parse_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_attribute_wins() {
        let el = RenderedElement {
            kind: PropKind::Label,
            text: "x".into(),
            attributes: vec![
                ("width".into(), "20px".into()),
                ("top".into(), "5px".into()),
                ("width".into(), "410px".into()),
            ],
            message: Message::NoOp,
        };
        assert_eq!(el.attribute("width"), Some("410px"));
        assert_eq!(el.px_attribute("top"), Some(5));
        assert_eq!(el.attribute("left"), None);
    }

    #[test]
    fn parse_px_rejects_other_units() {
        assert_eq!(parse_px("12px"), Some(12));
        assert_eq!(parse_px("-3px"), Some(-3));
        assert_eq!(parse_px("12em"), None);
        assert_eq!(parse_px("absolute"), None);
    }

    #[test]
    fn messages_serialize_snake_case() {
        let json = serde_json::to_string(&Message::RevealHint).unwrap();
        assert_eq!(json, "\"reveal_hint\"");
    }
}
