use serde::{Deserialize, Serialize};

use crate::types::{Message, Position, PropKind, RenderedElement, Timestamp};

use super::modifier::Modifier;

/// Side length of a button's square box, in pixels.
pub const BUTTON_SIZE: i64 = 300;

/// Where a synthesized placeholder prop is drawn.
pub const FALLBACK_POSITION: Position = Position::new(0, 0);

/// A named visual element. Props are plain values; every operation hands
/// back a new prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Position,
    pub text: String,
    /// Newest first.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub message: Message,
}

impl Prop {
    /// A single-line label. Clicking a label asks for a hint.
    pub fn label(position: Position, text: impl Into<String>) -> Self {
        Prop {
            kind: PropKind::Label,
            position,
            text: text.into(),
            modifiers: Vec::new(),
            message: Message::RevealHint,
        }
    }

    pub fn button(position: Position, text: impl Into<String>, message: Message) -> Self {
        Prop {
            kind: PropKind::Button,
            position,
            text: text.into(),
            modifiers: Vec::new(),
            message,
        }
    }

    /// Placeholder that does nothing when clicked.
    pub fn empty() -> Self {
        Prop {
            message: Message::NoOp,
            ..Prop::label(FALLBACK_POSITION, "")
        }
    }

    /// Stand-in for a name the scene does not know about. The text makes the
    /// miss visible on screen.
    pub fn missing(name: &str) -> Self {
        Prop::empty().set_text(format!("missing prop: {name}"))
    }

    /// Install a modifier in front of the others.
    ///
    /// Any modifier already driving the same attribute is dropped first, so an
    /// attribute never has two competing values or overlapping animations.
    /// Re-adding an identical modifier therefore leaves exactly one copy.
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.retain(|m| m.attribute() != modifier.attribute());
        self.modifiers.insert(0, modifier);
        self
    }

    /// Prepend a batch of static attributes, first pair ending up in front.
    /// Unlike `add_modifier` nothing is replaced.
    pub fn add_statics<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let statics: Vec<Modifier> = pairs
            .into_iter()
            .map(|(attribute, value)| Modifier::fixed(attribute, value))
            .collect();
        self.modifiers.splice(0..0, statics);
        self
    }

    pub fn set_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Advance every modifier to `now`, keeping their order.
    pub fn advance(self, now: Timestamp) -> Self {
        let Prop {
            kind,
            position,
            text,
            modifiers,
            message,
        } = self;
        Prop {
            kind,
            position,
            text,
            modifiers: modifiers.into_iter().map(|m| m.advance(now)).collect(),
            message,
        }
    }

    pub fn is_settled(&self, now: Timestamp) -> bool {
        self.modifiers.iter().all(|m| m.is_settled(now))
    }

    pub fn render(&self, now: Timestamp) -> RenderedElement {
        crate::renderer::Renderer::render(now, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::modifier::TimeSpan;

    #[test]
    fn factories_set_kind_and_message() {
        let label = Prop::label(Position::new(10, 20), "hi");
        assert_eq!(label.kind, PropKind::Label);
        assert_eq!(label.message, Message::RevealHint);
        assert!(label.modifiers.is_empty());

        let button = Prop::button(Position::new(0, 0), "Next", Message::NextQuote);
        assert_eq!(button.kind, PropKind::Button);
        assert_eq!(button.message, Message::NextQuote);

        let empty = Prop::empty();
        assert_eq!(empty.message, Message::NoOp);
        assert_eq!(empty.position, FALLBACK_POSITION);
    }

    #[test]
    fn missing_prop_names_itself() {
        assert_eq!(Prop::missing("Quote").text, "missing prop: Quote");
    }

    #[test]
    fn add_modifier_twice_keeps_one() {
        let m = Modifier::fixed("width", "20px");
        let prop = Prop::empty().add_modifier(m.clone()).add_modifier(m.clone());
        assert_eq!(prop.modifiers, vec![m]);
    }

    #[test]
    fn add_modifier_replaces_same_attribute() {
        let first = Modifier::interpolated("width", TimeSpan::new(0, 100), 0, 10);
        let second = Modifier::interpolated("width", TimeSpan::new(50, 100), 10, 0);
        let prop = Prop::empty()
            .add_modifier(Modifier::fixed("font-size", "12px"))
            .add_modifier(first)
            .add_modifier(second.clone());
        assert_eq!(prop.modifiers.len(), 2);
        assert_eq!(prop.modifiers[0], second);
    }

    #[test]
    fn add_statics_prepends_in_order_without_dedup() {
        let prop = Prop::empty()
            .add_statics([("width", "20px")])
            .add_statics([("width", "20px"), ("font-size", "12px")]);
        assert_eq!(
            prop.modifiers,
            vec![
                Modifier::fixed("width", "20px"),
                Modifier::fixed("font-size", "12px"),
                Modifier::fixed("width", "20px"),
            ]
        );
    }

    #[test]
    fn set_text_touches_only_text() {
        let prop = Prop::button(Position::new(1, 2), "a", Message::RevealAnswer)
            .add_modifier(Modifier::fixed("color", "red"));
        let changed = prop.clone().set_text("b");
        assert_eq!(changed.text, "b");
        assert_eq!(changed.modifiers, prop.modifiers);
        assert_eq!(changed.position, prop.position);
        assert_eq!(changed.message, prop.message);
    }

    #[test]
    fn advance_keeps_modifier_order() {
        let prop = Prop::empty()
            .add_modifier(Modifier::interpolated("width", TimeSpan::new(0, 10), 0, 10))
            .add_modifier(Modifier::fixed("font-size", "24px"));
        assert!(!prop.is_settled(5));
        let advanced = prop.advance(10);
        assert_eq!(advanced.modifiers[0].attribute(), "font-size");
        assert_eq!(advanced.modifiers[1].to_attribute().1, "10px");
        assert!(advanced.is_settled(10));
    }
}
