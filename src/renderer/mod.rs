//! Renderer — turns a prop into a concrete attribute list.
//!
//! Dispatch is keyed on `PropKind`: each kind contributes its base styles,
//! then the prop's modifiers are layered on top. The renderer is pure and
//! stateless and knows nothing about terminals.

use crate::engine::modifier::Modifier;
use crate::engine::prop::{BUTTON_SIZE, Prop};
use crate::types::{Attribute, Message, Position, PropKind, RenderedElement, Timestamp, px};

pub struct Renderer;

impl Renderer {
    pub fn render(now: Timestamp, prop: &Prop) -> RenderedElement {
        let base = match prop.kind {
            PropKind::Label => Self::label_base(prop.position),
            PropKind::Button => Self::button_base(prop.position),
        };
        Self::element(now, prop.kind, base, &prop.text, &prop.modifiers, prop.message)
    }

    fn label_base(position: Position) -> Vec<Attribute> {
        let mut attrs = Self::absolute(position);
        attrs.push(attr("white-space", "nowrap"));
        attrs.push(attr("overflow", "hidden"));
        attrs
    }

    fn button_base(position: Position) -> Vec<Attribute> {
        let mut attrs = Self::absolute(position);
        attrs.push(attr("width", &px(BUTTON_SIZE)));
        attrs.push(attr("height", &px(BUTTON_SIZE)));
        attrs
    }

    fn absolute(position: Position) -> Vec<Attribute> {
        vec![
            attr("position", "absolute"),
            attr("left", &px(position.left.into())),
            attr("top", &px(position.top.into())),
        ]
    }

    /// Modifiers are stored newest first; they are emitted oldest first so
    /// the newest lands last and wins.
    fn element(
        _now: Timestamp,
        kind: PropKind,
        mut attributes: Vec<Attribute>,
        text: &str,
        modifiers: &[Modifier],
        message: Message,
    ) -> RenderedElement {
        attributes.extend(modifiers.iter().rev().map(Modifier::to_attribute));
        RenderedElement {
            kind,
            text: text.to_string(),
            attributes,
            message,
        }
    }
}

fn attr(name: &str, value: &str) -> Attribute {
    (name.to_string(), value.to_string())
}
