use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{RenderedElement, Timestamp};

use super::prop::Prop;

/// Named props, kept in insertion order so rendering is stable across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    props: IndexMap<String, Prop>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the prop stored under `name`. Replacing keeps the
    /// name's original slot in the render order.
    pub fn upsert(mut self, name: impl Into<String>, prop: Prop) -> Self {
        self.props.insert(name.into(), prop);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Prop> {
        self.props.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// The prop under `name`, or a visible placeholder when there is none.
    pub fn prop_or_fallback(&self, name: &str) -> Prop {
        match self.props.get(name) {
            Some(prop) => prop.clone(),
            None => {
                warn!(prop = name, "prop not found in scene, using placeholder");
                Prop::missing(name)
            }
        }
    }

    /// Apply `f` to the prop under `name` (or its placeholder) and store the result.
    pub fn map_prop(self, name: &str, f: impl FnOnce(Prop) -> Prop) -> Self {
        let prop = f(self.prop_or_fallback(name));
        self.upsert(name, prop)
    }

    pub fn set_text_of_prop(self, name: &str, text: impl Into<String>) -> Self {
        let text = text.into();
        self.map_prop(name, |prop| prop.set_text(text))
    }

    /// Advance every prop to `now`. Props never influence each other.
    pub fn update(self, now: Timestamp) -> Self {
        Scene {
            props: self
                .props
                .into_iter()
                .map(|(name, prop)| (name, Self::advance_prop(now, prop)))
                .collect(),
        }
    }

    pub fn advance_prop(now: Timestamp, prop: Prop) -> Prop {
        prop.advance(now)
    }

    /// Whether every animation in the scene has reached its end at `now`.
    pub fn is_settled(&self, now: Timestamp) -> bool {
        self.props.values().all(|p| p.is_settled(now))
    }

    /// Render every prop in insertion order.
    pub fn render(&self, now: Timestamp) -> Vec<RenderedElement> {
        self.props.values().map(|prop| prop.render(now)).collect()
    }

    /// Like `render`, paired with each prop's name.
    pub fn render_named(&self, now: Timestamp) -> Vec<(&str, RenderedElement)> {
        self.props
            .iter()
            .map(|(name, prop)| (name.as_str(), prop.render(now)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::modifier::{Modifier, TimeSpan};
    use crate::engine::prop::FALLBACK_POSITION;
    use crate::types::{Message, Position};
    use proptest::prelude::*;

    fn sample() -> Scene {
        Scene::new()
            .upsert("Title", Prop::label(Position::new(10, 10), "Title"))
            .upsert(
                "Quote",
                Prop::label(Position::new(10, 100), "?").add_modifier(Modifier::interpolated(
                    "width",
                    TimeSpan::new(0, 1000),
                    20,
                    800,
                )),
            )
            .upsert(
                "Next",
                Prop::button(Position::new(0, 400), "Next", Message::NextQuote),
            )
    }

    #[test]
    fn set_text_on_missing_name_inserts_placeholder() {
        let scene = Scene::new().set_text_of_prop("Missing", "hello");
        let prop = scene.get("Missing").unwrap();
        assert_eq!(prop.text, "hello");
        assert_eq!(prop.position, FALLBACK_POSITION);
        assert_eq!(prop.message, Message::NoOp);
    }

    #[test]
    fn upsert_replaces_without_growing() {
        let empty = Scene::new();
        assert!(empty.is_empty());
        assert!(!empty.contains("Title"));

        let scene = sample().upsert("Title", Prop::empty());
        assert!(!scene.is_empty());
        assert!(scene.contains("Title"));
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.get("Title"), Some(&Prop::empty()));
    }

    #[test]
    fn set_text_keeps_existing_prop() {
        let scene = sample().set_text_of_prop("Title", "Finish the quote");
        let prop = scene.get("Title").unwrap();
        assert_eq!(prop.text, "Finish the quote");
        assert_eq!(prop.position, Position::new(10, 10));
    }

    #[test]
    fn render_follows_insertion_order() {
        let scene = sample().set_text_of_prop("Title", "again");
        let names: Vec<&str> = scene.render_named(0).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Title", "Quote", "Next"]);
        let texts: Vec<String> = scene.render(0).into_iter().map(|e| e.text).collect();
        assert_eq!(texts, ["again", "?", "Next"]);
    }

    #[test]
    fn update_advances_only_interpolations() {
        let scene = sample().update(500);
        let quote = scene.render(500).remove(1);
        assert_eq!(quote.attribute("width"), Some("410px"));
        assert!(!scene.is_settled(500));
        assert!(scene.is_settled(1000));
    }

    #[test]
    fn update_leaves_original_untouched() {
        let before = sample();
        let after = before.clone().update(1000);
        assert_ne!(before, after);
        assert_eq!(before, sample());
    }

    proptest! {
        #[test]
        fn prop_update_is_idempotent_for_same_now(now in 0u64..5_000) {
            let once = sample().update(now);
            prop_assert_eq!(once.clone().update(now), once);
        }

        #[test]
        fn prop_set_text_never_fails(name in "[A-Za-z]{1,12}", text in ".{0,40}") {
            let scene = sample().set_text_of_prop(&name, text.clone());
            prop_assert_eq!(&scene.get(&name).unwrap().text, &text);
        }
    }
}
