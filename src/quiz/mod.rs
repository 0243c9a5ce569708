//! Quiz — the rules layered on top of the engine.
//!
//! Owns the quote table, which quote is showing, how many hints are out,
//! and the current `Scene`. Messages coming back from the render host are
//! turned into scene mutations here.

pub mod config;
pub mod quotes;

use tracing::{debug, info};

use crate::engine::modifier::{Modifier, TimeSpan};
use crate::engine::prop::Prop;
use crate::engine::scene::Scene;
use crate::types::{Message, Position, Timestamp, px};
use config::QuizConfig;
use quotes::{Quote, QuoteBook};

pub const TITLE: &str = "Title";
pub const COUNTER: &str = "Counter";
pub const TEASER: &str = "Teaser";
pub const CHARACTER: &str = "Character";
pub const MOVIE: &str = "Movie";
pub const QUOTE: &str = "Quote";
pub const HINT_BUTTON: &str = "HintButton";
pub const ANSWER_BUTTON: &str = "AnswerButton";
pub const NEXT_BUTTON: &str = "NextButton";

/// Text of a line that has not been revealed yet.
pub const HIDDEN: &str = "?";

const SHRUNK_WIDTH: i64 = 20;
const SHRUNK_FONT: i64 = 12;
const GROWN_FONT: i64 = 24;

/// Parameters of a "grow line" animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    pub duration: u64,
    pub from: i64,
    pub to: i64,
}

impl From<&QuizConfig> for Growth {
    fn from(config: &QuizConfig) -> Self {
        Growth {
            duration: config.grow_duration_ms,
            from: config.grow_from_px,
            to: config.grow_to_px,
        }
    }
}

/// Set a line's text and snap it to the small, narrow style. No animation.
pub fn shrink_line(scene: Scene, name: &str, text: impl Into<String>) -> Scene {
    scene.set_text_of_prop(name, text).map_prop(name, |prop| {
        prop.add_modifier(Modifier::fixed("width", px(SHRUNK_WIDTH)))
            .add_modifier(Modifier::fixed("font-size", px(SHRUNK_FONT)))
    })
}

/// Set a line's text, enlarge its font and start widening it from
/// `growth.from` to `growth.to` pixels beginning at `now`.
pub fn grow_line(
    scene: Scene,
    name: &str,
    text: impl Into<String>,
    now: Timestamp,
    growth: Growth,
) -> Scene {
    let span = TimeSpan::new(now, growth.duration);
    scene.set_text_of_prop(name, text).map_prop(name, |prop| {
        prop.add_modifier(Modifier::fixed("font-size", px(GROWN_FONT)))
            .add_modifier(Modifier::interpolated("width", span, growth.from, growth.to))
    })
}

/// How much of the current quote's provenance has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hint {
    None,
    Character,
    Movie,
}

impl Hint {
    fn next(self) -> Option<Self> {
        match self {
            Hint::None => Some(Hint::Character),
            Hint::Character => Some(Hint::Movie),
            Hint::Movie => None,
        }
    }
}

pub struct Quiz {
    book: QuoteBook,
    config: QuizConfig,
    index: usize,
    hint: Hint,
    answered: bool,
    scene: Scene,
}

impl Quiz {
    pub fn new(book: QuoteBook, config: QuizConfig) -> Self {
        let scene = layout(&config);
        let mut quiz = Quiz {
            book,
            config,
            index: 0,
            hint: Hint::None,
            answered: false,
            scene,
        };
        quiz.show_question();
        quiz
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn hint(&self) -> Hint {
        self.hint
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn current(&self) -> &Quote {
        self.book.get(self.index)
    }

    /// One clock tick.
    pub fn tick(&mut self, now: Timestamp) {
        self.scene = std::mem::take(&mut self.scene).update(now);
    }

    pub fn dispatch(&mut self, message: Message, now: Timestamp) {
        debug!(?message, now, index = self.index, "dispatch");
        match message {
            Message::RevealHint => self.reveal_hint(now),
            Message::RevealAnswer => self.reveal_answer(now),
            Message::NextQuote => self.next_quote(),
            Message::NoOp => {}
        }
    }

    fn reveal_hint(&mut self, now: Timestamp) {
        let Some(hint) = self.hint.next() else {
            return;
        };
        let quote = self.current();
        let (name, text) = match hint {
            Hint::Character => (CHARACTER, format!("Said by {}", quote.character)),
            Hint::Movie => (MOVIE, format!("In {}", quote.movie)),
            Hint::None => return,
        };
        self.hint = hint;
        self.grow(name, text, now);
    }

    fn reveal_answer(&mut self, now: Timestamp) {
        if self.answered {
            return;
        }
        self.answered = true;
        let text = format!("\"{}\"", self.current().text);
        self.grow(QUOTE, text, now);
    }

    fn next_quote(&mut self) {
        self.index = (self.index + 1) % self.book.len();
        self.hint = Hint::None;
        self.answered = false;
        info!(index = self.index, "next quote");
        self.show_question();
    }

    fn grow(&mut self, name: &str, text: String, now: Timestamp) {
        let growth = Growth::from(&self.config);
        self.scene = grow_line(std::mem::take(&mut self.scene), name, text, now, growth);
    }

    /// Refresh the teaser and counter and hide every revealed line.
    fn show_question(&mut self) {
        let teaser = self.current().teaser(self.config.teaser_words);
        let counter = format!("Quote {}/{}", self.index + 1, self.book.len());
        let scene = std::mem::take(&mut self.scene)
            .set_text_of_prop(TEASER, teaser)
            .set_text_of_prop(COUNTER, counter);
        self.scene = [CHARACTER, MOVIE, QUOTE]
            .into_iter()
            .fold(scene, |scene, name| shrink_line(scene, name, HIDDEN));
    }
}

/// The fixed arrangement of props, before any quote is shown.
pub fn layout(config: &QuizConfig) -> Scene {
    let keys = &config.key_bindings;
    let heading = [("font-size", px(GROWN_FONT))];
    Scene::new()
        .upsert(
            TITLE,
            Prop::label(Position::new(20, 20), "Finish the quote").add_statics(heading.clone()),
        )
        .upsert(COUNTER, Prop::label(Position::new(640, 20), ""))
        .upsert(
            TEASER,
            Prop::label(Position::new(20, 80), "").add_statics(heading),
        )
        .upsert(CHARACTER, Prop::label(Position::new(20, 140), HIDDEN))
        .upsert(MOVIE, Prop::label(Position::new(20, 180), HIDDEN))
        .upsert(QUOTE, Prop::label(Position::new(20, 240), HIDDEN))
        .upsert(
            HINT_BUTTON,
            Prop::button(
                Position::new(20, 320),
                format!("Hint ({})", keys.hint),
                Message::RevealHint,
            ),
        )
        .upsert(
            ANSWER_BUTTON,
            Prop::button(
                Position::new(330, 320),
                format!("Answer ({})", keys.answer),
                Message::RevealAnswer,
            ),
        )
        .upsert(
            NEXT_BUTTON,
            Prop::button(
                Position::new(640, 320),
                format!("Next ({})", keys.next),
                Message::NextQuote,
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        let book = QuoteBook::new(vec![
            Quote::new("Here's looking at you, kid.", "Rick Blaine", "Casablanca"),
            Quote::new("I'll be back.", "The Terminator", "The Terminator"),
        ])
        .unwrap();
        Quiz::new(book, QuizConfig::default())
    }

    fn text<'a>(quiz: &'a Quiz, name: &str) -> &'a str {
        &quiz.scene().get(name).unwrap().text
    }

    fn width(quiz: &Quiz, name: &str, now: Timestamp) -> Option<String> {
        quiz.scene()
            .get(name)
            .unwrap()
            .render(now)
            .attribute("width")
            .map(str::to_string)
    }

    #[test]
    fn starts_with_hidden_lines() {
        let quiz = quiz();
        assert_eq!(text(&quiz, TEASER), "Here's looking at...");
        assert_eq!(text(&quiz, COUNTER), "Quote 1/2");
        for name in [CHARACTER, MOVIE, QUOTE] {
            assert_eq!(text(&quiz, name), HIDDEN);
            assert_eq!(width(&quiz, name, 0).as_deref(), Some("20px"));
        }
        assert_eq!(quiz.scene().len(), 9);
    }

    #[test]
    fn hints_reveal_character_then_movie() {
        let mut quiz = quiz();
        quiz.dispatch(Message::RevealHint, 0);
        assert_eq!(quiz.hint(), Hint::Character);
        assert_eq!(text(&quiz, CHARACTER), "Said by Rick Blaine");
        assert_eq!(text(&quiz, MOVIE), HIDDEN);

        quiz.dispatch(Message::RevealHint, 100);
        assert_eq!(text(&quiz, MOVIE), "In Casablanca");

        let before = quiz.scene().clone();
        quiz.dispatch(Message::RevealHint, 200);
        assert_eq!(quiz.hint(), Hint::Movie);
        assert_eq!(quiz.scene(), &before);
    }

    #[test]
    fn answer_grows_quote_line_over_ticks() {
        let mut quiz = quiz();
        quiz.dispatch(Message::RevealAnswer, 1_000);
        assert_eq!(text(&quiz, QUOTE), "\"Here's looking at you, kid.\"");
        assert_eq!(width(&quiz, QUOTE, 1_000).as_deref(), Some("20px"));

        quiz.tick(1_500);
        assert_eq!(width(&quiz, QUOTE, 1_500).as_deref(), Some("410px"));
        quiz.tick(2_500);
        assert_eq!(width(&quiz, QUOTE, 2_500).as_deref(), Some("800px"));
        assert!(quiz.scene().is_settled(2_500));
    }

    #[test]
    fn next_quote_resets_and_wraps() {
        let mut quiz = quiz();
        quiz.dispatch(Message::RevealHint, 0);
        quiz.dispatch(Message::RevealAnswer, 0);
        quiz.tick(5_000);

        quiz.dispatch(Message::NextQuote, 5_000);
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.hint(), Hint::None);
        assert!(!quiz.answered());
        assert_eq!(text(&quiz, TEASER), "I'll be back.");
        assert_eq!(text(&quiz, COUNTER), "Quote 2/2");
        assert_eq!(text(&quiz, QUOTE), HIDDEN);
        assert_eq!(width(&quiz, QUOTE, 5_000).as_deref(), Some("20px"));
        assert_eq!(quiz.scene().get(QUOTE).unwrap().modifiers.len(), 2);

        quiz.dispatch(Message::NextQuote, 6_000);
        assert_eq!(quiz.index(), 0);
    }

    #[test]
    fn noop_changes_nothing() {
        let mut quiz = quiz();
        let before = quiz.scene().clone();
        quiz.dispatch(Message::NoOp, 10);
        assert_eq!(quiz.scene(), &before);
    }

    #[test]
    fn shrink_line_on_unknown_name_creates_placeholder() {
        let scene = shrink_line(Scene::new(), "Nowhere", "?");
        let el = scene.get("Nowhere").unwrap().render(0);
        assert_eq!(el.text, "?");
        assert_eq!(el.attribute("font-size"), Some("12px"));
        assert_eq!(el.message, Message::NoOp);
    }
}
