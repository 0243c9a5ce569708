//! Headless, deterministic replay of a quiz round.
//!
//! Runs a fixed script against a `Quiz` on a simulated clock and records a
//! `Frame` after every step, so the engine's output can be inspected
//! without a terminal.

use tracing::info;

use crate::engine::{Engine, Frame};
use crate::quiz::Quiz;
use crate::types::{Message, Timestamp};

/// Hint, hint, answer, tick until every animation settles, next quote.
pub fn scripted_round(quiz: &mut Quiz) -> Vec<Frame> {
    let period = quiz.config().tick_ms.max(1);
    let mut now: Timestamp = 0;
    let mut frames = vec![Engine::frame(quiz.scene(), now)];

    for message in [Message::RevealHint, Message::RevealHint, Message::RevealAnswer] {
        quiz.dispatch(message, now);
        frames.push(Engine::frame(quiz.scene(), now));
        now += period;
    }

    loop {
        quiz.tick(now);
        frames.push(Engine::frame(quiz.scene(), now));
        if quiz.scene().is_settled(now) {
            break;
        }
        now += period;
    }

    quiz.dispatch(Message::NextQuote, now);
    frames.push(Engine::frame(quiz.scene(), now));

    info!(frames = frames.len(), end = now, "scripted round finished");
    frames
}
