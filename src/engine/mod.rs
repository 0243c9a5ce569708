//! Engine — the scene/animation core.
//!
//! A `Scene` maps names to `Prop`s, each prop carries `Modifier`s, and a
//! modifier is either a fixed attribute or a linear interpolation over a
//! `TimeSpan`. Every operation returns a new value; nothing is mutated in
//! place across callers.
//!
//! The engine understands time and animation. It never deals with
//! terminals, input, or quiz rules.

pub mod modifier;
pub mod prop;
pub mod scene;

use serde::{Deserialize, Serialize};

use crate::types::{RenderedElement, Timestamp};
use scene::Scene;

/// One rendered snapshot of a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub now: Timestamp,
    pub elements: Vec<RenderedElement>,
}

pub struct Engine;

impl Engine {
    /// One clock tick: advance every animation to `now`.
    pub fn tick(scene: Scene, now: Timestamp) -> Scene {
        scene.update(now)
    }

    pub fn frame(scene: &Scene, now: Timestamp) -> Frame {
        Frame {
            now,
            elements: scene.render(now),
        }
    }
}
