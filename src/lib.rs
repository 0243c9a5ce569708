pub mod engine;
pub mod player;
pub mod quiz;
pub mod renderer;
pub mod trace;
pub mod types;
