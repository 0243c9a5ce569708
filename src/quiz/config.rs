use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Clock period in milliseconds.
    pub tick_ms: u64,
    pub grow_duration_ms: u64,
    pub grow_from_px: i64,
    pub grow_to_px: i64,
    /// How many opening words of a quote are shown as the question.
    pub teaser_words: usize,
    pub key_bindings: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub hint: String,
    pub answer: String,
    pub next: String,
    pub quit: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            tick_ms: 100,
            grow_duration_ms: 1000,
            grow_from_px: 20,
            grow_to_px: 800,
            teaser_words: 3,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            hint: "h".into(),
            answer: "a".into(),
            next: "n".into(),
            quit: "q".into(),
        }
    }
}

impl QuizConfig {
    /// Load `~/.config/quote-quiz/config.json`, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("quote-quiz");
        path.push("config.json");
        path
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    if let Some(rest) = binding.strip_prefix("Alt-") {
        return event.modifiers.contains(KeyModifiers::ALT) && matches_key(rest, event.code);
    }
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        return event.modifiers.contains(KeyModifiers::CONTROL) && matches_key(rest, event.code);
    }

    // Plain bindings must not fire on Ctrl-x / Alt-x.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }
    matches_key(binding, event.code)
}

fn matches_key(name: &str, code: KeyCode) -> bool {
    match name {
        "Right" => code == KeyCode::Right,
        "Left" => code == KeyCode::Left,
        "Up" => code == KeyCode::Up,
        "Down" => code == KeyCode::Down,
        "Enter" => code == KeyCode::Enter,
        "Esc" => code == KeyCode::Esc,
        "Space" => code == KeyCode::Char(' '),
        "Tab" => code == KeyCode::Tab,
        s => {
            if let Some(n) = s.strip_prefix('F').and_then(|rest| rest.parse::<u8>().ok()) {
                return code == KeyCode::F(n);
            }
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_character_binding() {
        assert!(matches_binding("h", &key(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(!matches_binding("h", &key(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(!matches_binding("h", &key(KeyCode::Char('h'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn modifier_and_named_bindings() {
        assert!(matches_binding("Ctrl-n", &key(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!matches_binding("Ctrl-n", &key(KeyCode::Char('n'), KeyModifiers::NONE)));
        assert!(matches_binding("Alt-Enter", &key(KeyCode::Enter, KeyModifiers::ALT)));
        assert!(matches_binding("Right", &key(KeyCode::Right, KeyModifiers::NONE)));
        assert!(matches_binding("Space", &key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(matches_binding("F5", &key(KeyCode::F(5), KeyModifiers::NONE)));
        assert!(!matches_binding("Fx", &key(KeyCode::Char('F'), KeyModifiers::NONE)));
    }

    #[test]
    fn partial_config_keeps_defaults() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"tick_ms": 50, "key_bindings": {{"next": "Right"}}}}"#)?;
        let config = QuizConfig::load_from(file.path());
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.grow_to_px, 800);
        assert_eq!(config.key_bindings.next, "Right");
        assert_eq!(config.key_bindings.hint, "h");
        Ok(())
    }

    #[test]
    fn invalid_or_missing_config_gives_defaults() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "not json")?;
        assert_eq!(QuizConfig::load_from(file.path()), QuizConfig::default());
        assert_eq!(
            QuizConfig::load_from(Path::new("/nonexistent/config.json")),
            QuizConfig::default()
        );
        Ok(())
    }
}
