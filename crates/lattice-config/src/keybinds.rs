//! Keybind parsing and validation.

use std::collections::HashMap;
use std::fmt;

use lattice_common::{ConfigError, KeyEvent, Modifiers};

use crate::schema::KeybindConfig;

/// A parsed key combination, e.g. `Ctrl+H`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    /// Normalized key name ("H", "Enter", "F1").
    pub key: String,
}

impl KeyCombo {
    /// The combo a key event would trigger.
    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            modifiers: event.modifiers,
            key: normalize_key_name(&event.key),
        }
    }

    pub fn to_event(&self) -> KeyEvent {
        KeyEvent::new(self.key.clone(), self.modifiers)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (on, name) in [
            (m.ctrl, "Ctrl"),
            (m.alt, "Alt"),
            (m.shift, "Shift"),
            (m.super_key, "Super"),
        ] {
            if on {
                write!(f, "{name}+")?;
            }
        }
        f.write_str(&self.key)
    }
}

/// Parse a keybind string like `"Ctrl+H"` or `"Ctrl+Shift+Enter"`.
///
/// Modifier names are case-insensitive; `Control`, `Option`, `Cmd`,
/// `Win` and `Meta` are accepted as aliases. The last token is the key.
pub fn parse_keybind(s: &str) -> Result<KeyCombo, ConfigError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((key, mods)) = tokens.split_last() else {
        return Err(ConfigError::ValidationError("empty keybind".into()));
    };
    if key.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Modifiers::NONE;
    for token in mods {
        match token.to_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" => modifiers.ctrl = true,
            "alt" | "option" | "opt" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            "super" | "win" | "meta" => modifiers.super_key = true,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "unrecognized modifier '{token}' in keybind '{s}'"
                )))
            }
        }
    }

    Ok(KeyCombo {
        modifiers,
        key: normalize_key_name(key),
    })
}

fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => lower,
            }
        }
    }
}

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("split_horizontal", &config.split_horizontal),
        ("split_vertical", &config.split_vertical),
        ("close_pane", &config.close_pane),
        ("focus_next", &config.focus_next),
        ("focus_prev", &config.focus_prev),
    ]
}

/// Validate that every keybind parses and no two map to the same combo.
pub fn validate_keybinds(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<KeyCombo, &str> = HashMap::new();
    for (name, binding) in all_keybinds(config) {
        let combo = parse_keybind(binding)?;
        if let Some(existing) = seen.get(&combo) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing}' and '{name}'"
            )));
        }
        seen.insert(combo, name);
    }
    Ok(())
}
