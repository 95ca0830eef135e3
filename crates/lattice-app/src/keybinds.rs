//! Keybind registry: maps parsed key combos to runtime `Action`s.

use std::collections::HashMap;

use lattice_common::Action;
use lattice_config::keybinds::{parse_keybind, KeyCombo};
use lattice_config::schema::KeybindConfig;

/// Built from [`KeybindConfig`] at startup.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings: [(&str, Action); 5] = [
            (&config.split_horizontal, Action::SplitHorizontal),
            (&config.split_vertical, Action::SplitVertical),
            (&config.close_pane, Action::ClosePane),
            (&config.focus_next, Action::FocusNextPane),
            (&config.focus_prev, Action::FocusPrevPane),
        ];

        for (binding, action) in mappings {
            match parse_keybind(binding) {
                Ok(combo) => {
                    bindings.insert(combo, action);
                }
                Err(e) => tracing::warn!("invalid keybind '{binding}': {e}"),
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Display string for an action's keybind (reverse lookup).
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| combo.to_string())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
