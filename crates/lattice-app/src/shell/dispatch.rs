//! Command and action dispatch for the shell.

use std::io::Write;

use lattice_common::{Action, KeyEvent, LatticeError, MouseEvent};
use lattice_config::parse_keybind;
use lattice_tiling::TilingCommand;

use super::{Shell, ShellCommand, HELP};
use crate::canvas::AsciiCanvas;

impl Shell {
    pub(super) fn execute(
        &mut self,
        command: ShellCommand,
        out: &mut dyn Write,
    ) -> Result<(), LatticeError> {
        match command {
            ShellCommand::Key(combo) => self.key(&combo)?,
            ShellCommand::Type(text) => {
                for ch in text.chars() {
                    let key = if ch == ' ' { "Space".to_string() } else { ch.to_string() };
                    self.workspace.handle_key(&KeyEvent::plain(key));
                }
            }
            ShellCommand::Press(x, y) => {
                self.workspace.handle_mouse(&MouseEvent::pressed(x, y));
            }
            ShellCommand::Drag(x, y) => {
                self.workspace.handle_mouse(&MouseEvent::dragged(x, y));
            }
            ShellCommand::Release(x, y) => {
                self.workspace.handle_mouse(&MouseEvent::released(x, y));
            }
            ShellCommand::Click(x, y) => {
                self.workspace.handle_mouse(&MouseEvent::pressed(x, y));
                self.workspace.handle_mouse(&MouseEvent::released(x, y));
            }
            ShellCommand::Hover(x, y) => {
                self.workspace.handle_mouse(&MouseEvent::moved(x, y));
                writeln!(out, "{:?}", self.workspace.cursor_zone_at(x, y))?;
            }
            ShellCommand::Resize(width, height) => {
                self.dispatch(Action::ResizeWorkspace { width, height })?
            }
            ShellCommand::Edit(text) => {
                let document = self.workspace.focused_document()?;
                self.workspace.bindings_mut().edit(document, text)?;
                self.workspace.sync_documents();
            }
            ShellCommand::Render => {
                let bounds = self.workspace.bounds(self.workspace.root())?;
                let mut canvas = AsciiCanvas::new(bounds.right(), bounds.bottom());
                self.workspace.render(&mut canvas);
                write!(out, "{canvas}")?;
            }
            ShellCommand::Dump => {
                let snapshot = self.workspace.snapshot()?;
                let json = serde_json::to_string_pretty(&snapshot)
                    .map_err(|e| LatticeError::Other(format!("failed to serialize layout: {e}")))?;
                writeln!(out, "{json}")?;
            }
            ShellCommand::Layout => {
                for (pane, rect) in self.workspace.compute_layout() {
                    let marker = if pane == self.workspace.focused() { "*" } else { " " };
                    writeln!(
                        out,
                        "{marker}{pane} {},{} {}x{}",
                        rect.x, rect.y, rect.width, rect.height
                    )?;
                }
            }
            ShellCommand::Help => {
                writeln!(out, "{HELP}")?;
                for action in Action::palette_actions() {
                    if let Some(keys) = self.registry.keybind_for_action(&action) {
                        writeln!(out, "  {keys:<18} {}", action.label())?;
                    }
                }
            }
            ShellCommand::Quit => self.dispatch(Action::Quit)?,
        }
        Ok(())
    }

    /// Resolve a key through the keybind registry, falling back to the
    /// focused pane's content.
    fn key(&mut self, combo: &str) -> Result<(), LatticeError> {
        let parsed = parse_keybind(combo)?;
        if let Some(action) = self.registry.lookup(&parsed).cloned() {
            return self.dispatch(action);
        }
        let event = if parsed.modifiers.is_empty() && combo.chars().count() == 1 {
            KeyEvent::plain(combo)
        } else {
            parsed.to_event()
        };
        self.workspace.handle_key(&event);
        Ok(())
    }

    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) -> Result<(), LatticeError> {
        tracing::debug!(action = action.label(), "dispatch");
        if let Some(command) = TilingCommand::from_action(&action) {
            self.workspace.execute(command)?;
            return Ok(());
        }
        match action {
            Action::ResizeWorkspace { width, height } => self.workspace.resize(width, height)?,
            Action::ReloadDocument => {
                let document = self.workspace.focused_document()?;
                self.workspace.content_changed(document)?;
            }
            Action::Quit => {
                tracing::info!("quit requested");
                self.running = false;
            }
            _ => {}
        }
        Ok(())
    }
}
