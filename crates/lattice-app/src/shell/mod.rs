//! Headless shell: owns the workspace and drives it from text commands.

mod command;
mod dispatch;


pub use command::{ShellCommand, HELP};

use std::io::{BufRead, Write};

use lattice_common::{LatticeError, Rect};
use lattice_config::LatticeConfig;
use lattice_tiling::{ContentSpan, InMemoryDocuments, TextTranslator, TilingOptions, Workspace};

use crate::keybinds::KeybindRegistry;

pub struct Shell {
    pub(super) workspace: Workspace<InMemoryDocuments>,
    pub(super) registry: KeybindRegistry,
    pub(super) running: bool,
}

impl Shell {
    pub fn new(config: &LatticeConfig) -> Result<Self, LatticeError> {
        let options = TilingOptions {
            separator_thickness: config.layout.separator_thickness as i32,
            default_fraction: config.layout.default_split_fraction,
            focus_border_width: config.layout.focus_border_width as i32,
        };
        let welcome = ContentSpan::new(
            config.document.welcome_url.clone(),
            config.document.welcome_text.clone(),
        );
        let bounds = Rect::new(0, 0, config.window.width as i32, config.window.height as i32);
        let workspace = Workspace::new(
            bounds,
            InMemoryDocuments::new(welcome),
            Box::new(TextTranslator),
            options,
        )?;
        let registry = KeybindRegistry::from_config(&config.keybinds);
        tracing::info!(
            width = bounds.width,
            height = bounds.height,
            keybinds = registry.len(),
            "shell ready"
        );

        Ok(Self {
            workspace,
            registry,
            running: true,
        })
    }

    pub fn workspace(&self) -> &Workspace<InMemoryDocuments> {
        &self.workspace
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Parse and execute one line, writing any output to `out`.
    pub fn run_line(&mut self, line: &str, out: &mut dyn Write) -> Result<(), LatticeError> {
        match ShellCommand::parse(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(()),
        }
    }

    /// Execute lines until input ends or `quit`. A failing line is
    /// reported and the shell carries on with the tree unchanged.
    pub fn run(&mut self, input: impl BufRead, out: &mut dyn Write) -> Result<(), LatticeError> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            if let Err(e) = self.run_line(&line, out) {
                tracing::warn!(line = number + 1, "{e}");
                writeln!(out, "error: {e}")?;
            }
            if !self.running {
                break;
            }
        }
        Ok(())
    }
}
