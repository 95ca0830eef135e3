//! Line-oriented command syntax for the shell driver.

use lattice_common::LatticeError;

/// One parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// A key press, e.g. `key Ctrl+H` or `key a`.
    Key(String),
    /// Type each character of the text into the focused pane.
    Type(String),
    Press(i32, i32),
    Drag(i32, i32),
    Release(i32, i32),
    /// Press and release at the same point.
    Click(i32, i32),
    /// Pointer motion; reports the cursor zone under the pointer.
    Hover(i32, i32),
    Resize(i32, i32),
    /// Replace the focused pane's document text. `\n` starts a new line.
    Edit(String),
    Render,
    Dump,
    Layout,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, LatticeError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_lowercase().as_str() {
            "key" => ShellCommand::Key(required(verb, rest)?.to_string()),
            "type" => ShellCommand::Type(required(verb, rest)?.to_string()),
            "edit" => ShellCommand::Edit(rest.replace("\\n", "\n")),
            "press" => {
                let (x, y) = point(verb, rest)?;
                ShellCommand::Press(x, y)
            }
            "drag" => {
                let (x, y) = point(verb, rest)?;
                ShellCommand::Drag(x, y)
            }
            "release" => {
                let (x, y) = point(verb, rest)?;
                ShellCommand::Release(x, y)
            }
            "click" => {
                let (x, y) = point(verb, rest)?;
                ShellCommand::Click(x, y)
            }
            "hover" => {
                let (x, y) = point(verb, rest)?;
                ShellCommand::Hover(x, y)
            }
            "resize" => {
                let (w, h) = point(verb, rest)?;
                ShellCommand::Resize(w, h)
            }
            "render" => ShellCommand::Render,
            "dump" => ShellCommand::Dump,
            "layout" => ShellCommand::Layout,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(LatticeError::Input(format!("unknown command '{other}'"))),
        };
        Ok(Some(command))
    }
}

fn required<'a>(verb: &str, rest: &'a str) -> Result<&'a str, LatticeError> {
    if rest.is_empty() {
        return Err(LatticeError::Input(format!("'{verb}' needs an argument")));
    }
    Ok(rest)
}

fn point(verb: &str, rest: &str) -> Result<(i32, i32), LatticeError> {
    let mut parts = rest.split_whitespace().map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(a)), Some(Ok(b)), None) => Ok((a, b)),
        _ => Err(LatticeError::Input(format!(
            "'{verb}' expects two integers, got '{rest}'"
        ))),
    }
}

pub const HELP: &str = "\
commands:
  key <combo>        press a key (Ctrl+H split horizontal, Ctrl+V split vertical, Ctrl+X close)
  type <text>        type text into the focused pane
  press|drag|release|click <x> <y>
  hover <x> <y>      show the cursor zone at a point
  resize <w> <h>     resize the workspace
  edit <text>        replace the focused document text (\\n for newlines)
  render | layout | dump | help | quit";
