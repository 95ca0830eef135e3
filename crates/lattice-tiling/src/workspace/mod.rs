//! The Workspace owns the pane arena, the root handle and the single
//! focused-leaf pointer, and exposes split/close/select to the shell.

mod dispatch;
mod documents;
mod focus;
mod geometry;
mod invariants;
mod operations;
mod routing;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;
