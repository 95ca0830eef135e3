mod action_enum;
mod dispatch;

pub use action_enum::*;
