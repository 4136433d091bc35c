//! Attribute catalogue and group tables.

pub mod groups;
mod handler;
mod kind;

pub use handler::{EndCheck, GroupBuilder, GroupHandler, Occurrence, Rule, Syntax};
pub use kind::AttrKind;
