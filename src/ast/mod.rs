//! Value tree.
//!
//! The parser produces a [`Group`] for the `library` statement; every
//! nested statement is an [`Attr`] whose value is a [`ValueNode`] or a
//! nested [`Group`]. All nodes carry the [`Span`](crate::syntax::Span) of
//! the text they came from.

pub mod enums;
pub mod expr;
mod group;
mod value;

pub use group::{Attr, AttrValue, Group};
pub use value::{Value, ValueKind, ValueNode};
