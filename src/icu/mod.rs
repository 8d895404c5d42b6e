//! ICU MessageFormat message trees.
//!
//! This module turns a raw message string like
//! `"{count, plural, one {# item} other {# items}}"` into an ordered
//! sequence of typed elements that rules can walk. The element shape is
//! deliberately close to the ICU MessageFormat AST: the placeholder name
//! lives in a field called `value`, and plural/select constructs carry an
//! ordered selector → sub-message mapping.

pub mod parser;

pub use parser::{ParseError, parse};

/// Selector → nested message, in source order.
///
/// Kept as a `Vec` rather than a map so traversal order matches the order
/// the selectors appear in the message.
pub type Options = Vec<(String, Vec<MessageElement>)>;

/// Whether a plural construct uses cardinal (`plural`) or ordinal
/// (`selectordinal`) rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralType {
    Cardinal,
    Ordinal,
}

/// A single node in a parsed ICU message.
///
/// `Plural` and `Select` options are never empty; the parser rejects
/// option-less constructs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageElement {
    /// Plain text between constructs.
    Literal { value: String },
    /// Simple placeholder: `{name}`.
    Argument { value: String },
    /// `{n, number}` or `{n, number, ::percent}`.
    Number { value: String, style: Option<String> },
    /// `{d, date}` with an optional style word.
    Date { value: String, style: Option<String> },
    /// `{t, time}` with an optional style word.
    Time { value: String, style: Option<String> },
    /// `{count, plural, ...}` or `{pos, selectordinal, ...}`.
    Plural {
        value: String,
        plural_type: PluralType,
        offset: u64,
        options: Options,
    },
    /// `{gender, select, ...}`.
    Select { value: String, options: Options },
    /// Rich text tag: `<b>bold {name}</b>`.
    Tag {
        value: String,
        children: Vec<MessageElement>,
    },
    /// `#` inside a plural option, substituted with the plural operand.
    Pound,
}

impl MessageElement {
    /// True for `plural` and `selectordinal` constructs.
    pub fn is_plural(&self) -> bool {
        matches!(self, MessageElement::Plural { .. })
    }
}
