//! Lint rules for ICU message structure.
//!
//! Each rule is a pure validator over a parsed message tree: it either
//! completes silently or returns the first [`Violation`] it finds, so a
//! message produces at most one diagnostic per rule. Recursive validators
//! propagate the violation upward with `?` instead of unwinding.
//!
//! ## Module Structure
//!
//! - `no_camel_case`: forbid upper-case characters in placeholder names
//! - `no_multiple_plurals`: forbid more than one plural construct per message

pub mod no_camel_case;
pub mod no_multiple_plurals;

use crate::icu::MessageElement;
use crate::issues::Rule;

/// The first offending element a validator found.
///
/// Carries the rule's fixed descriptive message; position comes from the
/// message's anchor node, not from the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub message: &'static str,
}

impl Violation {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Validator signature shared by every rule.
pub type Verify = fn(&[MessageElement]) -> Result<(), Violation>;

/// Static metadata a rule declares about itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleMeta {
    /// Stable identifier, also used in config and CLI selection.
    pub id: Rule,
    /// One-line description for `intlint rules`.
    pub description: &'static str,
    /// Documentation reference.
    pub url: &'static str,
    /// Advisory only; no autofix is implemented.
    pub fixable: bool,
}

/// A rule definition: metadata plus its validator.
#[derive(Debug, Clone, Copy)]
pub struct LintRule {
    pub meta: RuleMeta,
    pub verify: Verify,
}

/// Every known rule, in reporting order.
pub const ALL: &[LintRule] = &[
    LintRule {
        meta: no_camel_case::META,
        verify: no_camel_case::verify,
    },
    LintRule {
        meta: no_multiple_plurals::META,
        verify: no_multiple_plurals::verify,
    },
];

/// Look up a rule by its stable identifier.
pub fn find(id: Rule) -> Option<&'static LintRule> {
    ALL.iter().find(|rule| rule.meta.id == id)
}
