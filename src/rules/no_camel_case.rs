//! Disallow camel case placeholders in messages.
//!
//! `"Hello {firstName}"` forces every locale's translators and tooling to
//! reproduce the exact casing; lower-case placeholder names avoid a whole
//! class of silent interpolation misses.

use std::sync::LazyLock;

use regex::Regex;

use crate::icu::MessageElement;
use crate::issues::Rule;
use crate::rules::{RuleMeta, Violation};

pub const META: RuleMeta = RuleMeta {
    id: Rule::NoCamelCase,
    description: "Disallow camel case placeholders in message",
    url: "https://formatjs.github.io/docs/tooling/linter#no-camel-case",
    fixable: true,
};

const MESSAGE: &str = "Camel case arguments are not allowed";

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("camel case pattern is valid"));

/// Walk the message tree; fail on the first placeholder name containing an
/// upper-case character. Recurses into plural selector messages only;
/// other element kinds are passed over.
pub fn verify(ast: &[MessageElement]) -> Result<(), Violation> {
    for element in ast {
        match element {
            MessageElement::Argument { value } => {
                if CAMEL_CASE.is_match(value) {
                    return Err(Violation::new(MESSAGE));
                }
            }
            MessageElement::Plural { value, options, .. } => {
                if CAMEL_CASE.is_match(value) {
                    return Err(Violation::new(MESSAGE));
                }
                for (_selector, elements) in options {
                    verify(elements)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}
