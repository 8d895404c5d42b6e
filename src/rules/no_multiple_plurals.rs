//! Disallow multiple plural constructs in the same message.
//!
//! Messages with several plural rules multiply translation variants and
//! most translation vendors render them incorrectly; such messages should
//! be split instead.

use crate::icu::MessageElement;
use crate::issues::Rule;
use crate::rules::{RuleMeta, Violation};

pub const META: RuleMeta = RuleMeta {
    id: Rule::NoMultiplePlurals,
    description: "Disallow multiple plural rules in the same message",
    url: "https://formatjs.github.io/docs/tooling/linter#no-multiple-plurals",
    fixable: true,
};

const MESSAGE: &str = "Cannot specify more than 1 plural rules";

pub fn verify(ast: &[MessageElement]) -> Result<(), Violation> {
    let mut plural_count = 0;
    verify_ast(ast, &mut plural_count)
}

/// The counter is shared across the whole traversal, not per branch: a
/// plural nested inside another plural's selector counts against the same
/// limit as a sibling would.
fn verify_ast(ast: &[MessageElement], plural_count: &mut usize) -> Result<(), Violation> {
    for element in ast {
        if let MessageElement::Plural { options, .. } = element {
            *plural_count += 1;
            if *plural_count > 1 {
                return Err(Violation::new(MESSAGE));
            }
            for (_selector, elements) in options {
                verify_ast(elements, plural_count)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icu::parse;

    fn check(message: &str) -> Result<(), Violation> {
        verify(&parse(message).unwrap())
    }

    #[test]
    fn no_plural_passes() {
        assert_eq!(check("Hello {name}"), Ok(()));
    }

    #[test]
    fn single_plural_passes() {
        assert_eq!(
            check("{count, plural, one {1 item} other {many items}}"),
            Ok(())
        );
    }

    #[test]
    fn single_plural_with_many_selectors_passes() {
        assert_eq!(
            check("{n, plural, =0 {none} one {one} few {few} many {many} other {other}}"),
            Ok(())
        );
    }

    #[test]
    fn sibling_plurals_fail() {
        let message =
            "{a, plural, one {x} other {y}} and {b, plural, one {x} other {y}}";
        let violation = check(message).unwrap_err();
        assert_eq!(violation.message, MESSAGE);
    }

    #[test]
    fn plural_nested_inside_plural_selector_fails() {
        let message = "{a, plural, one {{b, plural, one {x} other {y}}} other {z}}";
        assert!(check(message).is_err());
    }

    #[test]
    fn plural_and_selectordinal_fail_together() {
        let message =
            "{a, plural, one {x} other {y}}{b, selectordinal, one {#st} other {#th}}";
        assert!(check(message).is_err());
    }

    #[test]
    fn select_does_not_count_as_plural() {
        assert_eq!(
            check("{g, select, female {her} other {their}} {n, plural, one {x} other {y}}"),
            Ok(())
        );
    }
}
