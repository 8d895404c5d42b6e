//! Intlint - ICU message linter for react-intl projects
//!
//! Intlint is a CLI tool and library for checking ICU MessageFormat usage in
//! JavaScript/TypeScript projects. It extracts message definitions from
//! `defineMessages`/`formatMessage` calls and `<FormattedMessage/>` elements,
//! parses their `defaultMessage` content, and validates the message structure
//! against a set of rules.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core checking engine (scan, parse, extract, check)
//! - `icu`: ICU MessageFormat parser and element tree
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Validation rules over parsed messages

pub mod cli;
pub mod config;
pub mod core;
pub mod icu;
pub mod issues;
pub mod rules;
