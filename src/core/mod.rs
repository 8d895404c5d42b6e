//! Core checking engine.
//!
//! One pass per source file: parse with swc, walk the AST once with
//! [`checker::FileChecker`], and collect issues. Passes are fully
//! independent (each owns its tracked-import context and source map), so
//! the CLI runs them in parallel with rayon.
//!
//! ## Module Structure
//!
//! - `source`: source location types shared with the reporter
//! - `parser`: swc-based TSX parsing
//! - `scanner`: include/ignore file discovery
//! - `imports`: tracked message-framework import bindings
//! - `extract`: message-definition candidate extraction from AST nodes
//! - `checker`: the per-file rule driver

pub mod checker;
pub mod extract;
pub mod imports;
pub mod parser;
pub mod scanner;
pub mod source;

pub use checker::FileChecker;
pub use extract::MessageDescriptor;
pub use imports::MacroImports;
pub use parser::{ParsedSource, parse_source};
pub use scanner::{ScanResult, scan_files};
pub use source::{SourceContext, SourceLocation};
