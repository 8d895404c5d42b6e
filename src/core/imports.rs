//! Tracking of local bindings imported from the recognized i18n module.
//!
//! Only calls and JSX elements whose callee/tag resolves to one of these
//! bindings are treated as message definitions. A later import declaration
//! from the same module replaces the tracked set wholesale.

use std::collections::HashSet;

use swc_ecma_ast::{ImportDecl, ImportSpecifier};

#[derive(Debug, Default)]
pub struct MacroImports {
    locals: HashSet<String>,
}

impl MacroImports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an import declaration. If it imports from `module_name`, the
    /// tracked set is replaced with this declaration's local bindings.
    pub fn record(&mut self, decl: &ImportDecl, module_name: &str) {
        if decl.src.value.as_str() != Some(module_name) {
            return;
        }

        self.locals = decl
            .specifiers
            .iter()
            .map(|specifier| match specifier {
                ImportSpecifier::Named(named) => named.local.sym.to_string(),
                ImportSpecifier::Default(default) => default.local.sym.to_string(),
                ImportSpecifier::Namespace(ns) => ns.local.sym.to_string(),
            })
            .collect();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locals.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use swc_common::SourceMap;
    use swc_ecma_ast::ModuleItem;

    use super::*;
    use crate::core::parse_source;

    fn first_import(code: &str) -> (MacroImports, ImportDecl) {
        let source_map: Arc<SourceMap> = Default::default();
        let parsed = parse_source(code.to_string(), "test.tsx", source_map).unwrap();
        let decl = parsed
            .module
            .body
            .iter()
            .find_map(|item| match item {
                ModuleItem::ModuleDecl(swc_ecma_ast::ModuleDecl::Import(decl)) => {
                    Some(decl.clone())
                }
                _ => None,
            })
            .unwrap();
        (MacroImports::new(), decl)
    }

    fn all_imports(code: &str) -> Vec<ImportDecl> {
        let source_map: Arc<SourceMap> = Default::default();
        let parsed = parse_source(code.to_string(), "test.tsx", source_map).unwrap();
        parsed
            .module
            .body
            .iter()
            .filter_map(|item| match item {
                ModuleItem::ModuleDecl(swc_ecma_ast::ModuleDecl::Import(decl)) => {
                    Some(decl.clone())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn tracks_named_specifiers() {
        let (mut imports, decl) =
            first_import(r#"import { defineMessages, FormattedMessage } from 'react-intl';"#);
        imports.record(&decl, "react-intl");
        assert!(imports.contains("defineMessages"));
        assert!(imports.contains("FormattedMessage"));
    }

    #[test]
    fn tracks_renamed_specifiers_by_local_name() {
        let (mut imports, decl) =
            first_import(r#"import { defineMessages as dm } from 'react-intl';"#);
        imports.record(&decl, "react-intl");
        assert!(imports.contains("dm"));
        assert!(!imports.contains("defineMessages"));
    }

    #[test]
    fn tracks_default_and_namespace_specifiers() {
        let (mut imports, decl) = first_import(r#"import intl from 'react-intl';"#);
        imports.record(&decl, "react-intl");
        assert!(imports.contains("intl"));

        let (mut imports, decl) = first_import(r#"import * as reactIntl from 'react-intl';"#);
        imports.record(&decl, "react-intl");
        assert!(imports.contains("reactIntl"));
    }

    #[test]
    fn ignores_other_modules() {
        let (mut imports, decl) = first_import(r#"import { defineMessages } from 'other-lib';"#);
        imports.record(&decl, "react-intl");
        assert!(imports.is_empty());
    }

    #[test]
    fn second_import_replaces_tracked_set() {
        let decls = all_imports(
            r#"
            import { defineMessages } from 'react-intl';
            import { FormattedMessage } from 'react-intl';
            "#,
        );
        let mut imports = MacroImports::new();
        for decl in &decls {
            imports.record(decl, "react-intl");
        }
        assert!(imports.contains("FormattedMessage"));
        assert!(!imports.contains("defineMessages"));
    }
}
