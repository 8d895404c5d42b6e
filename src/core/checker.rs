//! Per-file rule driver.
//!
//! Walks a parsed module once, tracks message-framework imports, extracts
//! message descriptors from calls and JSX, and runs every enabled rule
//! against each message's ICU content. Descriptors without a static
//! `defaultMessage` are skipped silently.

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{CallExpr, ImportDecl, JSXOpeningElement, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::{
    core::{
        MacroImports, MessageDescriptor, SourceContext, SourceLocation,
        extract::{extract_from_call, extract_from_jsx},
    },
    icu,
    issues::{Issue, Rule, ViolationIssue},
    rules::LintRule,
};

pub struct FileChecker<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    rules: &'a [&'static LintRule],
    module_name: &'a str,
    imports: MacroImports,
    issues: Vec<Issue>,
}

impl<'a> FileChecker<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        rules: &'a [&'static LintRule],
        module_name: &'a str,
    ) -> Self {
        Self {
            file_path,
            source_map,
            rules,
            module_name,
            imports: MacroImports::new(),
            issues: Vec::new(),
        }
    }

    pub fn check(mut self, module: &Module) -> Vec<Issue> {
        module.visit_with(&mut self);
        self.issues
    }

    fn check_descriptors(&mut self, descriptors: Vec<MessageDescriptor>) {
        for descriptor in descriptors {
            let (Some(message), Some(anchor)) = (&descriptor.default_message, descriptor.anchor)
            else {
                continue;
            };

            for rule in self.rules {
                match icu::parse(message) {
                    Ok(ast) => {
                        if let Err(violation) = (rule.verify)(&ast) {
                            self.report(rule.meta.id, violation.message.to_string(), anchor);
                        }
                    }
                    Err(error) => {
                        self.report(rule.meta.id, error.to_string(), anchor);
                    }
                }
            }
        }
    }

    fn report(&mut self, rule: Rule, message: String, anchor: Span) {
        let loc = self.source_map.lookup_char_pos(anchor.lo);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|line| line.to_string())
            .unwrap_or_default();
        let location = SourceLocation::new(self.file_path, loc.line, loc.col_display + 1);

        self.issues.push(Issue::Violation(ViolationIssue {
            context: SourceContext::new(location, source_line),
            rule,
            message,
        }));
    }
}

impl Visit for FileChecker<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        self.imports.record(node, self.module_name);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        let descriptors = extract_from_call(node, &self.imports);
        self.check_descriptors(descriptors);
        node.visit_children_with(self);
    }

    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        if let Some(descriptor) = extract_from_jsx(node, &self.imports) {
            self.check_descriptors(vec![descriptor]);
        }
        node.visit_children_with(self);
    }
}
