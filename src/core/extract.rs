//! Message descriptor extraction from call expressions and JSX elements.
//!
//! A descriptor is produced whenever a tracked binding is invoked with an
//! object literal carrying `id`/`defaultMessage`, or a `defineMessages`-style
//! map of such objects, or a `<FormattedMessage/>` element. Dynamic message
//! values are skipped rather than reported.

use swc_common::Span;
use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElementName, JSXExpr,
    JSXOpeningElement, Lit, MemberProp, ObjectLit, Prop, PropName, PropOrSpread,
};

use crate::core::imports::MacroImports;

/// A message definition found in source, with the span of the node the
/// diagnostics should anchor to.
#[derive(Debug, Default)]
pub struct MessageDescriptor {
    pub id: Option<String>,
    pub default_message: Option<String>,
    pub anchor: Option<Span>,
}

/// Evaluate an expression to a static string if possible.
/// Handles string literals and template literals with no interpolation.
fn static_string(expr: &Expr) -> Option<(String, Span)> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|v| (v.to_string(), s.span)),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|c| c.as_str())
            .map(|v| (v.to_string(), tpl.span)),
        _ => None,
    }
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// Build a descriptor from an object literal with `id`/`defaultMessage` keys.
fn descriptor_from_object(obj: &ObjectLit) -> MessageDescriptor {
    let mut descriptor = MessageDescriptor::default();

    for prop in &obj.props {
        if let PropOrSpread::Prop(prop) = prop
            && let Prop::KeyValue(kv) = &**prop
            && let Some(key) = prop_name(&kv.key)
        {
            match key.as_str() {
                "id" => {
                    if let Some((value, _)) = static_string(&kv.value) {
                        descriptor.id = Some(value);
                    }
                }
                "defaultMessage" => {
                    if let Some((value, span)) = static_string(&kv.value) {
                        descriptor.default_message = Some(value);
                        descriptor.anchor = Some(span);
                    }
                }
                _ => {}
            }
        }
    }

    descriptor
}

fn is_descriptor_object(obj: &ObjectLit) -> bool {
    obj.props.iter().any(|prop| {
        if let PropOrSpread::Prop(prop) = prop
            && let Prop::KeyValue(kv) = &**prop
            && let Some(key) = prop_name(&kv.key)
        {
            key == "id" || key == "defaultMessage"
        } else {
            false
        }
    })
}

fn is_tracked_callee(call: &CallExpr, imports: &MacroImports) -> bool {
    let Callee::Expr(callee) = &call.callee else {
        return false;
    };
    match &**callee {
        Expr::Ident(ident) => imports.contains(ident.sym.as_str()),
        // intl.formatMessage({...}): the receiver is a runtime value, so
        // match on the property name alone.
        Expr::Member(member) => {
            if let MemberProp::Ident(prop) = &member.prop {
                prop.sym.as_str() == "formatMessage"
            } else {
                false
            }
        }
        _ => false,
    }
}

/// Extract message descriptors from a call expression.
///
/// A call to a tracked binding with a descriptor object yields one
/// descriptor; with a `defineMessages` map it yields one per entry.
pub fn extract_from_call(call: &CallExpr, imports: &MacroImports) -> Vec<MessageDescriptor> {
    if !is_tracked_callee(call, imports) {
        return Vec::new();
    }

    let Some(arg) = call.args.first() else {
        return Vec::new();
    };
    if arg.spread.is_some() {
        return Vec::new();
    }
    let Expr::Object(obj) = &*arg.expr else {
        return Vec::new();
    };

    if is_descriptor_object(obj) {
        return vec![descriptor_from_object(obj)];
    }

    // defineMessages({ key: { id, defaultMessage }, ... })
    obj.props
        .iter()
        .filter_map(|prop| {
            if let PropOrSpread::Prop(prop) = prop
                && let Prop::KeyValue(kv) = &**prop
                && let Expr::Object(inner) = &*kv.value
            {
                Some(descriptor_from_object(inner))
            } else {
                None
            }
        })
        .collect()
}

/// Extract a message descriptor from a JSX element like `<FormattedMessage/>`.
pub fn extract_from_jsx(
    element: &JSXOpeningElement,
    imports: &MacroImports,
) -> Option<MessageDescriptor> {
    let JSXElementName::Ident(tag) = &element.name else {
        return None;
    };
    if !imports.contains(tag.sym.as_str()) {
        return None;
    }

    let mut descriptor = MessageDescriptor::default();

    for attr in &element.attrs {
        let JSXAttrOrSpread::JSXAttr(attr) = attr else {
            continue;
        };
        let JSXAttrName::Ident(name) = &attr.name else {
            continue;
        };

        let value = match &attr.value {
            Some(JSXAttrValue::Str(s)) => s.value.as_str().map(|v| (v.to_string(), s.span)),
            Some(JSXAttrValue::JSXExprContainer(container)) => {
                if let JSXExpr::Expr(expr) = &container.expr {
                    static_string(expr)
                } else {
                    None
                }
            }
            _ => None,
        };

        match name.sym.as_str() {
            "id" => descriptor.id = value.map(|(v, _)| v),
            "defaultMessage" => {
                if let Some((v, span)) = value {
                    descriptor.default_message = Some(v);
                    descriptor.anchor = Some(span);
                }
            }
            _ => {}
        }
    }

    Some(descriptor)
}
