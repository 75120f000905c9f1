// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Script builders - page scripts evaluated on behalf of a Component
//
// Every script is a function body ending in `return ...;`, the shape WebDriver's
// execute_script expects. Drivers evaluating expressions wrap it themselves
// (see `wrap_function`).
//
// Escaping rules:
// - Query strings are data. They are embedded as JSON string literals, so a
//   quote inside a query cannot end the literal.
// - Call expressions are code in the page framework's own syntax. They are
//   inserted verbatim and must come from trusted test code.
// - `invocation()` builds a call expression from a validated method name and
//   JSON-serialized arguments.

use crate::error::{Error, Result};
use crate::options::ComponentOptions;
use serde_json::Value;

/// Encodes `value` as a JavaScript string literal.
///
/// JSON string syntax is valid JavaScript; U+2028 and U+2029 are escaped as
/// well since pre-ES2019 engines treat them as line terminators.
pub fn js_string_literal(value: &str) -> String {
    Value::String(value.to_owned())
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Builds `name(arg0, arg1, ...)` with each argument serialized as JSON.
///
/// `name` must be a dotted path of JavaScript identifiers (`getStore().getCount`
/// is rejected, `getStore` or `store.getCount` are fine).
pub fn invocation(name: &str, args: &[Value]) -> Result<String> {
    if !is_member_path(name) {
        return Err(Error::InvalidArgument(format!(
            "'{}' is not a method name",
            name
        )));
    }

    let args = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}({})", name, args))
}

/// Wraps a function body as an arrow function expression.
///
/// For drivers that evaluate expressions and invoke function results.
pub fn wrap_function(body: &str) -> String {
    format!("() => {{\n{}\n}}", body)
}

fn is_member_path(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Builds the scripts for one component query
#[derive(Debug, Clone, Copy)]
pub struct ScriptBuilder<'a> {
    options: &'a ComponentOptions,
}

impl<'a> ScriptBuilder<'a> {
    pub fn new(options: &'a ComponentOptions) -> Self {
        Self { options }
    }

    /// Expression resolving the first component matching `query`
    ///
    /// Evaluates to `undefined` when nothing matches.
    pub fn component(&self, query: &str) -> String {
        format!(
            "{}({})[0]",
            self.options.query_function,
            js_string_literal(query)
        )
    }

    /// Returns the root DOM node of the first match.
    pub fn element(&self, query: &str) -> String {
        format!(
            "return {}.{};",
            self.component(query),
            self.options.dom_accessor
        )
    }

    /// Evaluates `expression` against the first match, letting page errors escape.
    pub fn call(&self, query: &str, expression: &str) -> String {
        format!("return {}.{};", self.component(query), expression)
    }

    /// Evaluates `expression` against the first match, returning null on any page error.
    pub fn safe_call(&self, query: &str, expression: &str) -> String {
        format!(
            "try {{\n    return {}.{};\n}} catch (e) {{\n    return null;\n}}",
            self.component(query),
            expression
        )
    }

    /// Returns the ids of the first match's descendants matching `filter`.
    pub fn children_ids(&self, query: &str, filter: &str) -> String {
        format!(
            "var self = {component};\n\
             var children = self.query({filter});\n\
             var ids = [];\n\
             for (var i = 0; i < children.length; i++) {{\n    \
                 ids.push(children[i].{id});\n\
             }}\n\
             return ids;",
            component = self.component(query),
            filter = js_string_literal(filter),
            id = self.options.id_accessor,
        )
    }

    /// Returns the number of components matching `query`, 0 if the query throws.
    pub fn count(&self, query: &str) -> String {
        format!(
            "try {{\n    return {}({}).length;\n}} catch (e) {{\n    return 0;\n}}",
            self.options.query_function,
            js_string_literal(query)
        )
    }
}
