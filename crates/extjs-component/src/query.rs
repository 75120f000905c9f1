// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Component query composition
//
// Ext JS component queries relate selectors with three combinators:
// - " "   descendant at any depth
// - " > " direct child
// - " ^ " ancestor at any depth
//
// Composition is purely textual: the base query, the combinator and the
// relative query are concatenated. Nothing is trimmed or normalized, so
// composing never adds more than the one separator.
//
// See: <http://docs.sencha.com/extjs/5.1.3/Ext.ComponentQuery.html>

use std::fmt;

/// Query matching every component, used as the default children filter
pub const ANY: &str = "*";

/// Structural relation between a base query and a relative query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant at any depth (`a b`)
    Descendant,
    /// Direct child (`a > b`)
    Child,
    /// Ancestor at any depth (`a ^ b`)
    Ancestor,
}

impl Combinator {
    /// Separator inserted between the base and the relative query
    pub fn separator(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
            Combinator::Ancestor => " ^ ",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.separator())
    }
}

/// Joins `base` and `relative` with the combinator's separator.
pub fn compose(base: &str, combinator: Combinator, relative: &str) -> String {
    let separator = combinator.separator();
    let mut query = String::with_capacity(base.len() + separator.len() + relative.len());
    query.push_str(base);
    query.push_str(separator);
    query.push_str(relative);
    query
}

/// Query addressing exactly one component by id: `[id=<id>]`.
///
/// Uniqueness relies on Ext JS assigning unique component ids within a page
/// session; it is not checked here.
pub fn id_query(id: &str) -> String {
    format!("[id={}]", id)
}
