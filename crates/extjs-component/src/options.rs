// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Component options - the in-page framework surface a Component talks to
//
// Defaults target Ext JS classic (5.x/6.x). Toolkits that expose the same
// Queryable API under different names can be reached by overriding these.

use serde::{Deserialize, Serialize};

/// Default global used to run a component query
pub const DEFAULT_QUERY_FUNCTION: &str = "Ext.ComponentQuery.query";

/// Default accessor for a component's root DOM node
pub const DEFAULT_DOM_ACCESSOR: &str = "el.dom";

/// Default accessor for a component's unique id
pub const DEFAULT_ID_ACCESSOR: &str = "getId()";

/// Options describing how scripts reach components in the page
///
/// # Example
///
/// ```ignore
/// use extjs_component::ComponentOptions;
///
/// // Ext JS modern toolkit keeps the root node under `element`
/// let options = ComponentOptions::new().dom_accessor("element.dom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentOptions {
    /// Global function taking a query string and returning an array of components
    pub query_function: String,

    /// Member path from a component to its root DOM node
    pub dom_accessor: String,

    /// Member expression on a component yielding its id
    pub id_accessor: String,
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self {
            query_function: DEFAULT_QUERY_FUNCTION.to_string(),
            dom_accessor: DEFAULT_DOM_ACCESSOR.to_string(),
            id_accessor: DEFAULT_ID_ACCESSOR.to_string(),
        }
    }
}

impl ComponentOptions {
    /// Creates options with the Ext JS defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global query function
    pub fn query_function(mut self, query_function: impl Into<String>) -> Self {
        self.query_function = query_function.into();
        self
    }

    /// Sets the member path to the root DOM node
    pub fn dom_accessor(mut self, dom_accessor: impl Into<String>) -> Self {
        self.dom_accessor = dom_accessor.into();
        self
    }

    /// Sets the member expression yielding a component id
    pub fn id_accessor(mut self, id_accessor: impl Into<String>) -> Self {
        self.id_accessor = id_accessor.into();
        self
    }
}
