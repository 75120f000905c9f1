// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Component - Lazy handle to an Ext JS component
//
// A Component pairs a ScriptDriver with a component query (CQ). Like a
// Locator, it is lazy: nothing is resolved until an operation runs, and every
// operation resolves the query again against the current page.
//
// Key characteristics:
// - Lazy: holds a deferred lookup expression, never a resolved identity
// - Chainable: down(), child() and parent() derive new handles textually
// - Two tiers: call()/element()/children() propagate page-side errors,
//   safe_call()/id()/get()/invoke() turn them into None
//
// Each operation is exactly one driver round trip. No caching, no retries.

use crate::driver::ScriptDriver;
use crate::error::{Error, Result};
use crate::options::ComponentOptions;
use crate::query::{self, Combinator};
use crate::script::{self, ScriptBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Handle to the component(s) matched by an Ext JS component query.
///
/// The query should identify one component; when it matches several, the
/// first match is used.
///
/// # Examples
///
/// ```ignore
/// use extjs_component::Component;
/// use serde_json::json;
///
/// # async fn example(page: &playwright_rs::Page) -> extjs_component::Result<()> {
/// let form = Component::new(page, "taskForm");
///
/// // Any property, resolved when awaited
/// let rendered = form.get("rendered").await?;
/// assert_eq!(rendered, Some(json!(true)));
///
/// // Composition never touches the page
/// let title = form.down(r#"textfield[emptyText="Add a new task"]"#);
/// title.invoke("setValue", &[json!("Write tests")]).await?;
///
/// // One handle per child, each addressed by id
/// for field in form.children(Some("field")).await? {
///     println!("{} -> {:?}", field.query(), field.get("value").await?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Component<'d, D: ScriptDriver + ?Sized> {
    driver: &'d D,
    query: String,
    options: ComponentOptions,
}

impl<'d, D: ScriptDriver + ?Sized> Component<'d, D> {
    /// Creates a handle for `query` using the Ext JS defaults.
    ///
    /// The query is not validated. A query that is malformed or matches
    /// nothing only fails when an operation evaluates it.
    pub fn new(driver: &'d D, query: impl Into<String>) -> Self {
        Self::with_options(driver, query, ComponentOptions::default())
    }

    /// Creates a handle for `query` with custom framework options.
    pub fn with_options(driver: &'d D, query: impl Into<String>, options: ComponentOptions) -> Self {
        Self {
            driver,
            query: query.into(),
            options,
        }
    }

    /// Returns the component query of this handle
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the framework options of this handle
    pub fn options(&self) -> &ComponentOptions {
        &self.options
    }

    /// Returns the driver this handle evaluates through
    pub fn driver(&self) -> &'d D {
        self.driver
    }

    /// JavaScript expression resolving this component in the page.
    ///
    /// Useful for embedding the component into hand-written scripts.
    pub fn expression(&self) -> String {
        self.scripts().component(&self.query)
    }

    fn scripts(&self) -> ScriptBuilder<'_> {
        ScriptBuilder::new(&self.options)
    }

    fn derive(&self, query: String) -> Self {
        tracing::trace!("Derived component query: {}", query);
        Self {
            driver: self.driver,
            query,
            options: self.options.clone(),
        }
    }

    fn compose(&self, combinator: Combinator, relative: &str) -> Self {
        self.derive(query::compose(&self.query, combinator, relative))
    }

    /// Component ids are strings or numbers; anything else is malformed.
    fn id_text(&self, id: Value) -> Result<String> {
        match id {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(Error::UnexpectedResult(format!(
                "id reported for '{}' is not a string or number: {}",
                self.query, other
            ))),
        }
    }

    /// Returns the driver's handle to the component's root DOM node.
    ///
    /// Fails with [`Error::Evaluation`] when the query matches nothing.
    pub async fn element(&self) -> Result<D::Element> {
        tracing::debug!("Resolving element of '{}'", self.query);
        let script = self.scripts().element(&self.query);
        self.driver.evaluate_element(&script).await
    }

    /// Returns the component id, or `None` when the component cannot be resolved.
    ///
    /// Numeric ids are rendered as text, matching the handles built by
    /// [`children`](Self::children). Only driver failures and non-scalar ids
    /// are errors; a missing or destroyed component is `None`.
    pub async fn id(&self) -> Result<Option<String>> {
        match self.safe_call(&self.options.id_accessor).await? {
            None => Ok(None),
            Some(value) => self.id_text(value).map(Some),
        }
    }

    /// Handle to a descendant (any depth) matching `relative`: `"<query> <relative>"`.
    pub fn down(&self, relative: &str) -> Self {
        self.compose(Combinator::Descendant, relative)
    }

    /// Handle to a direct child matching `relative`: `"<query> > <relative>"`.
    pub fn child(&self, relative: &str) -> Self {
        self.compose(Combinator::Child, relative)
    }

    /// Handle to an ancestor (any level) matching `relative`: `"<query> ^ <relative>"`.
    pub fn parent(&self, relative: &str) -> Self {
        self.compose(Combinator::Ancestor, relative)
    }

    /// Lists the descendants matching `filter` (`None` means `"*"`).
    ///
    /// Each returned handle addresses one component through an id query
    /// (`[id=<id>]`), however broad `filter` was. This relies on component ids
    /// being unique within the page, which Ext JS guarantees.
    ///
    /// No matches yield an empty list. An unresolvable `self` fails with
    /// [`Error::Evaluation`].
    pub async fn children(&self, filter: Option<&str>) -> Result<Vec<Component<'d, D>>> {
        let filter = filter.unwrap_or(query::ANY);
        tracing::debug!("Listing children of '{}' matching '{}'", self.query, filter);

        let script = self.scripts().children_ids(&self.query, filter);
        let ids = match self.driver.evaluate(&script).await? {
            Value::Array(ids) => ids,
            other => {
                return Err(Error::UnexpectedResult(format!(
                    "children of '{}' are not an array: {}",
                    self.query, other
                )));
            }
        };

        ids.into_iter()
            .map(|id| {
                let id = self.id_text(id)?;
                Ok(self.derive(query::id_query(&id)))
            })
            .collect()
    }

    /// Evaluates `expression` (a property path or method call) on the component.
    ///
    /// Page-side failures, including an unresolvable component, propagate as
    /// [`Error::Evaluation`].
    ///
    /// Avoid returning complex framework objects such as components: they are
    /// deeply recursive and may overflow the driver's serializer.
    pub async fn call(&self, expression: &str) -> Result<Value> {
        tracing::debug!("Calling '{}' on '{}'", expression, self.query);
        let script = self.scripts().call(&self.query, expression);
        self.driver.evaluate(&script).await
    }

    /// Like [`call`](Self::call), deserializing the result into `T`.
    pub async fn call_as<T: DeserializeOwned>(&self, expression: &str) -> Result<T> {
        let value = self.call(expression).await?;
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Evaluates `expression` on the component, turning page-side failures into `None`.
    ///
    /// The try/catch runs inside the page, so a missing component, a missing
    /// member or a throwing method all give `Ok(None)`. A `null` or
    /// `undefined` result is also `None`. Only driver failures are errors.
    pub async fn safe_call(&self, expression: &str) -> Result<Option<Value>> {
        tracing::debug!("Safe-calling '{}' on '{}'", expression, self.query);
        let script = self.scripts().safe_call(&self.query, expression);
        match self.driver.evaluate(&script).await? {
            Value::Null => Ok(None),
            value => Ok(Some(value)),
        }
    }

    /// Like [`safe_call`](Self::safe_call), deserializing the result into `T`.
    pub async fn safe_call_as<T: DeserializeOwned>(&self, expression: &str) -> Result<Option<T>> {
        match self.safe_call(expression).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Reads any member of the component by name, through the safe tier.
    ///
    /// `get(name)` is exactly `safe_call(name)`. There is no local check of
    /// `name`: a misspelled member reads as `None`.
    pub async fn get(&self, name: &str) -> Result<Option<Value>> {
        self.safe_call(name).await
    }

    /// Calls method `name` with JSON arguments, through the safe tier.
    ///
    /// Arguments are serialized, so strings need no escaping. `name` must be a
    /// dotted identifier path, otherwise [`Error::InvalidArgument`] is
    /// returned without touching the page.
    pub async fn invoke(&self, name: &str, args: &[Value]) -> Result<Option<Value>> {
        let expression = script::invocation(name, args)?;
        self.safe_call(&expression).await
    }

    /// Number of components currently matching the query.
    ///
    /// A query the page cannot evaluate counts as zero.
    pub async fn count(&self) -> Result<usize> {
        tracing::debug!("Counting matches of '{}'", self.query);
        let script = self.scripts().count(&self.query);
        let value = self.driver.evaluate(&script).await?;
        value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                Error::UnexpectedResult(format!(
                    "match count of '{}' is not a number: {}",
                    self.query, value
                ))
            })
    }

    /// Returns true if at least one component currently matches the query.
    pub async fn exists(&self) -> Result<bool> {
        Ok(self.count().await? > 0)
    }
}

impl<D: ScriptDriver + ?Sized> Clone for Component<'_, D> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver,
            query: self.query.clone(),
            options: self.options.clone(),
        }
    }
}

impl<D: ScriptDriver + ?Sized> fmt::Debug for Component<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("query", &self.query)
            .field("options", &self.options)
            .finish()
    }
}

impl<D: ScriptDriver + ?Sized> fmt::Display for Component<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}
