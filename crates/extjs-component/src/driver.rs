// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// ScriptDriver - the automation capability a Component runs on
//
// A driver evaluates a script in the page and hands back either its
// JSON-serializable result or a handle to the DOM node it returned.
// Scripts are function bodies (`...; return value;`).

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Evaluates scripts in the context of one page.
///
/// Implementations map an uncaught page-side exception to
/// [`Error::Evaluation`](crate::Error::Evaluation) and session or transport
/// failures to [`Error::Driver`](crate::Error::Driver) /
/// [`Error::Timeout`](crate::Error::Timeout). Components rely on this split to
/// tell "no such component" apart from "the browser went away".
///
/// # Concurrency
///
/// `Send + Sync` lets components move across tokio tasks. It does not promise
/// that concurrent evaluations are safe: that depends on the underlying
/// driver. Serialize evaluations through one driver per page session unless
/// the driver documents otherwise.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use extjs_component::{Result, ScriptDriver};
/// use serde_json::Value;
///
/// struct Fixed(Value);
///
/// #[async_trait]
/// impl ScriptDriver for Fixed {
///     type Element = ();
///
///     async fn evaluate(&self, _script: &str) -> Result<Value> {
///         Ok(self.0.clone())
///     }
///
///     async fn evaluate_element(&self, _script: &str) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait ScriptDriver: Send + Sync {
    /// Handle to a DOM node, as the driver represents it
    type Element: Send;

    /// Evaluates `script` and returns its JSON-decoded result.
    ///
    /// `undefined` results decode as `Value::Null`.
    async fn evaluate(&self, script: &str) -> Result<Value>;

    /// Evaluates `script`, which returns a DOM node, and wraps the node.
    async fn evaluate_element(&self, script: &str) -> Result<Self::Element>;
}

#[async_trait]
impl<D: ScriptDriver + ?Sized> ScriptDriver for std::sync::Arc<D> {
    type Element = D::Element;

    async fn evaluate(&self, script: &str) -> Result<Value> {
        (**self).evaluate(script).await
    }

    async fn evaluate_element(&self, script: &str) -> Result<Self::Element> {
        (**self).evaluate_element(script).await
    }
}
