// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// ScriptDriver for playwright-rs pages
//
// Playwright evaluates expressions, so scripts are wrapped into arrow
// functions. DOM nodes cannot cross the protocol as values; element scripts
// return the node's id instead and the element is addressed with an `id=`
// locator. Ext JS always assigns an id to a component's root node.

use crate::driver::ScriptDriver;
use crate::error::{Error, Result};
use crate::script::wrap_function;
use async_trait::async_trait;
use playwright_rs::{Locator, Page};
use serde_json::Value;

#[async_trait]
impl ScriptDriver for Page {
    type Element = Locator;

    async fn evaluate(&self, script: &str) -> Result<Value> {
        let expression = wrap_function(script);
        Page::evaluate::<(), Value>(self, &expression, None)
            .await
            .map_err(|e| map_error(script, e))
    }

    async fn evaluate_element(&self, script: &str) -> Result<Locator> {
        let expression = node_id_expression(script);
        let value = Page::evaluate::<(), Value>(self, &expression, None)
            .await
            .map_err(|e| map_error(script, e))?;

        let id = value.as_str().ok_or_else(|| {
            Error::UnexpectedResult(format!("element id is not a string: {}", value))
        })?;
        tracing::debug!("Resolved element id '{}'", id);
        Ok(self.locator(&format!("id={}", id)).await)
    }
}

/// Wraps an element script so it returns the node's id.
fn node_id_expression(script: &str) -> String {
    format!(
        "() => {{\n    \
             const node = ({})();\n    \
             if (!node || !node.id) {{\n        \
                 throw new Error('Component root node has no id');\n    \
             }}\n    \
             return node.id;\n\
         }}",
        wrap_function(script)
    )
}

/// Detects protocol errors reporting a closed page, context or browser
fn is_target_closed_error(message: &str) -> bool {
    message.contains("has been closed")
        || message.contains("Target closed")
        || message.contains("Browser closed")
        || message.contains("Connection closed")
}

fn map_error(script: &str, error: playwright_rs::Error) -> Error {
    match error {
        // Session failures also arrive as protocol errors
        playwright_rs::Error::ProtocolError(message) if is_target_closed_error(&message) => {
            Error::Driver(message)
        }
        // Uncaught page exceptions come back as protocol errors
        playwright_rs::Error::ProtocolError(message) => Error::evaluation(script, message),
        playwright_rs::Error::Timeout(message) => Error::Timeout(message),
        other => Error::Driver(other.to_string()),
    }
}
