// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// ScriptDriver for W3C WebDriver sessions (fantoccini)
//
// WebDriver's "Execute Script" runs function bodies directly and serializes
// returned DOM nodes as web element references, so scripts pass through
// unchanged.
//
// See: <https://www.w3.org/TR/webdriver2/#execute-script>

use crate::driver::ScriptDriver;
use crate::error::{Error, Result};
use async_trait::async_trait;
use fantoccini::Client;
use fantoccini::elements::{Element, ElementRef};
use fantoccini::error::{CmdError, ErrorStatus};
use serde_json::Value;

/// Key of a web element reference in WebDriver script results
const WEB_ELEMENT_KEY: &str = "element-6066-11e4-a071-806f6fd5f7e7";

#[async_trait]
impl ScriptDriver for Client {
    type Element = Element;

    async fn evaluate(&self, script: &str) -> Result<Value> {
        Client::execute(self, script, Vec::new())
            .await
            .map_err(|e| map_error(script, e))
    }

    async fn evaluate_element(&self, script: &str) -> Result<Element> {
        let value = ScriptDriver::evaluate(self, script).await?;
        let id = element_reference(&value).ok_or_else(|| {
            Error::UnexpectedResult(format!("script did not return an element: {}", value))
        })?;
        Ok(Element::from_element_id(
            self.clone(),
            ElementRef::from(id.to_string()),
        ))
    }
}

fn element_reference(value: &Value) -> Option<&str> {
    value.get(WEB_ELEMENT_KEY).and_then(Value::as_str)
}

fn map_error(script: &str, error: CmdError) -> Error {
    match error {
        CmdError::Standard(e) => match e.error {
            ErrorStatus::JavascriptError => Error::evaluation(script, e.message.to_string()),
            ErrorStatus::ScriptTimeout | ErrorStatus::Timeout => {
                Error::Timeout(e.message.to_string())
            }
            _ => Error::Driver(e.message.to_string()),
        },
        other => Error::Driver(other.to_string()),
    }
}
