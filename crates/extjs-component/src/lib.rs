//! extjs-component: Ext JS component handles for browser automation
//!
//! This crate lets test code address Ext JS components by component query
//! (CQ) through any driver that can evaluate a script in the page.
//!
//! A [`Component`] is a lazy handle: a driver reference plus a query string.
//! Composition (`down`, `child`, `parent`) is purely textual; every other
//! operation formats one script, evaluates it and decodes the result.
//!
//! # Examples
//!
//! ## Working with a form
//!
//! ```ignore
//! use extjs_component::Component;
//! use playwright_rs::Playwright;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let playwright = Playwright::launch().await?;
//!     let browser = playwright.chromium().launch().await?;
//!     let page = browser.new_page().await?;
//!     page.goto(
//!         "https://examples.sencha.com/extjs/6.0.2/examples/classic/simple-tasks/index.html",
//!         None,
//!     )
//!     .await?;
//!
//!     let form = Component::new(&page, "taskForm");
//!     assert_eq!(form.get("rendered").await?, Some(json!(true)));
//!
//!     // Resolve the component's root node and drive it with the browser API
//!     let title = form.down(r#"textfield[emptyText="Add a new task"]"#);
//!     title.element().await?.locator("input").fill("Write tests", None).await?;
//!
//!     // Read grid state through the component
//!     let rows = Component::new(&page, "taskGrid gridview")
//!         .safe_call("all.elements.length")
//!         .await?;
//!     assert_eq!(rows, Some(json!(1)));
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Safe and unsafe calls
//!
//! ```ignore
//! use extjs_component::{Component, Error};
//!
//! # async fn example(page: &playwright_rs::Page) -> extjs_component::Result<()> {
//! let missing = Component::new(page, "window[title=Nope]");
//!
//! // Safe tier: page-side failures read as None
//! assert_eq!(missing.id().await?, None);
//! assert_eq!(missing.get("title").await?, None);
//!
//! // Unsafe tier: page-side failures are errors
//! let err = missing.call("getTitle()").await.unwrap_err();
//! assert!(matches!(err, Error::Evaluation { .. }));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
mod component;
pub mod driver;
mod error;
pub mod options;
pub mod query;
pub mod script;

// Re-export the component handle
pub use component::Component;

// Re-export error types
pub use error::{Error, Result};

// Re-export the driver capability
pub use driver::ScriptDriver;

// Re-export options
pub use options::ComponentOptions;

// Re-export query composition
pub use query::Combinator;
