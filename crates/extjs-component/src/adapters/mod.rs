// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Driver adapters - ScriptDriver implementations for real automation drivers
//
// Each adapter sits behind a cargo feature so the core crate does not pull in
// a browser stack:
// - `playwright`: playwright_rs::Page, elements as playwright_rs::Locator
// - `webdriver`:  fantoccini::Client, elements as fantoccini::elements::Element

#[cfg(feature = "playwright")]
pub mod playwright;

#[cfg(feature = "webdriver")]
pub mod webdriver;
