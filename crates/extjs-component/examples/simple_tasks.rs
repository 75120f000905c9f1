// Simple Tasks example - Ext JS components through playwright-rs
//
// Shows: component queries, down(), element(), safe_call(), children()
// Note: Uses the public Sencha "Simple Tasks" demo
//
// Run with:
//     cargo run --package extjs-component --features playwright --example simple_tasks

use extjs_component::Component;
use playwright_rs::Playwright;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let playwright = Playwright::launch().await?;
    let browser = playwright.chromium().launch().await?;
    let page = browser.new_page().await?;

    page.goto(
        "https://examples.sencha.com/extjs/6.0.2/examples/classic/simple-tasks/index.html",
        None,
    )
    .await?;
    page.evaluate::<(), ()>("localStorage.clear()", None).await?;

    // In real code, poll until the form reports rendered
    tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;

    let form = Component::new(&page, "taskForm");
    println!("Form rendered: {:?}", form.get("rendered").await?);

    // Type into the title field through its root node
    let title = form.down(r#"textfield[emptyText="Add a new task"]"#);
    title
        .element()
        .await?
        .locator("input")
        .fill("Test task from playwright-rs", None)
        .await?;

    // Set the due date through the component API instead of the DOM
    form.down("datefield")
        .invoke("setRawValue", &[json!("01/01/2017")])
        .await?;

    // Enumerate the form's fields
    for field in form.children(Some("field")).await? {
        println!("{} = {:?}", field, field.get("name").await?);
    }

    let rows = Component::new(&page, "taskGrid gridview")
        .safe_call("all.elements.length")
        .await?;
    println!("Task rows: {:?}", rows);

    browser.close().await?;
    Ok(())
}
