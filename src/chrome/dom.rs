//! DOM construction for the page chrome (WASM only)

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{ChromeNode, DESCRIPTION, FOOTER_ID, footer_top, page_chrome};

/// Build the chrome under `document.body`
pub fn mount(document: &Document, viewport_height: f32) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    for root in page_chrome(viewport_height) {
        let element = build(document, &root)?;
        body.append_child(&element)?;
    }

    log::info!("Page chrome mounted");
    Ok(())
}

/// Label the canvas for assistive technology
pub fn describe(canvas: &Element) -> Result<(), JsValue> {
    canvas.set_attribute("role", "img")?;
    canvas.set_attribute("aria-label", DESCRIPTION)?;
    Ok(())
}

/// Move the footer to the bottom of a resized viewport
pub fn reposition_footer(document: &Document, viewport_height: f32) {
    let Some(footer) = document
        .get_element_by_id(FOOTER_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("Footer element missing, skipping reposition");
        return;
    };
    let top = format!("{}px", footer_top(viewport_height));
    if let Err(e) = footer.style().set_property("top", &top) {
        log::warn!("Failed to move footer: {:?}", e);
    }
}

fn build(document: &Document, node: &ChromeNode) -> Result<Element, JsValue> {
    let element = document.create_element(node.tag)?;

    if let Some(id) = node.id {
        element.set_id(id);
    }
    for (name, value) in &node.attrs {
        element.set_attribute(name, value)?;
    }
    if let Some(html) = node.html {
        element.set_inner_html(html);
    }
    if let Some(text) = node.text {
        element.set_text_content(Some(text));
    }

    if let Some(html_el) = element.dyn_ref::<HtmlElement>() {
        let style = html_el.style();
        for (name, value) in &node.styles {
            style.set_property(name, value)?;
        }
    }

    for child in &node.children {
        let child_el = build(document, child)?;
        element.append_child(&child_el)?;
    }

    Ok(element)
}
