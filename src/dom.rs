//! Thin helpers over `web-sys` used by every effect.
//!
//! Lookups that may legitimately find nothing return `Option`; browser calls
//! that can throw return `Result<_, JsValue>` so callers can use `?` and log
//! once at the component boundary.

use motion::geom::Rect;
use motion::style::Declaration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, Window};

use crate::page;

/// A JS `Error` carrying `message`, for failures that originate in Rust.
pub fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| js_error("window has no document"))
}

/// First element matching `selector`. An invalid selector is logged and
/// treated as no match.
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length()).filter_map(|i| list.get(i)).filter_map(|node| node.dyn_into::<Element>().ok()).collect()
}

pub fn html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

/// Create a `<tag>` element with `class`.
pub fn create(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = doc.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element.dyn_into::<HtmlElement>().map_err(|_| js_error("created element is not an HtmlElement"))
}

/// Concatenated text of `element`'s own text nodes, ignoring child elements.
pub fn direct_text(element: &Element) -> String {
    let nodes = element.child_nodes();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter(|node| node.node_type() == Node::TEXT_NODE)
        .filter_map(|node| node.node_value())
        .collect()
}

/// Detach every direct text node of `element`, keeping child elements.
pub fn remove_text_nodes(element: &Element) -> Result<(), JsValue> {
    let nodes = element.child_nodes();
    let text_nodes: Vec<Node> =
        (0..nodes.length()).filter_map(|i| nodes.get(i)).filter(|node| node.node_type() == Node::TEXT_NODE).collect();
    for node in text_nodes {
        element.remove_child(&node)?;
    }
    Ok(())
}

pub fn set_styles(element: &HtmlElement, declarations: &[Declaration]) -> Result<(), JsValue> {
    let style = element.style();
    for declaration in declarations {
        style.set_property(declaration.property, &declaration.value)?;
    }
    Ok(())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    element.style().set_property(property, value)
}

pub fn bounding_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn scroll_y() -> Result<f64, JsValue> {
    window()?.scroll_y()
}

pub fn viewport_height() -> Result<f64, JsValue> {
    window()?.inner_height()?.as_f64().ok_or_else(|| js_error("innerHeight is not a number"))
}

/// Resolve `var(--name)` against the root element's computed style.
pub fn resolve_css_value(raw: &str) -> String {
    let computed = document()
        .ok()
        .and_then(|doc| doc.document_element())
        .and_then(|root| window().ok()?.get_computed_style(&root).ok().flatten());
    page::resolve_css_value(raw, |name| {
        computed.as_ref().and_then(|style| style.get_property_value(name).ok()).unwrap_or_default()
    })
}
