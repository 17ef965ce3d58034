//! Infinite logo rows.

use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use motion::marquee::MarqueeState;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{MarqueeConfig, SiteConfig};
use crate::dom;
use crate::stage::{SharedStage, Stage};

/// Milliseconds of quiet after the last resize before rows are re-measured.
const RESIZE_SETTLE_MS: u32 = 150;

/// Duplicate and start every configured row, then follow scroll and resize.
pub fn install(stage: &SharedStage, doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let mut installed = 0;
    for marquee in &config.marquees {
        match setup(stage, doc, marquee) {
            Ok(true) => installed += 1,
            Ok(false) => log::warn!("{} marquee: no {} element", marquee.name, marquee.container),
            Err(err) => log::error!("{} marquee failed: {err:?}", marquee.name),
        }
    }
    if installed == 0 {
        return Ok(());
    }

    let window = dom::window()?;
    let on_scroll = Rc::clone(stage);
    EventListener::new(&window, "scroll", move |_| match dom::scroll_y() {
        Ok(scroll_y) => {
            on_scroll.borrow_mut().on_scroll(scroll_y);
            Stage::wake(&on_scroll);
        }
        Err(err) => log::warn!("cannot read scroll position: {err:?}"),
    })
    .forget();

    let on_resize = Rc::clone(stage);
    let mut pending: Option<Timeout> = None;
    EventListener::new(&window, "resize", move |_| {
        let stage = Rc::clone(&on_resize);
        let settle = Timeout::new(RESIZE_SETTLE_MS, move || {
            stage.borrow_mut().remeasure();
            Stage::wake(&stage);
        });
        // Dropping the previous handle cancels it.
        drop(pending.replace(settle));
    })
    .forget();

    log::info!("{installed} marquee rows running");
    Stage::wake(stage);
    Ok(())
}

/// Returns `false` when the row is not on this page.
fn setup(stage: &SharedStage, doc: &Document, marquee: &MarqueeConfig) -> Result<bool, JsValue> {
    let Some(container) = dom::query(doc, &marquee.container).and_then(dom::html) else {
        return Ok(false);
    };
    duplicate_children(&container)?;
    let section = dom::query(doc, &marquee.section).unwrap_or_else(|| Element::from(container.clone()));
    let state = MarqueeState::new(f64::from(container.scroll_width()), marquee.cycle);
    stage.borrow_mut().add_marquee(&marquee.name, container, section, marquee.trigger, state)?;
    Ok(true)
}

/// Append one deep copy of every child so the row holds its content twice.
fn duplicate_children(container: &HtmlElement) -> Result<(), JsValue> {
    let children = container.children();
    let originals: Vec<Element> = (0..children.length()).filter_map(|i| children.item(i)).collect();
    for child in &originals {
        let copy = child.clone_node_with_deep(true)?;
        container.append_child(&copy)?;
    }
    Ok(())
}
