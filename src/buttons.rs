//! Hover flair wiring for plain and big buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use motion::animator::Animator;
use motion::flair::{FlairButton, FlairConfig, Variant};
use motion::geom::{Point, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::config::SiteConfig;
use crate::dom;
use crate::stage::{SharedStage, Stage};

type Handler = fn(&mut FlairButton, &mut Animator, Point, Rect);

/// Attach a flair to every plain and big button on the page.
pub fn install(stage: &SharedStage, doc: &Document, config: &SiteConfig) {
    let sel = &config.selectors;
    let plain = install_variant(stage, doc, &sel.button, &sel.button_flair, config.flair(Variant::Plain));
    let big = install_variant(stage, doc, &sel.button_big, &sel.button_big_flair, config.flair(Variant::Big));
    log::info!("flair attached to {plain} plain and {big} big buttons");
    Stage::wake(stage);
}

fn install_variant(stage: &SharedStage, doc: &Document, selector: &str, flair_selector: &str, config: FlairConfig) -> usize {
    let colors = config.colors.resolved(dom::resolve_css_value);
    let config = FlairConfig { colors, ..config };
    let mut attached = 0;
    for button in dom::query_all(doc, selector) {
        match attach(stage, doc, &button, flair_selector, &config) {
            Ok(()) => attached += 1,
            Err(err) => log::warn!("skipping {selector} button: {err:?}"),
        }
    }
    attached
}

fn attach(stage: &SharedStage, doc: &Document, button: &Element, flair_selector: &str, config: &FlairConfig) -> Result<(), JsValue> {
    let flair: Element = match dom::query_in(button, flair_selector) {
        Some(found) => found,
        None => create_flair(doc, button, flair_selector)?.into(),
    };
    let flair_button = {
        let mut this = stage.borrow_mut();
        let surface = this.register(button)?;
        let flair = this.register(&flair)?;
        let flair_button = FlairButton::new(config.clone(), surface, flair);
        flair_button.install(this.animator_mut());
        Rc::new(RefCell::new(flair_button))
    };

    listen(stage, &flair_button, button, "mouseenter", FlairButton::pointer_enter);
    listen(stage, &flair_button, button, "mousemove", FlairButton::pointer_move);
    listen(stage, &flair_button, button, "mouseleave", FlairButton::pointer_leave);
    Ok(())
}

/// Give a button without flair markup a fresh flair element. Only plain
/// class selectors can be turned into markup.
fn create_flair(doc: &Document, button: &Element, selector: &str) -> Result<HtmlElement, JsValue> {
    let class = selector
        .strip_prefix('.')
        .filter(|class| !class.is_empty() && class.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .ok_or_else(|| dom::js_error(&format!("no {selector} element and it cannot be created")))?;
    let flair = dom::create(doc, "div", class)?;
    button.append_child(&flair)?;
    log::debug!("created missing {selector} element");
    Ok(flair)
}

fn listen(stage: &SharedStage, flair: &Rc<RefCell<FlairButton>>, button: &Element, event: &'static str, handler: Handler) {
    let stage = Rc::clone(stage);
    let flair = Rc::clone(flair);
    let target = button.clone();
    EventListener::new(button, event, move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let pointer = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        let rect = dom::bounding_rect(&target);
        handler(&mut flair.borrow_mut(), stage.borrow_mut().animator_mut(), pointer, rect);
        Stage::wake(&stage);
    })
    .forget();
}
