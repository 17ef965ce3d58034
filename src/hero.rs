//! Homepage hero reveal.
//!
//! Finds the hero markup, checks the required parts exist, splits the title
//! into letter spans and hands the plan to the stage. Nothing on the page is
//! touched until validation has passed.

use std::cell::Cell;

use motion::lock::{ScrollLock, ScrollSurface};
use motion::reveal::{HeroElements, RevealPlan, RevealSequence};
use motion::split;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::config::SiteConfig;
use crate::dom;
use crate::stage::{SharedStage, Stage};

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// The document body as a scroll surface.
#[derive(Debug)]
pub struct BodyScroll {
    body: HtmlElement,
}

impl ScrollSurface for BodyScroll {
    fn lock(&self) {
        if let Err(err) = dom::set_style(&self.body, "overflow", "hidden") {
            log::warn!("failed to lock page scroll: {err:?}");
        }
    }

    fn unlock(&self) {
        if let Err(err) = self.body.style().remove_property("overflow") {
            log::warn!("failed to unlock page scroll: {err:?}");
        }
    }
}

/// Start the reveal, at most once per page load.
pub fn init(stage: &SharedStage, doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    if STARTED.with(|started| started.replace(true)) {
        log::debug!("hero reveal already ran");
        return Ok(());
    }
    let sel = &config.selectors;
    let found = HeroElements {
        title: dom::query(doc, &sel.hero_title),
        inline_span: dom::query(doc, &sel.title_inline_span),
        secondary: dom::query(doc, &sel.hero_secondary),
        description: dom::query(doc, &sel.hero_description),
        cta: dom::query(doc, &sel.hero_cta),
        logos: dom::query(doc, &sel.hero_logos),
        nav: dom::query(doc, &sel.nav),
    };
    let hero = match found.validate() {
        Ok(hero) => hero,
        Err(err) => {
            log::error!("{err}; hero reveal skipped");
            return Ok(());
        }
    };

    let split_target = split_target(doc, config, &hero.title);
    let text = split::title_text(
        &dom::direct_text(&split_target),
        &split_target.text_content().unwrap_or_default(),
        &hero.inline_span.text_content().unwrap_or_default(),
    );
    let glyphs = split::split_glyphs(&text);
    let want_lock = dom::scroll_y()? <= 0.0;

    // Build the letters detached; the page is only touched once every
    // fallible step has passed.
    let wrapper = dom::create(doc, "div", "")?;
    for (property, value) in [("display", "inline-block"), ("width", "auto"), ("text-align", "left")] {
        dom::set_style(&wrapper, property, value)?;
    }
    let mut letters = Vec::with_capacity(glyphs.len());
    for glyph in &glyphs {
        let letter = dom::create(doc, "span", "")?;
        letter.set_text_content(Some(&glyph.text()));
        for (property, value) in [("display", "inline-block"), ("opacity", "0"), ("letter-spacing", "0"), ("padding", "0")] {
            dom::set_style(&letter, property, value)?;
        }
        wrapper.append_child(&letter)?;
        letters.push(letter);
    }

    let mut reveal = {
        let mut this = stage.borrow_mut();
        let targets = hero.try_map(|element| this.register(&element))?;
        let wrapper = this.register(&wrapper)?;
        let letters = letters.iter().map(|letter| this.register(letter)).collect::<Result<Vec<_>, _>>()?;
        RevealSequence::new(RevealPlan::build(&targets, wrapper, &letters, &config.reveal))
    };

    if let Err(err) = swap_in(&split_target, &wrapper) {
        restore(doc, &split_target, &wrapper, &text);
        return Err(err);
    }

    let lock = if want_lock { doc.body().map(|body| ScrollLock::acquire(BodyScroll { body })) } else { None };
    {
        let mut this = stage.borrow_mut();
        if let Err(err) = reveal.start(this.animator_mut(), lock) {
            drop(this);
            restore(doc, &split_target, &wrapper, &text);
            return Err(dom::js_error(&err.to_string()));
        }
        this.set_reveal(reveal);
        this.flush();
    }
    Stage::wake(stage);
    log::info!("hero reveal started with {} letters", glyphs.len());
    Ok(())
}

/// Replace the title's text with the letter wrapper.
fn swap_in(title: &Element, wrapper: &HtmlElement) -> Result<(), JsValue> {
    dom::remove_text_nodes(title)?;
    title.append_child(wrapper)?;
    Ok(())
}

/// Put the plain title text back after a failed start.
fn restore(doc: &Document, title: &Element, wrapper: &HtmlElement, text: &str) {
    wrapper.remove();
    if let Err(err) = title.append_child(&doc.create_text_node(text)) {
        log::warn!("failed to restore hero title text: {err:?}");
    }
}

/// The element whose text is split. Pages with the wrapped title layout
/// carry a second title element holding the animated word.
fn split_target(doc: &Document, config: &SiteConfig, title: &Element) -> Element {
    let sel = &config.selectors;
    if dom::query(doc, &sel.title_wrapper).is_none() || dom::query(doc, &sel.title_span).is_none() {
        return title.clone();
    }
    dom::query_all(doc, &sel.hero_title).into_iter().nth(1).unwrap_or_else(|| title.clone())
}
