//! Shared runtime for every effect on the page.
//!
//! DESIGN
//! ======
//! One `Stage` per page, shared as `Rc<RefCell<Stage>>` between event
//! listeners and the animation-frame callback. It owns:
//!
//! - the element registry (`TargetId` index into `elements`);
//! - the `motion` animator and its style book;
//! - marquee rows and their scroll triggers;
//! - the hero reveal, once started.
//!
//! Handlers mutate the stage and call [`Stage::wake`]. The frame loop runs
//! while anything is animating and stops itself when the page is idle.
//! Frame deltas are clamped so a tab returning from the background does not
//! jump animations forward.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{AnimationFrame, request_animation_frame};
use motion::animator::Animator;
use motion::consts::MAX_FRAME_DELTA;
use motion::marquee::MarqueeState;
use motion::reveal::RevealSequence;
use motion::style::{Prop, TargetId, Value};
use motion::trigger::{ScrollTrigger, TriggerSpec};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::hero::BodyScroll;

pub type SharedStage = Rc<RefCell<Stage>>;

/// A looping logo row registered with the stage.
pub struct MarqueeSlot {
    pub name: String,
    pub target: TargetId,
    pub container: HtmlElement,
    pub section: Element,
    pub region: TriggerSpec,
    pub state: MarqueeState,
    pub trigger: ScrollTrigger,
}

#[derive(Default)]
pub struct Stage {
    animator: Animator,
    elements: Vec<HtmlElement>,
    marquees: Vec<MarqueeSlot>,
    reveal: Option<RevealSequence<BodyScroll>>,
    frame: Option<AnimationFrame>,
    last_timestamp: Option<f64>,
}

impl Stage {
    pub fn shared() -> SharedStage {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Id for `element`, registering it on first sight.
    pub fn register(&mut self, element: &Element) -> Result<TargetId, JsValue> {
        let element = element
            .clone()
            .dyn_into::<HtmlElement>()
            .map_err(|_| dom::js_error("animated element is not an HtmlElement"))?;
        if let Some(index) = self.elements.iter().position(|known| *known == element) {
            return target_id(index);
        }
        let id = target_id(self.elements.len())?;
        self.elements.push(element);
        Ok(id)
    }

    pub fn set_reveal(&mut self, reveal: RevealSequence<BodyScroll>) {
        self.reveal = Some(reveal);
    }

    // =========================================================================
    // MARQUEES
    // =========================================================================

    /// Register a marquee row and sync its trigger with the current scroll.
    pub fn add_marquee(
        &mut self,
        name: &str,
        container: HtmlElement,
        section: Element,
        region: TriggerSpec,
        state: MarqueeState,
    ) -> Result<(), JsValue> {
        let target = self.register(&container)?;
        let mut trigger = ScrollTrigger::new(measure(&section, &region)?);
        let mut state = state;
        for event in trigger.update(dom::scroll_y()?) {
            state.apply_trigger(event);
        }
        log::debug!("{name} marquee: loop {}px every {}s", state.loop_distance(), state.cycle());
        self.marquees.push(MarqueeSlot { name: name.to_owned(), target, container, section, region, state, trigger });
        Ok(())
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        for slot in &mut self.marquees {
            for event in slot.trigger.update(scroll_y) {
                log::debug!("{} marquee: {event:?}", slot.name);
                slot.state.apply_trigger(event);
            }
        }
    }

    /// Re-measure row widths and trigger regions after layout changes.
    pub fn remeasure(&mut self) {
        for slot in &mut self.marquees {
            slot.state.resize(f64::from(slot.container.scroll_width()));
            match measure(&slot.section, &slot.region) {
                Ok(bounds) => slot.trigger.set_bounds(bounds),
                Err(err) => log::warn!("{} marquee: cannot measure trigger: {err:?}", slot.name),
            }
        }
    }

    // =========================================================================
    // FRAME LOOP
    // =========================================================================

    fn has_work(&self) -> bool {
        self.animator.has_work() || self.marquees.iter().any(|slot| slot.state.is_playing())
    }

    /// Make sure a frame is scheduled if anything needs one.
    pub fn wake(stage: &SharedStage) {
        let mut this = stage.borrow_mut();
        if this.frame.is_some() || !this.has_work() {
            return;
        }
        let handle = Rc::clone(stage);
        this.frame = Some(request_animation_frame(move |timestamp| Self::on_frame(&handle, timestamp)));
    }

    fn on_frame(stage: &SharedStage, timestamp: f64) {
        {
            let mut this = stage.borrow_mut();
            this.frame = None;
            let dt = match this.last_timestamp {
                Some(previous) => ((timestamp - previous) / 1000.0).clamp(0.0, MAX_FRAME_DELTA),
                None => 0.0,
            };
            this.last_timestamp = Some(timestamp);
            this.step(dt);
            if !this.has_work() {
                this.last_timestamp = None;
            }
        }
        Self::wake(stage);
    }

    /// Write pending values to the page now instead of on the next frame.
    pub fn flush(&mut self) {
        self.step(0.0);
    }

    fn step(&mut self, dt: f64) {
        for slot in &mut self.marquees {
            if slot.state.tick(dt) {
                self.animator.set(slot.target, &[(Prop::X, Value::Number(slot.state.offset()))]);
            }
        }

        let frame = self.animator.tick(dt);
        for (target, props) in frame.by_target() {
            let Some(element) = self.elements.get(target.0 as usize) else {
                continue;
            };
            let declarations = self.animator.book().declarations(target, props);
            if let Err(err) = dom::set_styles(element, &declarations) {
                log::warn!("failed to style element {}: {err:?}", target.0);
            }
        }

        if let Some(reveal) = &mut self.reveal
            && let Some(phase) = reveal.observe(&self.animator, &frame)
        {
            log::debug!("hero reveal: {phase:?}");
        }
    }
}

fn target_id(index: usize) -> Result<TargetId, JsValue> {
    u32::try_from(index).map(TargetId).map_err(|_| dom::js_error("too many animated elements"))
}

/// Scroll bounds of `section`'s trigger region at the current layout.
fn measure(section: &Element, region: &TriggerSpec) -> Result<(f64, f64), JsValue> {
    let rect = dom::bounding_rect(section);
    let top = rect.top + dom::scroll_y()?;
    Ok(region.bounds(top, rect.height, dom::viewport_height()?))
}
