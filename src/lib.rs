//! # pagefx
//!
//! WebAssembly page script for the marketing site. It enhances the
//! builder-generated markup with:
//!
//! - pointer-following hover flair on plain and big buttons;
//! - the homepage hero reveal (per-letter title, cascading sections, scroll
//!   lock while it plays);
//! - the two infinite logo marquees, paused while off screen.
//!
//! All timing and state logic lives in the browser-free `motion` crate. This
//! crate holds configuration plus, behind the `hydrate` feature, the DOM glue
//! and the `#[wasm_bindgen(start)]` entry point.

pub mod config;
pub mod page;

#[cfg(feature = "hydrate")]
mod buttons;
#[cfg(feature = "hydrate")]
mod dom;
#[cfg(feature = "hydrate")]
mod hero;
#[cfg(feature = "hydrate")]
mod marquee;
#[cfg(feature = "hydrate")]
mod stage;

#[cfg(feature = "hydrate")]
pub use boot::start;

#[cfg(feature = "hydrate")]
mod boot {
    use gloo_events::EventListener;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
    use crate::stage::Stage;
    use crate::{buttons, dom, hero, marquee, page};

    /// Module entry point. Runs the effects once the document has parsed.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        let raw = match dom::document() {
            Ok(doc) => doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()),
            Err(_) => None,
        };
        let (config, config_error) = SiteConfig::from_inline(raw.as_deref());
        if console_log::init_with_level(config.log_level.into()).is_err() {
            log::warn!("logger was already initialized");
        }
        if let Some(err) = config_error {
            log::warn!("{err}; using defaults");
        }

        match dom::document() {
            Ok(doc) if doc.ready_state() == "loading" => {
                EventListener::once(&doc, "DOMContentLoaded", move |_| run_logged(&config)).forget();
            }
            Ok(_) => run_logged(&config),
            Err(err) => log::error!("pagefx cannot start: {err:?}"),
        }
    }

    fn run_logged(config: &SiteConfig) {
        if let Err(err) = run(config) {
            log::error!("pagefx failed to start: {err:?}");
        }
    }

    /// Each effect is set up independently; one failing leaves the others
    /// running.
    fn run(config: &SiteConfig) -> Result<(), JsValue> {
        let doc = dom::document()?;
        let stage = Stage::shared();

        buttons::install(&stage, &doc, config);

        let path = dom::window()?.location().pathname()?;
        if page::is_homepage(&path) {
            if let Err(err) = hero::init(&stage, &doc, config) {
                log::error!("hero reveal failed: {err:?}");
            }
        } else {
            log::debug!("{path} is not the homepage; hero reveal skipped");
        }

        if let Err(err) = marquee::install(&stage, &doc, config) {
            log::error!("marquee setup failed: {err:?}");
        }
        Ok(())
    }
}
