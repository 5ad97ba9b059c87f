mod dom;
mod fetch;
mod logger;
mod page;
mod storage;
pub mod strips;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::SiteConfig;
use gloo::events::EventListener;
use log::LevelFilter;
use wasm_bindgen::prelude::*;

use page::Page;
use strips::{Direction, Strip};

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

fn install(config: SiteConfig) -> anyhow::Result<()> {
    let page = Page::mount(config)?;
    if let Some(previous) = PAGE.with(|slot| slot.borrow_mut().replace(page)) {
        previous.unmount();
    }
    Ok(())
}

/// Run `mount` only while `slot` is empty; returns whether it ran.
fn mount_if_empty<T>(slot: &RefCell<Option<T>>, mount: impl FnOnce()) -> bool {
    if slot.borrow().is_some() {
        return false;
    }
    mount();
    true
}

fn with_page(action: &str, f: impl FnOnce(&Rc<Page>)) {
    let page = PAGE.with(|slot| slot.borrow().clone());
    match page {
        Some(page) => f(&page),
        None => log::warn!("{action} called before mount"),
    }
}

/// Module entry: route panics and `log` output to the console, then mount
/// with the default configuration once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        // An explicit `mount(config)` may run before the document is parsed.
        EventListener::once(&document, "DOMContentLoaded", |_| {
            let mounted = PAGE.with(|slot| {
                mount_if_empty(slot, || {
                    if let Err(e) = install(SiteConfig::default()) {
                        log::error!("mount failed: {e:#}");
                    }
                })
            });
            if !mounted {
                log::debug!("already mounted, keeping the existing configuration");
            }
        })
        .forget();
        Ok(())
    } else {
        install(SiteConfig::default()).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }
}

/// Re-mount with a JSON configuration. Omitted fields keep their defaults.
#[wasm_bindgen]
pub fn mount(config_json: &str) -> Result<(), JsError> {
    let config = SiteConfig::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?;
    install(config).map_err(|e| JsError::new(&format!("{e:#}")))
}

#[wasm_bindgen]
pub fn open_resume() {
    with_page("open_resume", Page::open_resume);
}

#[wasm_bindgen]
pub fn close_resume() {
    with_page("close_resume", |page| page.close_resume());
}

#[wasm_bindgen]
pub fn toggle_dark_mode() {
    with_page("toggle_dark_mode", |page| page.toggle_dark_mode());
}

#[wasm_bindgen]
pub fn toggle_mobile_menu() {
    with_page("toggle_mobile_menu", |page| page.toggle_mobile_menu());
}

/// Step a strip by its track id (`"poster-slider"`, `"interface-slider"`)
/// in `direction` (`"prev"` or `"next"`).
#[wasm_bindgen]
pub fn scroll_strip(id: &str, direction: &str) -> Result<(), JsError> {
    let strip = Strip::from_track(id).ok_or_else(|| JsError::new(&format!("unknown strip: {id}")))?;
    let direction: Direction = direction
        .parse()
        .map_err(|e: anyhow::Error| JsError::new(&e.to_string()))?;
    with_page("scroll_strip", |page| page.scroll_strip(strip, direction));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_mount_keeps_an_earlier_mount() {
        let slot = RefCell::new(Some("custom"));
        let mut ran = false;
        assert!(!mount_if_empty(&slot, || ran = true));
        assert!(!ran);
        assert_eq!(*slot.borrow(), Some("custom"));
    }

    #[test]
    fn deferred_mount_runs_on_empty_slot() {
        let slot = RefCell::new(None::<&str>);
        let mut ran = false;
        assert!(mount_if_empty(&slot, || ran = true));
        assert!(ran);
    }
}
