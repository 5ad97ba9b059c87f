//! Applies `UiCommand`s to the live document and takes the measurements the
//! controllers need. Missing elements are skipped, never an error.

use folio_core::scroll::Section;
use folio_protocol::{Target, UiCommand};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn apply(document: &Document, commands: &[UiCommand]) {
    for command in commands {
        if let Err(e) = apply_one(document, command) {
            log::warn!("failed to apply {command:?}: {e:?}");
        }
    }
}

fn resolve(document: &Document, target: &Target) -> Option<Element> {
    match target {
        Target::Id(id) => document.get_element_by_id(id),
        Target::Root => document.document_element(),
        Target::Body => document.body().map(Element::from),
    }
}

fn apply_one(document: &Document, command: &UiCommand) -> Result<(), JsValue> {
    match command {
        UiCommand::SetClass {
            target,
            class,
            enabled,
        } => {
            let Some(el) = resolve(document, target) else {
                log::trace!("no element for {target:?}");
                return Ok(());
            };
            set_class(&el, class, *enabled)
        }
        UiCommand::ActivateExclusive {
            selector,
            attribute,
            class,
            active,
        } => {
            for el in elements(document, selector) {
                let on = active.is_some() && el.get_attribute(attribute) == *active;
                set_class(&el, class, on)?;
            }
            Ok(())
        }
        UiCommand::SetStyle {
            target,
            property,
            value,
        } => match resolve(document, target) {
            Some(el) => set_style(&el, property, value),
            None => Ok(()),
        },
        UiCommand::ReplaceContent { target, html } => {
            if let Some(el) = resolve(document, target) {
                el.set_inner_html(html);
            }
            Ok(())
        }
        UiCommand::SetText { target, text } => {
            if let Some(el) = resolve(document, target) {
                el.set_text_content(Some(text));
            }
            Ok(())
        }
        UiCommand::SetScrollLock { locked } => match document.body() {
            Some(body) => set_style(&body, "overflow", if *locked { "hidden" } else { "" }),
            None => Ok(()),
        },
    }
}

fn set_class(el: &Element, class: &str, enabled: bool) -> Result<(), JsValue> {
    if enabled {
        el.class_list().add_1(class)
    } else {
        el.class_list().remove_1(class)
    }
}

fn set_style(el: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = el.style();
    if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    }
}

/// All elements matching `selector`, in document order. An invalid
/// selector yields nothing.
pub fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Measure `selector` matches as sections, in document coordinates.
pub fn sections(document: &Document, selector: &str) -> Vec<Section> {
    elements(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| Section::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
        .collect()
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height(document: &Document) -> f64 {
    document
        .document_element()
        .map_or(0.0, |el| f64::from(el.scroll_height()))
}

/// Whether `target` is `container` or one of its descendants.
pub fn contains(container: &Element, target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}
