use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Context, Result};
use folio_core::SiteConfig;
use folio_core::carousel::{Carousel, CarouselView, StripCarousel};
use folio_core::content::{Layout, Resource, render_resource};
use folio_core::menu::{MOBILE_MENU_ID, MobileMenu};
use folio_core::modal::{MODAL_ID, ModalController};
use folio_core::reveal::{self, REVEAL_SELECTOR};
use folio_core::scroll::{NAV_ID, NAV_LINK_SELECTOR, PointerTracker, ScrollFrame, ScrollSynchronizer};
use folio_core::theme::DarkModePreference;
use folio_protocol::{Target, UiCommand};
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, MouseEvent, Window};

use crate::dom;
use crate::fetch::fetch_bytes;
use crate::storage::LocalStore;
use crate::strips::{self, Direction, Strip, VIEW_ALL_BUTTON_ID};

const SECTION_SELECTOR: &str = "section[id]";
const CAROUSEL_SELECTOR: &str = "[data-carousel][id]";
const MODAL_CONTENT_SELECTOR: &str = "#resumeModal .relative";
const OPEN_RESUME_SELECTOR: &str = r#"[data-action="openResume"]"#;
const CLOSE_RESUME_SELECTOR: &str = r#"[data-action="closeResume"]"#;
const DARK_TOGGLE_IDS: [&str; 2] = ["darkModeToggle", "darkModeToggleMobile"];
const MENU_TOGGLE_ID: &str = "mobileMenuToggle";

struct CarouselSlot {
    carousel: Carousel,
    view: CarouselView,
}

/// Everything mounted on one document.
///
/// Listeners and timers hold `Rc<Page>` clones, so the page lives until
/// [`Page::unmount`] drops them.
pub struct Page {
    config: SiteConfig,
    window: Window,
    document: Document,
    scroll: RefCell<ScrollSynchronizer>,
    scroll_timer: RefCell<Option<Timeout>>,
    pointer: Cell<PointerTracker>,
    modal: RefCell<ModalController>,
    theme: RefCell<DarkModePreference>,
    store: RefCell<LocalStore>,
    menu: RefCell<MobileMenu>,
    posters: RefCell<StripCarousel>,
    interfaces: RefCell<StripCarousel>,
    carousels: RefCell<Vec<CarouselSlot>>,
    timers: RefCell<Vec<Interval>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Page {
    pub fn mount(config: SiteConfig) -> Result<Rc<Self>> {
        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;
        let store = LocalStore::open(&window);
        let theme = DarkModePreference::load(&store);
        let scroll = ScrollSynchronizer::new(
            config.nav.clone(),
            config.section_rule,
            dom::scroll_offset(&window),
        );

        let page = Rc::new(Self {
            posters: RefCell::new(StripCarousel::new(Strip::Posters.step(&config))),
            interfaces: RefCell::new(StripCarousel::new(Strip::Interfaces.step(&config))),
            config,
            window,
            document,
            scroll: RefCell::new(scroll),
            scroll_timer: RefCell::new(None),
            pointer: Cell::new(PointerTracker::default()),
            modal: RefCell::new(ModalController::new()),
            theme: RefCell::new(theme),
            store: RefCell::new(store),
            menu: RefCell::new(MobileMenu::default()),
            carousels: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        });

        page.apply(&page.theme.borrow().commands());
        page.install_scroll_listeners();
        page.install_modal_listeners();
        page.install_control_listeners();
        page.mount_carousels();
        page.load_content();
        page.sync_scroll();
        log::info!("page mounted");
        Ok(page)
    }

    /// Drop every listener and timer, breaking the `Rc` cycles they hold.
    pub fn unmount(&self) {
        self.listeners.borrow_mut().clear();
        self.timers.borrow_mut().clear();
        self.scroll_timer.borrow_mut().take();
        log::debug!("page unmounted");
    }

    fn apply(&self, commands: &[UiCommand]) {
        dom::apply(&self.document, commands);
    }

    fn layout(&self) -> Layout {
        Layout::for_width(
            dom::viewport_width(&self.window),
            self.config.mobile_breakpoint_px,
        )
    }

    fn listen<F>(&self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners
            .borrow_mut()
            .push(EventListener::new(target, event, handler));
    }

    fn listen_id<F>(&self, id: &str, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        match self.document.get_element_by_id(id) {
            Some(el) => self.listen(&el, event, handler),
            None => log::debug!("#{id} not found, {event} not wired"),
        }
    }

    fn listen_all<F>(self: &Rc<Self>, selector: &str, event: &'static str, handler: F)
    where
        F: Fn(&Rc<Self>, &Event) + Clone + 'static,
    {
        for el in dom::elements(&self.document, selector) {
            let page = Rc::clone(self);
            let handler = handler.clone();
            self.listen(&el, event, move |e| handler(&page, e));
        }
    }

    // Scroll, navbar and reveal-on-scroll.

    fn install_scroll_listeners(self: &Rc<Self>) {
        // Resizing moves the breakpoint and the section offsets.
        for event in ["scroll", "resize"] {
            let page = Rc::clone(self);
            self.listen(&self.window, event, move |_| page.schedule_sync());
        }

        let page = Rc::clone(self);
        self.listen(&self.window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                page.track_pointer(|p| p.moved(f64::from(event.client_y())));
                page.schedule_sync();
            }
        });

        // `mouseout` with no related target means the pointer left the window.
        let page = Rc::clone(self);
        self.listen(&self.document, "mouseout", move |event| {
            let left = event
                .dyn_ref::<MouseEvent>()
                .is_some_and(|event| event.related_target().is_none());
            if left {
                page.track_pointer(PointerTracker::left_document);
                page.schedule_sync();
            }
        });

        let Some(nav) = self.document.get_element_by_id(NAV_ID) else {
            log::debug!("#{NAV_ID} not found, nav hover not wired");
            return;
        };
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let page = Rc::clone(self);
            self.listen(&nav, event, move |_| {
                page.track_pointer(|p| p.set_hovering_nav(hovering));
                if hovering {
                    page.reveal_nav();
                }
            });
        }
        let page = Rc::clone(self);
        self.listen(&nav, "focusin", move |_| {
            page.track_pointer(|p| p.set_focus_in_nav(true));
            page.reveal_nav();
        });
        let page = Rc::clone(self);
        let focus_root = nav.clone();
        self.listen(&nav, "focusout", move |event| {
            // Moving focus between nav links keeps it inside.
            let related = event
                .dyn_ref::<web_sys::FocusEvent>()
                .and_then(web_sys::FocusEvent::related_target);
            if !dom::contains(&focus_root, related) {
                page.track_pointer(|p| p.set_focus_in_nav(false));
            }
        });
    }

    fn track_pointer(&self, f: impl FnOnce(&mut PointerTracker)) {
        let mut tracker = self.pointer.get();
        f(&mut tracker);
        self.pointer.set(tracker);
    }

    fn reveal_nav(&self) {
        let commands = self.scroll.borrow_mut().reveal_nav();
        self.apply(&commands);
    }

    fn schedule_sync(self: &Rc<Self>) {
        let page = Rc::clone(self);
        let timeout = Timeout::new(self.config.nav.debounce_ms, move || page.sync_scroll());
        // Replacing the handle cancels the superseded timer.
        *self.scroll_timer.borrow_mut() = Some(timeout);
    }

    fn frame(&self) -> ScrollFrame {
        ScrollFrame {
            offset: dom::scroll_offset(&self.window),
            viewport_width: dom::viewport_width(&self.window),
            viewport_height: dom::viewport_height(&self.window),
            document_height: dom::document_height(&self.document),
            pointer: self.pointer.get().pointer(),
        }
    }

    fn sync_scroll(&self) {
        let frame = self.frame();
        let commands = {
            let mut scroll = self.scroll.borrow_mut();
            scroll.set_sections(dom::sections(&self.document, SECTION_SELECTOR));
            scroll.update(&frame)
        };
        self.apply(&commands);

        let revealed = reveal::reveal_commands(
            &dom::sections(&self.document, REVEAL_SELECTOR),
            frame.offset,
            frame.viewport_height,
            reveal::DEFAULT_THRESHOLD,
        );
        self.apply(&revealed);
    }

    // Resume modal.

    fn install_modal_listeners(self: &Rc<Self>) {
        self.listen_all(OPEN_RESUME_SELECTOR, "click", |page, _| page.open_resume());
        self.listen_all(CLOSE_RESUME_SELECTOR, "click", |page, _| page.close_resume());

        let page = Rc::clone(self);
        self.listen(&self.document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if page.modal.borrow_mut().on_key(&event.key()) {
                page.apply(&page.modal.borrow().commands());
            }
        });

        let content = self
            .document
            .query_selector(MODAL_CONTENT_SELECTOR)
            .ok()
            .flatten();
        let page = Rc::clone(self);
        self.listen_id(MODAL_ID, "click", move |event| {
            let inside = content
                .as_ref()
                .is_some_and(|content| dom::contains(content, event.target()));
            if page.modal.borrow_mut().on_click(inside) {
                page.apply(&page.modal.borrow().commands());
            }
        });
    }

    pub fn open_resume(self: &Rc<Self>) {
        let ticket = self.modal.borrow_mut().open();
        self.apply(&self.modal.borrow().commands());

        let page = Rc::clone(self);
        let url = self.config.data_url(Resource::Resume.file_name());
        spawn_local(async move {
            let fetched = fetch_bytes(&url).await;
            if !page.modal.borrow().accepts(ticket) {
                log::debug!("dropping superseded resume response");
                return;
            }
            let rendered = match fetched {
                Ok(bytes) => render_resource(Resource::Resume, page.layout(), Ok(bytes.as_slice())),
                Err(e) => render_resource(Resource::Resume, page.layout(), Err(e)),
            };
            page.apply(&rendered.commands());
        });
    }

    pub fn close_resume(&self) {
        self.modal.borrow_mut().close();
        self.apply(&self.modal.borrow().commands());
    }

    // Theme, mobile menu and strips.

    fn install_control_listeners(self: &Rc<Self>) {
        for id in DARK_TOGGLE_IDS {
            let page = Rc::clone(self);
            self.listen_id(id, "click", move |_| page.toggle_dark_mode());
        }

        let page = Rc::clone(self);
        self.listen_id(MENU_TOGGLE_ID, "click", move |_| page.toggle_mobile_menu());
        let menu_links = format!("#{MOBILE_MENU_ID} {NAV_LINK_SELECTOR}");
        self.listen_all(&menu_links, "click", |page, _| {
            page.menu.borrow_mut().close();
            page.apply(&page.menu.borrow().commands());
        });

        for strip in Strip::ALL {
            let view = strip.view();
            for (id, direction) in [(view.prev_id, Direction::Prev), (view.next_id, Direction::Next)] {
                let page = Rc::clone(self);
                self.listen_id(&id, "click", move |_| page.scroll_strip(strip, direction));
            }
        }

        let available = strips::view_all_available(dom::viewport_width(&self.window), &self.config);
        self.apply(&[UiCommand::set_shown(Target::id(VIEW_ALL_BUTTON_ID), available)]);
        if available {
            let page = Rc::clone(self);
            self.listen_id(VIEW_ALL_BUTTON_ID, "click", move |_| page.toggle_view_all());
        }
    }

    pub fn toggle_dark_mode(&self) {
        let commands = {
            let mut theme = self.theme.borrow_mut();
            theme.toggle(&mut *self.store.borrow_mut());
            theme.commands()
        };
        self.apply(&commands);
    }

    pub fn toggle_mobile_menu(&self) {
        let commands = {
            let mut menu = self.menu.borrow_mut();
            menu.toggle();
            menu.commands()
        };
        self.apply(&commands);
    }

    fn strip(&self, strip: Strip) -> &RefCell<StripCarousel> {
        match strip {
            Strip::Posters => &self.posters,
            Strip::Interfaces => &self.interfaces,
        }
    }

    pub fn scroll_strip(&self, strip: Strip, direction: Direction) {
        let Some(track) = self.document.get_element_by_id(strip.track_id()) else {
            return;
        };
        let commands = {
            let mut carousel = self.strip(strip).borrow_mut();
            match direction {
                Direction::Next => carousel.scroll_next(
                    f64::from(track.scroll_width()),
                    f64::from(track.client_width()),
                ),
                Direction::Prev => carousel.scroll_prev(),
            };
            carousel.commands(&strip.view())
        };
        self.apply(&commands);
    }

    fn toggle_view_all(&self) {
        let commands = {
            let mut posters = self.posters.borrow_mut();
            posters.toggle_view_all();
            posters.commands(&Strip::Posters.view())
        };
        self.apply(&commands);
    }

    // Indexed carousels.

    /// Tracks marked `data-carousel` get a timer plus indicator
    /// (`{id}-dot-{i}`) and prev/next (`{id}-prev`, `{id}-next`) wiring.
    fn mount_carousels(self: &Rc<Self>) {
        for track in dom::elements(&self.document, CAROUSEL_SELECTOR) {
            let id = track.id();
            let count = track.child_element_count() as usize;
            let carousel = match Carousel::new(count, self.config.carousel_interval_ms) {
                Ok(carousel) => carousel,
                Err(e) => {
                    log::debug!("carousel #{id} not started: {e}");
                    continue;
                }
            };
            let view = CarouselView::with_indicator_prefix(id.as_str(), &format!("{id}-dot"), count);
            self.apply(&carousel.commands(&view));
            let interval_ms = carousel.interval_ms();

            let slot = {
                let mut carousels = self.carousels.borrow_mut();
                carousels.push(CarouselSlot { carousel, view });
                carousels.len() - 1
            };

            let page = Rc::clone(self);
            let interval = Interval::new(interval_ms, move || {
                page.step_carousel(slot, Carousel::tick);
            });
            self.timers.borrow_mut().push(interval);

            for i in 0..count {
                let page = Rc::clone(self);
                self.listen_id(&format!("{id}-dot-{i}"), "click", move |_| {
                    page.step_carousel(slot, |c| match c.go_to(i) {
                        Ok(()) => true,
                        Err(e) => {
                            log::warn!("{e}");
                            false
                        }
                    });
                });
            }
            let page = Rc::clone(self);
            self.listen_id(&format!("{id}-prev"), "click", move |_| {
                page.step_carousel(slot, |c| {
                    c.retreat();
                    true
                });
            });
            let page = Rc::clone(self);
            self.listen_id(&format!("{id}-next"), "click", move |_| {
                page.step_carousel(slot, |c| {
                    c.advance();
                    true
                });
            });
        }

        if !self.carousels.borrow().is_empty() {
            let page = Rc::clone(self);
            self.listen(&self.document, "visibilitychange", move |_| {
                let hidden = page.document.hidden();
                log::debug!("document hidden: {hidden}");
                for slot in page.carousels.borrow_mut().iter_mut() {
                    slot.carousel.set_suspended(hidden);
                }
            });
        }
    }

    /// Run `step` on one carousel and render it if it moved.
    fn step_carousel(&self, slot: usize, step: impl FnOnce(&mut Carousel) -> bool) {
        let commands = {
            let mut carousels = self.carousels.borrow_mut();
            let Some(CarouselSlot { carousel, view }) = carousels.get_mut(slot) else {
                return;
            };
            if !step(carousel) {
                return;
            }
            carousel.commands(view)
        };
        self.apply(&commands);
    }

    // JSON content.

    fn load_content(self: &Rc<Self>) {
        let layout = self.layout();
        for resource in Resource::ALL {
            if resource == Resource::Resume {
                // Fetched on every modal open instead.
                continue;
            }
            let page = Rc::clone(self);
            let url = self.config.data_url(resource.file_name());
            spawn_local(async move {
                let rendered = match fetch_bytes(&url).await {
                    Ok(bytes) => render_resource(resource, layout, Ok(bytes.as_slice())),
                    Err(e) => render_resource(resource, layout, Err(e)),
                };
                let commands = match Strip::from_track(resource.container_id()) {
                    Some(strip) => {
                        strips::rendered_strip_commands(&rendered, strip, &page.strip(strip).borrow())
                    }
                    None => rendered.commands(),
                };
                page.apply(&commands);
                // New content changes the page height and section offsets.
                page.sync_scroll();
            });
        }
    }
}
