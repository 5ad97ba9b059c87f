//! Scroll-driven navbar visibility, active-section tracking and progress.
//!
//! Everything here is a function of numbers the host measures (scroll
//! offset, viewport and document size, pointer position, section boxes).
//! [`ScrollSynchronizer`] owns the resulting [`ScrollState`] and turns each
//! transition into [`UiCommand`]s.

use folio_protocol::{Target, UiCommand};
use serde::{Deserialize, Serialize};

use crate::config::NavConfig;

pub const NAV_ID: &str = "navbar";
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_LINK_ATTR: &str = "data-section";
pub const ACTIVE_CLASS: &str = "active";
pub const PROGRESS_ID: &str = "scroll-progress";

/// How the active section is chosen from the list of sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionRule {
    /// The last section whose adjusted box contains the offset.
    Containing,
    /// The last section whose adjusted top has been scrolled past.
    #[default]
    FurthestReached,
}

/// A content section's measured box, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Pointer position relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// `None` once the pointer has left the document.
    pub y: Option<f64>,
    /// Whether the pointer hovers the nav or keyboard focus is inside it.
    pub over_nav: bool,
}

/// Accumulates pointer and focus events between scroll frames. Hover and
/// focus are tracked apart so leaving one does not clear the other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    last_y: Option<f64>,
    hovering_nav: bool,
    focus_in_nav: bool,
}

impl PointerTracker {
    pub fn moved(&mut self, y: f64) {
        self.last_y = Some(y);
    }

    /// The pointer left the window.
    pub fn left_document(&mut self) {
        self.last_y = None;
        self.hovering_nav = false;
    }

    pub fn set_hovering_nav(&mut self, hovering: bool) {
        self.hovering_nav = hovering;
    }

    pub fn set_focus_in_nav(&mut self, focused: bool) {
        self.focus_in_nav = focused;
    }

    pub fn pointer(&self) -> Option<Pointer> {
        let over_nav = self.hovering_nav || self.focus_in_nav;
        if self.last_y.is_none() && !over_nav {
            return None;
        }
        Some(Pointer {
            y: self.last_y,
            over_nav,
        })
    }
}

/// One measurement of the page, taken when a scroll, resize or pointer
/// event fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub pointer: Option<Pointer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub last_offset: f64,
    pub nav_visible: bool,
    pub active_section: Option<String>,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
}

impl ScrollState {
    fn at(offset: f64) -> Self {
        Self {
            last_offset: offset,
            nav_visible: true,
            active_section: None,
            progress: 0.0,
        }
    }
}

/// Decide whether the navbar should be visible.
///
/// At the top of the page the nav is always shown. Narrow viewports use
/// only that rule. Wide viewports also show it while the pointer hovers the
/// nav or sits in the hover zone, hide it when scrolling down past the hide
/// threshold, and show it again when scrolling up or near the top. Anything
/// else keeps `currently_visible`, so small jitter does not flicker.
pub fn compute_nav_visibility(
    config: &NavConfig,
    currently_visible: bool,
    offset: f64,
    previous_offset: f64,
    pointer: Option<Pointer>,
    viewport_width: f64,
) -> bool {
    if offset <= 0.0 {
        return true;
    }
    if viewport_width <= config.breakpoint_px {
        return false;
    }
    if let Some(pointer) = pointer
        && (pointer.over_nav || pointer.y.is_some_and(|y| y <= config.hover_zone_px))
    {
        return true;
    }
    if offset > previous_offset && offset > config.hide_threshold_px {
        return false;
    }
    if offset < previous_offset || offset < config.show_threshold_px {
        return true;
    }
    currently_visible
}

/// Pick the active section id. Linear scan; later sections win ties.
pub fn compute_active_section<'a>(
    offset: f64,
    sections: &'a [Section],
    rule: SectionRule,
    section_offset: f64,
) -> Option<&'a str> {
    let mut current = None;
    for section in sections {
        let top = section.top - section_offset;
        let reached = top <= offset;
        let hit = match rule {
            SectionRule::FurthestReached => reached,
            SectionRule::Containing => reached && offset < top + section.height,
        };
        if hit {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Scroll progress as a percentage, clamped to `[0, 100]`.
///
/// The scrollable range is floored at 1px so short documents never divide
/// by zero.
pub fn compute_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = (document_height - viewport_height).max(1.0);
    (100.0 * offset / range).clamp(0.0, 100.0)
}

/// Owns the scroll state for one page and re-derives it on every frame.
#[derive(Debug, Clone)]
pub struct ScrollSynchronizer {
    config: NavConfig,
    rule: SectionRule,
    sections: Vec<Section>,
    state: ScrollState,
}

impl ScrollSynchronizer {
    /// `initial_offset` is the scroll position at load, so the first event
    /// is compared against where the page actually started.
    pub fn new(config: NavConfig, rule: SectionRule, initial_offset: f64) -> Self {
        Self {
            config,
            rule,
            sections: Vec::new(),
            state: ScrollState::at(initial_offset),
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Replace the measured sections (after load or resize).
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Apply a new measurement and return the commands that render it.
    pub fn update(&mut self, frame: &ScrollFrame) -> Vec<UiCommand> {
        let visible = compute_nav_visibility(
            &self.config,
            self.state.nav_visible,
            frame.offset,
            self.state.last_offset,
            frame.pointer,
            frame.viewport_width,
        );
        if visible != self.state.nav_visible {
            log::debug!("nav visibility -> {visible} at offset {}", frame.offset);
        }

        let active = compute_active_section(
            frame.offset,
            &self.sections,
            self.rule,
            self.config.section_offset_px,
        )
        .map(str::to_string);
        if active != self.state.active_section {
            log::debug!("active section -> {active:?}");
        }

        self.state = ScrollState {
            last_offset: frame.offset,
            nav_visible: visible,
            active_section: active,
            progress: compute_progress(
                frame.offset,
                frame.document_height,
                frame.viewport_height,
            ),
        };
        self.commands()
    }

    /// Force the nav visible (pointer entered it, or it received focus).
    pub fn reveal_nav(&mut self) -> Vec<UiCommand> {
        self.state.nav_visible = true;
        vec![nav_command(true)]
    }

    /// Commands reflecting the full current state.
    pub fn commands(&self) -> Vec<UiCommand> {
        vec![
            nav_command(self.state.nav_visible),
            UiCommand::ActivateExclusive {
                selector: NAV_LINK_SELECTOR.to_string(),
                attribute: NAV_LINK_ATTR.to_string(),
                class: ACTIVE_CLASS.to_string(),
                active: self.state.active_section.clone(),
            },
            UiCommand::set_style(
                Target::id(PROGRESS_ID),
                "width",
                format!("{}%", self.state.progress),
            ),
        ]
    }
}

fn nav_command(visible: bool) -> UiCommand {
    UiCommand::set_class(Target::id(NAV_ID), NAV_HIDDEN_CLASS, !visible)
}
