use folio_protocol::{Target, UiCommand};

const STRIP_CLASSES: &[&str] = &["flex", "transition-transform", "duration-500", "ease-in-out"];
const GRID_CLASSES: &[&str] = &["grid", "grid-cols-2", "sm:grid-cols-3", "md:grid-cols-4", "gap-2"];

pub const VIEW_ALL_LABEL: &str = "View All";
pub const SHOW_LESS_LABEL: &str = "Show Less";

/// Element ids a strip carousel renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripView {
    pub track_id: String,
    pub prev_id: String,
    pub next_id: String,
    /// "View All" button, for strips that can expand into a grid.
    pub toggle_id: Option<String>,
}

/// Free-scrolling strip of cards moved by a fixed pixel step.
///
/// The offset saturates in `[0, content_width - viewport_width]`; there is
/// no wraparound. A strip can also be expanded into a grid ("view all"),
/// which drops the transform until the strip is restored.
#[derive(Debug, Clone)]
pub struct StripCarousel {
    offset: f64,
    step: f64,
    view_all: bool,
}

pub fn max_scroll(content_width: f64, viewport_width: f64) -> f64 {
    (content_width - viewport_width).max(0.0)
}

impl StripCarousel {
    pub fn new(step: f64) -> Self {
        Self {
            offset: 0.0,
            step,
            view_all: false,
        }
    }

    pub fn is_view_all(&self) -> bool {
        self.view_all
    }

    pub fn scroll_next(&mut self, content_width: f64, viewport_width: f64) -> f64 {
        if !self.view_all {
            self.offset = (self.offset + self.step).min(max_scroll(content_width, viewport_width));
        }
        self.offset
    }

    pub fn scroll_prev(&mut self) -> f64 {
        if !self.view_all {
            self.offset = (self.offset - self.step).max(0.0);
        }
        self.offset
    }

    /// Flip between strip and grid mode; returns the new mode. The strip
    /// offset survives a round trip through grid mode.
    pub fn toggle_view_all(&mut self) -> bool {
        self.view_all = !self.view_all;
        log::debug!("strip view-all -> {}", self.view_all);
        self.view_all
    }

    pub fn commands(&self, view: &StripView) -> Vec<UiCommand> {
        let track = || Target::id(view.track_id.as_str());
        let (add, remove) = if self.view_all {
            (GRID_CLASSES, STRIP_CLASSES)
        } else {
            (STRIP_CLASSES, GRID_CLASSES)
        };

        let mut commands = Vec::new();
        commands.extend(remove.iter().map(|c| UiCommand::set_class(track(), *c, false)));
        commands.extend(add.iter().map(|c| UiCommand::set_class(track(), *c, true)));

        let transform = if self.view_all {
            String::new()
        } else {
            format!("translateX(-{}px)", self.offset)
        };
        commands.push(UiCommand::set_style(track(), "transform", transform));

        let controls = !self.view_all;
        commands.push(UiCommand::set_shown(Target::id(view.prev_id.as_str()), controls));
        commands.push(UiCommand::set_shown(Target::id(view.next_id.as_str()), controls));

        if let Some(toggle) = &view.toggle_id {
            commands.push(UiCommand::SetText {
                target: Target::id(toggle.as_str()),
                text: (if self.view_all { SHOW_LESS_LABEL } else { VIEW_ALL_LABEL }).to_string(),
            });
        }
        commands
    }
}
