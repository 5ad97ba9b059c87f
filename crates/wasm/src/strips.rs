use std::str::FromStr;

use anyhow::bail;
use folio_core::SiteConfig;
use folio_core::carousel::{StripCarousel, StripView};
use folio_core::content::{Layout, Rendered, Resource};
use folio_protocol::UiCommand;

pub const VIEW_ALL_BUTTON_ID: &str = "viewAllBtn";

/// The two pixel-stepped image strips on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    Posters,
    Interfaces,
}

impl Strip {
    pub const ALL: [Strip; 2] = [Strip::Posters, Strip::Interfaces];

    pub fn resource(self) -> Resource {
        match self {
            Strip::Posters => Resource::Graphics,
            Strip::Interfaces => Resource::Interface,
        }
    }

    pub fn track_id(self) -> &'static str {
        self.resource().container_id()
    }

    pub fn from_track(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.track_id() == id)
    }

    pub fn step(self, config: &SiteConfig) -> f64 {
        match self {
            Strip::Posters => config.poster_step_px,
            Strip::Interfaces => config.interface_step_px,
        }
    }

    pub fn view(self) -> StripView {
        let (prev, next, toggle) = match self {
            Strip::Posters => ("posterPrev", "posterNext", Some(VIEW_ALL_BUTTON_ID)),
            Strip::Interfaces => ("interfacePrev", "interfaceNext", None),
        };
        StripView {
            track_id: self.track_id().to_string(),
            prev_id: prev.to_string(),
            next_id: next.to_string(),
            toggle_id: toggle.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" | "previous" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            other => bail!("unknown strip direction: {other}"),
        }
    }
}

/// The poster grid toggle only exists on desktop layouts at least
/// `view_all_min_width_px` wide.
pub fn view_all_available(viewport_width: f64, config: &SiteConfig) -> bool {
    viewport_width >= config.view_all_min_width_px
        && Layout::for_width(viewport_width, config.mobile_breakpoint_px) == Layout::Desktop
}

/// Commands for freshly fetched strip content. A strip the user already
/// expanded into a grid stays a grid, with its prev/next controls hidden.
pub fn rendered_strip_commands(
    rendered: &Rendered,
    strip: Strip,
    carousel: &StripCarousel,
) -> Vec<UiCommand> {
    let mut commands = rendered.commands();
    if carousel.is_view_all() && !rendered.failed {
        commands.extend(carousel.commands(&strip.view()));
    }
    commands
}
