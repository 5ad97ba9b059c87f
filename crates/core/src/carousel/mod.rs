//! Slide carousels.
//!
//! [`Carousel`] cycles a fixed number of full-width slides and wraps at
//! both ends. [`StripCarousel`] pans a strip of fixed-width cards by pixel
//! steps and saturates instead of wrapping.

pub mod strip;

pub use strip::{StripCarousel, StripView};

use folio_protocol::{Target, UiCommand};
use thiserror::Error;

pub const INDICATOR_ACTIVE_CLASS: &str = "active";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    Empty,
    #[error("slide {index} out of range for {count} slides")]
    OutOfRange { index: usize, count: usize },
}

/// Element ids a carousel renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub track_id: String,
    /// One id per slide, in slide order.
    pub indicator_ids: Vec<String>,
}

impl CarouselView {
    /// Indicators named `{prefix}-0 .. {prefix}-{count-1}`.
    pub fn with_indicator_prefix(track_id: impl Into<String>, prefix: &str, count: usize) -> Self {
        Self {
            track_id: track_id.into(),
            indicator_ids: (0..count).map(|i| format!("{prefix}-{i}")).collect(),
        }
    }
}

/// Index-based carousel. `index` is always in `[0, slide_count)`.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    slide_count: usize,
    interval_ms: u32,
    suspended: bool,
}

impl Carousel {
    /// Build a carousel for `slide_count` slides advancing every
    /// `interval_ms`. Zero slides is rejected so no timer is ever started
    /// for an empty carousel.
    pub fn new(slide_count: usize, interval_ms: u32) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            index: 0,
            slide_count,
            interval_ms,
            suspended: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.slide_count;
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + self.slide_count - 1) % self.slide_count;
    }

    /// Jump to slide `index`. Out-of-range input is rejected and leaves the
    /// carousel where it was.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slide_count {
            return Err(CarouselError::OutOfRange {
                index,
                count: self.slide_count,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Timer tick. Advances unless suspended; returns whether it did.
    pub fn tick(&mut self) -> bool {
        if self.suspended {
            return false;
        }
        self.advance();
        true
    }

    /// Pause auto-advance (e.g. while the tab is hidden).
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    /// Track translation in percent of one slide width.
    pub fn offset_percent(&self) -> f64 {
        self.index as f64 * 100.0
    }

    /// One flag per slide; exactly one is set.
    pub fn indicator_states(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == self.index).collect()
    }

    pub fn commands(&self, view: &CarouselView) -> Vec<UiCommand> {
        let mut commands = Vec::with_capacity(view.indicator_ids.len() + 1);
        commands.push(UiCommand::set_style(
            Target::id(view.track_id.as_str()),
            "transform",
            format!("translateX(-{}%)", self.offset_percent()),
        ));
        for (id, active) in view.indicator_ids.iter().zip(self.indicator_states()) {
            commands.push(UiCommand::set_class(
                Target::id(id.as_str()),
                INDICATOR_ACTIVE_CLASS,
                active,
            ));
        }
        commands
    }
}
