pub mod carousel;
pub mod config;
pub mod content;
pub mod html;
pub mod menu;
pub mod modal;
pub mod reveal;
pub mod scroll;
pub mod theme;

pub use config::{NavConfig, SiteConfig};
