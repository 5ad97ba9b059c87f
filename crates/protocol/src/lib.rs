pub mod commands;
pub mod node;
pub mod theme;

pub use commands::{Target, UiCommand};
pub use node::{Element, Node};
pub use theme::Theme;
