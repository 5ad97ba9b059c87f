//! JSON content renderers.
//!
//! Each submodule decodes one resource into typed records and builds a
//! `Node` tree from them. [`render_resource`] is the boundary the host
//! calls: it never fails, turning fetch and decode errors into the
//! resource's fallback message.

pub mod experience;
pub mod gallery;
pub mod resume;
pub mod skills;

use std::fmt;

use folio_protocol::{Element, Node, Target, UiCommand};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::html;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Responsive layout chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn for_width(viewport_width: f64, mobile_breakpoint: f64) -> Self {
        if viewport_width < mobile_breakpoint {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

/// A JSON value that may be written as a string or a number
/// (`"hours": 480` and `"hours": "480"` both occur).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Resume,
    Experience,
    Skills,
    Graphics,
    Interface,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Resume,
        Resource::Experience,
        Resource::Skills,
        Resource::Graphics,
        Resource::Interface,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Resume => "resume.json",
            Resource::Experience => "experience.json",
            Resource::Skills => "skills.json",
            Resource::Graphics => "graphics.json",
            Resource::Interface => "interfaceProjects.json",
        }
    }

    /// Id of the element whose content is replaced.
    pub fn container_id(self) -> &'static str {
        match self {
            Resource::Resume => "resumeContent",
            Resource::Experience => "timeline-items",
            Resource::Skills => "skills-grid",
            Resource::Graphics => "poster-slider",
            Resource::Interface => "interface-slider",
        }
    }

    /// Prev/next button ids for resources rendered as strips.
    pub fn controls(self) -> Option<(&'static str, &'static str)> {
        match self {
            Resource::Graphics => Some(("posterPrev", "posterNext")),
            Resource::Interface => Some(("interfacePrev", "interfaceNext")),
            _ => None,
        }
    }

    fn fallback_message(self) -> &'static str {
        match self {
            Resource::Resume => "Error loading resume content",
            Resource::Experience => "Error loading experiences",
            Resource::Skills => "Error loading skills",
            Resource::Graphics => "Error loading project images",
            Resource::Interface => "Error loading interface images",
        }
    }

    fn fallback_class(self) -> &'static str {
        match self {
            Resource::Resume | Resource::Skills => "text-red-500 dark:text-red-400",
            _ => "text-red-500",
        }
    }
}

/// Visible error paragraph shown in place of a resource's content.
pub fn fallback(resource: Resource) -> Node {
    Element::new("p")
        .class(resource.fallback_class())
        .text(resource.fallback_message())
        .into()
}

/// Result of rendering one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub resource: Resource,
    /// Complete replacement for the container's content.
    pub html: String,
    /// For strips: whether prev/next buttons should be shown.
    pub show_controls: Option<bool>,
    pub failed: bool,
}

impl Rendered {
    pub fn commands(&self) -> Vec<UiCommand> {
        let mut commands = vec![UiCommand::ReplaceContent {
            target: Target::id(self.resource.container_id()),
            html: self.html.clone(),
        }];
        if let (Some(shown), Some((prev, next))) = (self.show_controls, self.resource.controls()) {
            commands.push(UiCommand::set_shown(Target::id(prev), shown));
            commands.push(UiCommand::set_shown(Target::id(next), shown));
        }
        commands
    }
}

/// Render a fetched payload, or the fallback if fetching or decoding failed.
pub fn render_resource(
    resource: Resource,
    layout: Layout,
    payload: Result<&[u8], ContentError>,
) -> Rendered {
    match payload.and_then(|bytes| render_bytes(resource, layout, bytes)) {
        Ok((nodes, show_controls)) => Rendered {
            resource,
            html: html::fragment_to_html(&nodes),
            show_controls,
            failed: false,
        },
        Err(e) => {
            log::warn!("error loading {}: {e}", resource.file_name());
            Rendered {
                resource,
                html: html::to_html(&fallback(resource)),
                show_controls: None,
                failed: true,
            }
        }
    }
}

fn render_bytes(
    resource: Resource,
    layout: Layout,
    bytes: &[u8],
) -> Result<(Vec<Node>, Option<bool>), ContentError> {
    Ok(match resource {
        Resource::Resume => (resume::render_resume(&serde_json::from_slice(bytes)?), None),
        Resource::Experience => (
            experience::render_experience(&serde_json::from_slice(bytes)?, layout),
            None,
        ),
        Resource::Skills => {
            let categories: Vec<skills::SkillCategory> = serde_json::from_slice(bytes)?;
            (skills::render_skills(&categories), None)
        }
        Resource::Graphics => {
            let view = gallery::render_graphics(&serde_json::from_slice(bytes)?, layout);
            (view.nodes, Some(view.show_controls))
        }
        Resource::Interface => {
            let view = gallery::render_interface(&serde_json::from_slice(bytes)?, layout);
            (view.nodes, Some(view.show_controls))
        }
    })
}

/// `<ul>` of bullet items, used by several renderers.
pub(crate) fn bullet_list(class: &str, items: &[String]) -> Element {
    Element::new("ul")
        .class(class)
        .children(items.iter().map(|item| Element::new("li").text(item.as_str())))
}
