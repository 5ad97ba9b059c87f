use serde::{Deserialize, Serialize};

/// Where a command applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Element looked up by `id`.
    Id(String),
    /// The document root (`<html>`).
    Root,
    /// The document body.
    Body,
}

impl Target {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }
}

/// A single, stateless DOM instruction.
///
/// Controllers in the core emit a `Vec<UiCommand>` after every transition.
/// The host applies them in order; a command whose target does not exist
/// is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiCommand {
    /// Add (`enabled = true`) or remove a CSS class.
    SetClass {
        target: Target,
        class: String,
        enabled: bool,
    },

    /// Within a group of elements, mark at most one as active.
    ///
    /// The host removes `class` from every element matching `selector`,
    /// then adds it to the ones whose `attribute` equals `active`. Passing
    /// `None` clears the group.
    ActivateExclusive {
        selector: String,
        attribute: String,
        class: String,
        active: Option<String>,
    },

    /// Set an inline style property. An empty `value` removes it.
    SetStyle {
        target: Target,
        property: String,
        value: String,
    },

    /// Replace the inner content of an element in one step.
    ReplaceContent { target: Target, html: String },

    /// Replace an element's text content.
    SetText { target: Target, text: String },

    /// Lock or unlock page scrolling.
    SetScrollLock { locked: bool },
}

impl UiCommand {
    pub fn set_class(target: Target, class: impl Into<String>, enabled: bool) -> Self {
        Self::SetClass {
            target,
            class: class.into(),
            enabled,
        }
    }

    pub fn set_style(target: Target, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property: property.into(),
            value: value.into(),
        }
    }

    /// Show or hide an element through its inline `display` style.
    pub fn set_shown(target: Target, shown: bool) -> Self {
        Self::set_style(target, "display", if shown { "" } else { "none" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_maps_to_display_style() {
        let hide = UiCommand::set_shown(Target::id("posterPrev"), false);
        assert_eq!(
            hide,
            UiCommand::SetStyle {
                target: Target::Id("posterPrev".into()),
                property: "display".into(),
                value: "none".into(),
            }
        );
    }

    #[test]
    fn commands_serialize_as_tagged_json() {
        let cmd = UiCommand::SetScrollLock { locked: true };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"SetScrollLock":{"locked":true}}"#);
    }
}
