//! Reveal-on-scroll: sections fade in once enough of them is on screen.

use folio_protocol::{Target, UiCommand};

use crate::scroll::Section;

pub const REVEAL_SELECTOR: &str = "section.scroll-animate[id]";
pub const IN_VIEW_CLASS: &str = "scroll-in-view";
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Fraction of the element's height inside the viewport, in `[0, 1]`.
pub fn intersection_ratio(
    element_top: f64,
    element_height: f64,
    viewport_top: f64,
    viewport_height: f64,
) -> f64 {
    let viewport_bottom = viewport_top + viewport_height;
    if element_height <= 0.0 {
        let inside = element_top >= viewport_top && element_top <= viewport_bottom;
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = (element_top + element_height).min(viewport_bottom) - element_top.max(viewport_top);
    (overlap.max(0.0) / element_height).min(1.0)
}

pub fn is_revealed(section: &Section, viewport_top: f64, viewport_height: f64, threshold: f64) -> bool {
    intersection_ratio(section.top, section.height, viewport_top, viewport_height) >= threshold
}

/// Toggle the in-view class on every section.
pub fn reveal_commands(
    sections: &[Section],
    viewport_top: f64,
    viewport_height: f64,
    threshold: f64,
) -> Vec<UiCommand> {
    sections
        .iter()
        .map(|s| {
            UiCommand::set_class(
                Target::id(s.id.as_str()),
                IN_VIEW_CLASS,
                is_revealed(s, viewport_top, viewport_height, threshold),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_covers_partial_and_full_overlap() {
        assert_eq!(intersection_ratio(0.0, 500.0, 0.0, 1000.0), 1.0);
        assert_eq!(intersection_ratio(900.0, 500.0, 0.0, 1000.0), 0.2);
        assert_eq!(intersection_ratio(1200.0, 500.0, 0.0, 1000.0), 0.0);
        // Element taller than the viewport.
        assert_eq!(intersection_ratio(0.0, 4000.0, 1000.0, 1000.0), 0.25);
    }

    #[test]
    fn zero_height_element_counts_when_inside() {
        assert_eq!(intersection_ratio(10.0, 0.0, 0.0, 100.0), 1.0);
        assert_eq!(intersection_ratio(200.0, 0.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn commands_follow_threshold() {
        let sections = vec![
            Section::new("skills", 850.0, 500.0),
            Section::new("contact", 950.0, 500.0),
        ];
        let cmds = reveal_commands(&sections, 0.0, 1000.0, DEFAULT_THRESHOLD);
        assert_eq!(
            cmds,
            vec![
                UiCommand::set_class(Target::id("skills"), IN_VIEW_CLASS, true),
                UiCommand::set_class(Target::id("contact"), IN_VIEW_CLASS, false),
            ]
        );
    }
}
