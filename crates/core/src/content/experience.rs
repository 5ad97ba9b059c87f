use folio_protocol::{Element, Node};
use serde::{Deserialize, Serialize};

use super::{Layout, bullet_list};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceFile {
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub company: String,
    pub description: Description,
}

/// Either a single paragraph or a list of bullet points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Paragraph(String),
    Bullets(Vec<String>),
}

const PERIOD_BADGE: &str = "inline-block px-3 py-1 bg-primary/10 text-sm font-medium text-secondary dark:text-light rounded-full mb-2";
const CARD: &str = "p-6 bg-white dark:bg-gray-800 rounded-lg shadow-md hover:shadow-xl transition-all duration-300 border border-gray-100 dark:border-gray-700 hover:border-primary/20";
const DOT: &str = "absolute left-0 md:left-1/2 w-[30px] h-[30px] bg-gradient-to-r from-primary to-secondary dark:from-light dark:to-neutral rounded-full transform -translate-x-1/2 z-10 shadow-lg group-hover:scale-110 transition-transform duration-300";

/// Render the experience timeline.
///
/// Desktop entries alternate sides by index parity; mobile entries are
/// stacked cards.
pub fn render_experience(file: &ExperienceFile, layout: Layout) -> Vec<Node> {
    file.experiences
        .iter()
        .enumerate()
        .map(|(i, exp)| match layout {
            Layout::Mobile => mobile_entry(exp),
            Layout::Desktop => desktop_entry(i, exp),
        })
        .map(Node::from)
        .collect()
}

fn description(desc: &Description) -> Element {
    match desc {
        Description::Paragraph(text) => Element::new("p")
            .class("text-gray-600 dark:text-gray-300 mt-2")
            .text(text.as_str()),
        Description::Bullets(items) => {
            bullet_list("list-disc ml-6 text-gray-600 dark:text-gray-300 mt-2", items)
        }
    }
}

fn card_body(card: Element, exp: &Experience, title_class: &str, company_class: &str) -> Element {
    card.child(Element::new("span").class(PERIOD_BADGE).text(exp.period.as_str()))
        .child(Element::new("h3").class(title_class).text(exp.title.as_str()))
        .child(Element::new("p").class(company_class).text(exp.company.as_str()))
        .child(description(&exp.description))
}

fn mobile_entry(exp: &Experience) -> Element {
    let card = Element::new("div").class(
        "w-full max-w-sm mx-auto mt-6 p-6 bg-white dark:bg-gray-800 rounded-2xl shadow-lg border border-gray-100 dark:border-gray-700",
    );
    Element::new("div")
        .class("relative flex flex-col items-center mb-10")
        .child(card_body(
            card,
            exp,
            "text-xl font-bold text-gray-800 dark:text-white mb-1",
            "text-secondary dark:text-light font-medium mb-2",
        ))
}

fn desktop_entry(index: usize, exp: &Experience) -> Element {
    let side = if index % 2 == 0 {
        "text-right pr-8 group-hover:-translate-x-2"
    } else {
        "ml-auto pl-8 group-hover:translate-x-2"
    };
    let card = || {
        card_body(
            Element::new("div").class(CARD),
            exp,
            "text-xl font-bold text-gray-800 dark:text-white",
            "text-secondary dark:text-light font-medium",
        )
    };
    Element::new("div")
        .class("relative flex items-center group")
        .child(
            Element::new("div")
                .class("hidden md:block w-5/12 transition-transform duration-300")
                .class(side)
                .child(card()),
        )
        .child(Element::new("div").class(DOT))
        .child(
            Element::new("div")
                .class("md:hidden pl-12 group-hover:translate-x-2 transition-transform duration-300")
                .child(card()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::fragment_to_html;

    fn sample() -> ExperienceFile {
        serde_json::from_str(
            r#"{"experiences": [
                {"period": "2023", "title": "Intern", "company": "Acme",
                 "description": ["Built the site", "Wrote tests"]},
                {"period": "2024", "title": "Designer", "company": "Studio",
                 "description": "Led the rebrand."}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn description_accepts_string_or_list() {
        let file = sample();
        assert!(matches!(file.experiences[0].description, Description::Bullets(ref b) if b.len() == 2));
        assert_eq!(
            file.experiences[1].description,
            Description::Paragraph("Led the rebrand.".into())
        );
    }

    #[test]
    fn desktop_alternates_sides() {
        let sides: Vec<bool> = render_experience(&sample(), Layout::Desktop)
            .iter()
            .filter_map(|n| match n {
                Node::Element(el) => Some(el),
                Node::Text(_) => None,
            })
            .flat_map(|el| el.find_all("div"))
            .filter(|d| d.has_class("w-5/12"))
            .map(|d| d.has_class("text-right"))
            .collect();
        assert_eq!(sides, vec![true, false]);
    }

    #[test]
    fn mobile_renders_one_card_per_entry() {
        let html = fragment_to_html(&render_experience(&sample(), Layout::Mobile));
        assert_eq!(html.matches("max-w-sm").count(), 2);
        assert!(html.contains("<li>Wrote tests</li>"));
        assert!(html.contains(">Led the rebrand.</p>"));
        assert!(!html.contains("w-5/12"));
    }

    #[test]
    fn empty_timeline_renders_nothing() {
        let empty = ExperienceFile {
            experiences: vec![],
        };
        assert!(render_experience(&empty, Layout::Desktop).is_empty());
    }
}
