use folio_protocol::{Element, Node};
use serde::{Deserialize, Serialize};

use super::{Scalar, bullet_list};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub basics: Basics,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Position>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub study_type: String,
    pub area: String,
    pub start_date: Scalar,
    pub end_date: Scalar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub company: String,
    pub position: String,
    pub duration: Scalar,
    pub hours: Scalar,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub role: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
}

const SECTION: &str = "border-b pb-6 dark:border-gray-700";
const HEADING: &str = "text-xl font-bold text-gray-800 dark:text-white mb-4";
const TEXT: &str = "text-gray-600 dark:text-gray-200";
const TEXT_STRONG: &str = "text-gray-700 dark:text-gray-200";
const CARD: &str = "mb-4 bg-gray-50 dark:bg-gray-800 rounded-lg p-4";
const CARD_TITLE: &str = "font-semibold text-primary dark:text-light";
const BULLETS: &str = "list-disc ml-6 text-gray-600 dark:text-gray-200 mt-2";

/// Render the full resume panel shown in the modal, one node per section.
pub fn render_resume(resume: &Resume) -> Vec<Node> {
    vec![
        basics(&resume.basics).into(),
        section("Education")
            .children(resume.education.iter().map(education))
            .into(),
        section("Skills")
            .child(
                Element::new("div")
                    .class("grid grid-cols-2 gap-4")
                    .children(resume.skills.iter().map(|skill| {
                        Element::new("div")
                            .class("mb-2")
                            .child(
                                Element::new("p")
                                    .class("font-semibold text-gray-800 dark:text-white")
                                    .text(skill.name.as_str()),
                            )
                            .child(Element::new("p").class(TEXT).text(skill.keywords.join(", ")))
                    })),
            )
            .into(),
        section("Experience")
            .children(resume.experience.iter().map(position))
            .into(),
        Element::new("div")
            .child(heading("Projects"))
            .children(resume.projects.iter().map(project))
            .into(),
    ]
}

fn basics(basics: &Basics) -> Element {
    Element::new("div")
        .class(SECTION)
        .child(
            Element::new("h3")
                .class("text-2xl font-bold text-gray-800 dark:text-white mb-2")
                .text(basics.name.as_str()),
        )
        .child(Element::new("p").class(TEXT).text(basics.label.as_str()))
        .child(
            Element::new("p")
                .class(TEXT)
                .text(format!("{} | {}", basics.email, basics.phone)),
        )
        .child(
            Element::new("p")
                .class(TEXT)
                .class("mt-4")
                .text(basics.summary.as_str()),
        )
}

fn education(edu: &Education) -> Element {
    Element::new("div")
        .class("mb-4")
        .child(
            Element::new("p")
                .class("font-semibold text-gray-800 dark:text-white")
                .text(edu.institution.as_str()),
        )
        .child(
            Element::new("p")
                .class(TEXT)
                .text(format!("{} in {}", edu.study_type, edu.area)),
        )
        .child(
            Element::new("p")
                .class("text-gray-500 dark:text-gray-400")
                .text(format!("{} - {}", edu.start_date, edu.end_date)),
        )
}

fn section(title: &str) -> Element {
    Element::new("div").class(SECTION).child(heading(title))
}

fn heading(title: &str) -> Element {
    Element::new("h3").class(HEADING).text(title)
}

fn technologies(techs: &[String]) -> Element {
    Element::new("p")
        .class(TEXT)
        .class("mt-2")
        .text("Technologies: ")
        .child(Element::new("span").class("font-medium").text(techs.join(", ")))
}

fn labelled(label: &str, value: &str) -> Element {
    Element::new("p")
        .class(TEXT_STRONG)
        .text(format!("{label}: "))
        .child(Element::new("span").class("font-medium").text(value))
}

fn position(exp: &Position) -> Element {
    Element::new("div")
        .class(CARD)
        .child(Element::new("p").class(CARD_TITLE).text(exp.company.as_str()))
        .child(
            Element::new("p")
                .class(TEXT_STRONG)
                .text(format!("{} ", exp.position))
                .child(
                    Element::new("span")
                        .class("text-xs text-gray-500 dark:text-gray-400")
                        .text(format!("({}, {} hours)", exp.duration, exp.hours)),
                ),
        )
        .child(technologies(&exp.technologies))
        .child(bullet_list(BULLETS, &exp.responsibilities))
}

fn project(proj: &Project) -> Element {
    Element::new("div")
        .class(CARD)
        .child(Element::new("p").class(CARD_TITLE).text(proj.name.as_str()))
        .child(labelled("Role", &proj.role))
        .child(labelled("Category", &proj.category))
        .child(technologies(&proj.technologies))
        .child(bullet_list(BULLETS, &proj.description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::fragment_to_html;

    fn sample() -> Resume {
        serde_json::from_str(
            r#"{
                "basics": {"name": "Ana Cruz", "label": "Designer", "email": "ana@example.com",
                           "phone": "555-0100", "summary": "Builds things."},
                "education": [{"institution": "State U", "studyType": "BSc", "area": "Computing",
                               "startDate": "2018", "endDate": 2022}],
                "skills": [{"name": "Frontend", "keywords": ["HTML", "CSS"]}],
                "experience": [{"company": "Acme", "position": "Intern", "duration": "3 months",
                                "hours": 486, "technologies": ["Figma", "Vue"],
                                "responsibilities": ["Drew mockups", "Shipped <forms>"]}],
                "projects": [{"name": "Clinic App", "role": "Lead", "category": "Web",
                              "technologies": ["Laravel"], "description": ["Booking flow"]}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn renders_every_section() {
        let html = fragment_to_html(&render_resume(&sample()));
        for expected in [
            "Ana Cruz",
            "ana@example.com | 555-0100",
            "BSc in Computing",
            "2018 - 2022",
            "HTML, CSS",
            "(3 months, 486 hours)",
            "Figma, Vue",
            "Role: <span class=\"font-medium\">Lead</span>",
            "Category: <span class=\"font-medium\">Web</span>",
            "<li>Booking flow</li>",
        ] {
            assert!(html.contains(expected), "missing {expected:?} in {html}");
        }
    }

    #[test]
    fn bullet_text_is_escaped() {
        let html = fragment_to_html(&render_resume(&sample()));
        assert!(html.contains("<li>Shipped &lt;forms&gt;</li>"));
    }

    #[test]
    fn one_card_per_experience_and_project() {
        let sections = render_resume(&sample());
        assert_eq!(sections.len(), 5);
        let cards: usize = sections
            .iter()
            .filter_map(|n| match n {
                Node::Element(el) => Some(el),
                Node::Text(_) => None,
            })
            .map(|el| {
                el.find_all("div")
                    .into_iter()
                    .filter(|d| d.has_class("bg-gray-50"))
                    .count()
            })
            .sum();
        assert_eq!(cards, 2);
    }
}
