use folio_protocol::{Element, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Icon font classes, e.g. `"fa-solid fa-code"`.
    pub icon: String,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

const CARD: &str = "skill-card group/card p-6 bg-white dark:bg-gray-800 rounded-2xl border border-primary/30 dark:border-light/30 shadow-lg hover:shadow-xl hover:border-primary/50 transition-all duration-300 hover:-translate-y-2 transform flex flex-col gap-4";
const CHIP: &str = "inline-block px-4 py-1 rounded-lg bg-primary/20 dark:bg-light/20 text-primary dark:text-light text-base font-semibold shadow hover:bg-primary/30 dark:hover:bg-light/30 transition-colors duration-200";

/// One card per category, each with an icon, a title and skill chips.
pub fn render_skills(categories: &[SkillCategory]) -> Vec<Node> {
    categories
        .iter()
        .map(|cat| {
            Element::new("div")
                .class(CARD)
                .child(
                    Element::new("div")
                        .class("flex items-center gap-4 mb-3")
                        .child(
                            Element::new("i")
                                .class(&cat.icon)
                                .class("text-2xl text-primary dark:text-white"),
                        )
                        .child(
                            Element::new("h3")
                                .class("font-bold text-xl text-primary dark:text-light")
                                .text(cat.category.as_str()),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("flex flex-wrap gap-3 mt-2")
                        .children(
                            cat.skills
                                .iter()
                                .map(|skill| Element::new("span").class(CHIP).text(skill.as_str())),
                        ),
                )
        })
        .map(Node::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::fragment_to_html;

    #[test]
    fn renders_card_per_category_with_chips() {
        let categories: Vec<SkillCategory> = serde_json::from_str(
            r#"[
                {"icon": "fa-solid fa-code", "category": "Frontend", "skills": ["HTML", "Tailwind"]},
                {"icon": "fa-solid fa-pen", "category": "Design", "skills": ["Figma"]}
            ]"#,
        )
        .unwrap();
        let nodes = render_skills(&categories);
        assert_eq!(nodes.len(), 2);

        let html = fragment_to_html(&nodes);
        assert!(html.contains(r#"<i class="fa-solid fa-code text-2xl text-primary dark:text-white"></i>"#));
        assert_eq!(html.matches("<span").count(), 3);
        assert!(html.contains(">Tailwind</span>"));
    }

    #[test]
    fn category_without_skills_still_renders() {
        let categories = vec![SkillCategory {
            icon: "fa-solid fa-box".into(),
            category: "Misc".into(),
            skills: vec![],
        }];
        let html = fragment_to_html(&render_skills(&categories));
        assert!(html.contains(">Misc</h3>"));
        assert!(!html.contains("<span"));
    }
}
