//! Integration test: render every JSON resource from fixture files and
//! check the commands a host would apply.

use folio_core::content::{ContentError, Layout, Resource, render_resource};
use folio_protocol::{Target, UiCommand};

fn fixture(resource: Resource) -> &'static [u8] {
    match resource {
        Resource::Resume => include_bytes!("fixtures/resume.json"),
        Resource::Experience => include_bytes!("fixtures/experience.json"),
        Resource::Skills => include_bytes!("fixtures/skills.json"),
        Resource::Graphics => include_bytes!("fixtures/graphics.json"),
        Resource::Interface => include_bytes!("fixtures/interfaceProjects.json"),
    }
}

#[test]
fn every_fixture_renders_on_both_layouts() {
    for resource in Resource::ALL {
        for layout in [Layout::Mobile, Layout::Desktop] {
            let rendered = render_resource(resource, layout, Ok(fixture(resource)));
            assert!(!rendered.failed, "{resource:?} failed on {layout:?}");
            assert!(!rendered.html.is_empty());
            assert!(!rendered.html.contains("Error loading"));

            let commands = rendered.commands();
            assert_eq!(
                commands[0],
                UiCommand::ReplaceContent {
                    target: Target::id(resource.container_id()),
                    html: rendered.html.clone(),
                },
                "first command must replace the whole container"
            );
        }
    }
}

#[test]
fn resume_fixture_content() {
    let rendered = render_resource(
        Resource::Resume,
        Layout::Desktop,
        Ok(fixture(Resource::Resume)),
    );
    let html = &rendered.html;
    assert!(html.contains("Ana Cruz"));
    assert!(html.contains("2021 - 2025"));
    assert!(html.contains("(3 months, 486 hours)"));
    assert!(html.contains("Built the booking page &amp; its forms"));
    assert_eq!(html.matches("bg-gray-50").count(), 3);
    assert_eq!(rendered.commands().len(), 1);
}

#[test]
fn experience_timeline_alternates_on_desktop() {
    let rendered = render_resource(
        Resource::Experience,
        Layout::Desktop,
        Ok(fixture(Resource::Experience)),
    );
    assert_eq!(rendered.html.matches("text-right pr-8").count(), 2);
    assert_eq!(rendered.html.matches("ml-auto pl-8").count(), 1);
    assert!(rendered.html.contains("Posters and social media kits for local teams."));
}

#[test]
fn skills_fixture_has_one_card_per_category() {
    let rendered = render_resource(
        Resource::Skills,
        Layout::Desktop,
        Ok(fixture(Resource::Skills)),
    );
    assert_eq!(rendered.html.matches("skill-card").count(), 3);
    assert_eq!(rendered.html.matches("<span").count(), 8);
}

#[test]
fn strip_controls_follow_layout() {
    let desktop = render_resource(
        Resource::Graphics,
        Layout::Desktop,
        Ok(fixture(Resource::Graphics)),
    );
    assert_eq!(desktop.html.matches("<img").count(), 5);
    assert_eq!(
        desktop.commands()[1..],
        [
            UiCommand::set_shown(Target::id("posterPrev"), true),
            UiCommand::set_shown(Target::id("posterNext"), true),
        ]
    );

    let mobile = render_resource(
        Resource::Interface,
        Layout::Mobile,
        Ok(fixture(Resource::Interface)),
    );
    assert_eq!(
        mobile.commands()[1..],
        [
            UiCommand::set_shown(Target::id("interfacePrev"), false),
            UiCommand::set_shown(Target::id("interfaceNext"), false),
        ]
    );
}

#[test]
fn failed_refetch_replaces_previous_content_with_fallback() {
    let first = render_resource(
        Resource::Skills,
        Layout::Desktop,
        Ok(fixture(Resource::Skills)),
    );
    assert!(!first.failed);

    let second = render_resource(
        Resource::Skills,
        Layout::Desktop,
        Err(ContentError::Fetch("network down".into())),
    );
    assert!(second.failed);
    assert_eq!(
        second.commands(),
        vec![UiCommand::ReplaceContent {
            target: Target::id("skills-grid"),
            html: r#"<p class="text-red-500 dark:text-red-400">Error loading skills</p>"#.into(),
        }]
    );
}

#[test]
fn truncated_payload_renders_fallback() {
    let bytes = fixture(Resource::Graphics);
    let rendered = render_resource(
        Resource::Graphics,
        Layout::Desktop,
        Ok(&bytes[..bytes.len() / 2]),
    );
    assert!(rendered.failed);
    assert_eq!(
        rendered.html,
        r#"<p class="text-red-500">Error loading project images</p>"#
    );
}
