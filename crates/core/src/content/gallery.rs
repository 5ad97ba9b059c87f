use folio_protocol::{Element, Node};
use serde::{Deserialize, Serialize};

use super::Layout;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graphics {
    #[serde(default)]
    pub sports: Vec<Image>,
    #[serde(default)]
    pub dental_arch: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceProjects {
    #[serde(default)]
    pub interface: Vec<Image>,
}

/// Rendered strip content plus whether its prev/next buttons apply.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub nodes: Vec<Node>,
    pub show_controls: bool,
}

const GRAPHICS_ROOT: &str = "assets/projects/graphics";
const INTERFACE_ROOT: &str = "assets/projects/interface";

/// Poster categories in display order: (JSON key, alt text).
fn poster_groups(graphics: &Graphics) -> [(&'static str, &'static str, &[Image]); 2] {
    [
        ("sports", "Sports Poster", graphics.sports.as_slice()),
        ("dentalArch", "Dental Arch Poster", graphics.dental_arch.as_slice()),
    ]
}

/// Poster strip. Desktop gets fixed-width slides for the strip carousel;
/// mobile gets a two-column grid and no controls.
pub fn render_graphics(graphics: &Graphics, layout: Layout) -> GalleryView {
    let groups = poster_groups(graphics);

    let nodes: Vec<Node> = match layout {
        Layout::Mobile => {
            let tiles = groups.iter().flat_map(|(kind, _, images)| {
                images.iter().map(move |img| {
                    Element::new("div")
                        .class("group overflow-hidden w-full p-1 cursor-pointer")
                        .child(
                            Element::new("div")
                                .class("relative overflow-hidden rounded-xl")
                                .child(
                                    Element::new("img")
                                        .attr("src", format!("{GRAPHICS_ROOT}/{kind}/{}", img.image))
                                        .attr("alt", format!("{kind} Poster"))
                                        .attr("loading", "lazy")
                                        .class("w-full aspect-square object-cover transition-transform duration-300 group-hover:scale-110"),
                                )
                                .child(Element::new("div").class(
                                    "absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center",
                                )),
                        )
                })
            });
            vec![
                Element::new("div")
                    .class("grid grid-cols-2 gap-2 w-full")
                    .children(tiles)
                    .into(),
            ]
        }
        Layout::Desktop => groups
            .iter()
            .flat_map(|(kind, alt, images)| {
                images.iter().map(move |img| {
                    Element::new("div")
                        .class("overflow-hidden min-w-[300px] max-w-[300px] snap-start p-1")
                        .child(
                            Element::new("img")
                                .attr("src", format!("{GRAPHICS_ROOT}/{kind}/{}", img.image))
                                .attr("alt", *alt)
                                .class("w-[280px] h-[280px] object-cover transition-transform duration-300 hover:scale-105 rounded-xl"),
                        )
                })
            })
            .map(Node::from)
            .collect(),
    };

    GalleryView {
        nodes,
        show_controls: layout == Layout::Desktop,
    }
}

/// Interface mockup strip. Mobile gets a single-column grid.
pub fn render_interface(projects: &InterfaceProjects, layout: Layout) -> GalleryView {
    let image = |img: &Image, class: &str| {
        Element::new("img")
            .attr("src", format!("{INTERFACE_ROOT}/{}", img.image))
            .attr("alt", "Interface Design")
            .class(class)
    };

    let nodes: Vec<Node> = match layout {
        Layout::Mobile => vec![
            Element::new("div")
                .class("grid grid-cols-1 gap-2 w-full")
                .children(projects.interface.iter().map(|img| {
                    Element::new("div").class("overflow-hidden w-full p-2").child(image(
                        img,
                        "w-full aspect-[16/9] object-cover transition-transform duration-300 hover:scale-105 rounded-xl",
                    ))
                }))
                .into(),
        ],
        Layout::Desktop => projects
            .interface
            .iter()
            .map(|img| {
                Element::new("div")
                    .class("overflow-hidden min-w-[210px] max-w-[210px] sm:min-w-[320px] sm:max-w-[320px] md:min-w-[560px] md:max-w-[560px] snap-start p-2")
                    .child(image(
                        img,
                        "w-[200px] h-[112px] sm:w-[300px] sm:h-[170px] md:w-[540px] md:h-[300px] object-cover transition-transform duration-300 hover:scale-105 rounded-xl",
                    ))
            })
            .map(Node::from)
            .collect(),
    };

    GalleryView {
        nodes,
        show_controls: layout == Layout::Desktop,
    }
}
