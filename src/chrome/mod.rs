//! Static page chrome
//!
//! The search bar, the two buttons and the footer are plain DOM with inline
//! styles. They are described here as a tree of `ChromeNode`s so the layout
//! can be checked natively; `dom::mount` builds the real elements on the
//! web. Nothing here talks to the render loop, and every control is inert.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::consts::FOOTER_HEIGHT;

/// Accessible description applied to the canvas
pub const DESCRIPTION: &str =
    "Interactive Google logo with eyes that follow cursor and a search bar.";

/// Element id of the footer, used to reposition it on resize
pub const FOOTER_ID: &str = "footer";

/// Element id of the full-page search container
pub const CONTAINER_ID: &str = "search-container";

pub const SEARCH_PLACEHOLDER: &str = "Search Google or type a URL";
pub const BUTTON_LABELS: [&str; 2] = ["Google Search", "I'm Feeling Lucky"];
pub const COUNTRY: &str = " Bharat";
pub const LEFT_LINKS: [&str; 4] = ["About", "Advertising", "Business", "How Search works"];
pub const RIGHT_LINKS: [&str; 3] = ["Privacy", "Terms", "Settings"];

const SEARCH_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="#9aa0a6" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="11" cy="11" r="8"></circle><line x1="21" y1="21" x2="16.65" y2="16.65"></line></svg>"##;
const VOICE_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none"><path d="M12 15c1.66 0 3-1.34 3-3V6c0-1.66-1.34-3-3-3S9 4.34 9 6v6c0 1.66 1.34 3 3 3z" fill="#4285f4"></path><path d="M17 12c0 2.76-2.24 5-5 5s-5-2.24-5-5H5c0 3.53 2.61 6.43 6 6.92V21h2v-2.08c3.39-.49 6-3.39 6-6.92h-2z" fill="#4285f4"></path></svg>"##;

const FONT: &str = "'Arial', sans-serif";

/// One DOM element with inline styles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChromeNode {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub text: Option<&'static str>,
    /// Raw inner HTML (icons)
    pub html: Option<&'static str>,
    pub attrs: Vec<(&'static str, &'static str)>,
    pub styles: Vec<(&'static str, String)>,
    pub children: Vec<ChromeNode>,
}

impl ChromeNode {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    fn text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    fn html(mut self, html: &'static str) -> Self {
        self.html = Some(html);
        self
    }

    fn attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attrs.push((name, value));
        self
    }

    fn style(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((name, value.into()));
        self
    }

    fn child(mut self, child: ChromeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Value of an inline style, if set
    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search by id
    pub fn find(&self, id: &str) -> Option<&ChromeNode> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// All nodes with `tag`, depth-first
    pub fn collect_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a ChromeNode>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            child.collect_tag(tag, out);
        }
    }
}

/// Top of the footer for a viewport height
pub fn footer_top(viewport_height: f32) -> f32 {
    viewport_height - FOOTER_HEIGHT
}

fn px(v: f32) -> String {
    format!("{}px", v)
}

/// Page chrome roots: the search container and the footer
pub fn page_chrome(viewport_height: f32) -> [ChromeNode; 2] {
    [search_container(), footer(viewport_height)]
}

fn search_container() -> ChromeNode {
    let search_bar = ChromeNode::new("div")
        .style("display", "flex")
        .style("align-items", "center")
        .style("background-color", "white")
        .style("border-radius", "24px")
        .style("border", "1px solid #dfe1e5")
        .style("box-shadow", "0 1px 6px rgba(32,33,36,0.28)")
        .style("width", "500px")
        .style("padding", "5px 15px")
        .style("margin-top", "25px")
        .style("pointer-events", "auto")
        .child(
            ChromeNode::new("div")
                .html(SEARCH_ICON)
                .style("margin-right", "10px"),
        )
        .child(
            ChromeNode::new("input")
                .attr("type", "text")
                .attr("placeholder", SEARCH_PLACEHOLDER)
                .style("flex", "1")
                .style("padding", "10px 0")
                .style("border", "none")
                .style("font-size", "16px")
                .style("color", "#202124")
                .style("outline", "none")
                .style("font-family", FONT),
        )
        .child(
            ChromeNode::new("div")
                .html(VOICE_ICON)
                .style("margin-left", "10px")
                .style("cursor", "pointer"),
        );

    let buttons = BUTTON_LABELS.iter().fold(
        ChromeNode::new("div")
            .style("display", "flex")
            .style("margin-top", "30px")
            .style("pointer-events", "auto"),
        |row, &label| row.child(button(label)),
    );

    ChromeNode::new("div")
        .id(CONTAINER_ID)
        .style("position", "absolute")
        .style("left", "0px")
        .style("top", "0px")
        .style("width", "100%")
        .style("height", "100%")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("align-items", "center")
        .style("justify-content", "center")
        // Clicks outside the controls fall through to the canvas
        .style("pointer-events", "none")
        .child(search_bar)
        .child(buttons)
}

fn button(label: &'static str) -> ChromeNode {
    ChromeNode::new("button")
        .attr("type", "button")
        .text(label)
        .style("background-color", "#f8f9fa")
        .style("border", "none")
        .style("border-radius", "4px")
        .style("color", "#3c4043")
        .style("font-family", FONT)
        .style("font-size", "14px")
        .style("margin", "0 6px")
        .style("padding", "10px 16px")
        .style("cursor", "pointer")
}

fn footer(viewport_height: f32) -> ChromeNode {
    let country = ChromeNode::new("div")
        .text(COUNTRY)
        .style("padding", "15px 30px")
        .style("border-bottom", "1px solid #dadce0")
        .style("color", "#70757a")
        .style("font-size", "14px");

    let links_group = |labels: &[&'static str]| {
        labels.iter().fold(
            ChromeNode::new("div").style("display", "flex"),
            |group, &label| group.child(footer_link(label)),
        )
    };

    let links = ChromeNode::new("div")
        .style("display", "flex")
        .style("justify-content", "space-between")
        .style("padding", "15px 30px")
        .child(links_group(&LEFT_LINKS))
        .child(links_group(&RIGHT_LINKS));

    ChromeNode::new("div")
        .id(FOOTER_ID)
        .style("position", "absolute")
        .style("left", "0px")
        .style("top", px(footer_top(viewport_height)))
        .style("width", "100%")
        .style("height", px(FOOTER_HEIGHT))
        .style("background-color", "#f2f2f2")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("pointer-events", "auto")
        .child(country)
        .child(links)
}

fn footer_link(label: &'static str) -> ChromeNode {
    ChromeNode::new("a")
        .attr("href", "#")
        .text(label)
        .style("color", "#70757a")
        .style("font-size", "14px")
        .style("text-decoration", "none")
        .style("padding", "0 15px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_pinned_to_bottom() {
        let [_, footer] = page_chrome(800.0);
        assert_eq!(footer.id, Some(FOOTER_ID));
        assert_eq!(footer.style_value("top"), Some("700px"));
        assert_eq!(footer.style_value("height"), Some("100px"));
        assert_eq!(footer_top(1080.0), 980.0);
    }

    #[test]
    fn test_footer_links_are_inert() {
        let [_, footer] = page_chrome(600.0);
        let mut links = Vec::new();
        footer.collect_tag("a", &mut links);
        let labels: Vec<_> = links.iter().filter_map(|l| l.text).collect();
        let expected: Vec<_> = LEFT_LINKS.iter().chain(RIGHT_LINKS.iter()).copied().collect();
        assert_eq!(labels, expected);
        assert!(links.iter().all(|l| l.attrs.contains(&("href", "#"))));
    }

    #[test]
    fn test_search_bar_and_buttons() {
        let [container, _] = page_chrome(600.0);
        assert_eq!(container.style_value("pointer-events"), Some("none"));

        let mut inputs = Vec::new();
        container.collect_tag("input", &mut inputs);
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].attrs.contains(&("placeholder", SEARCH_PLACEHOLDER)));

        let mut buttons = Vec::new();
        container.collect_tag("button", &mut buttons);
        let labels: Vec<_> = buttons.iter().filter_map(|b| b.text).collect();
        assert_eq!(labels, BUTTON_LABELS);
    }

    #[test]
    fn test_find_by_id() {
        let [container, footer] = page_chrome(600.0);
        assert!(container.find(CONTAINER_ID).is_some());
        assert!(container.find(FOOTER_ID).is_none());
        assert!(footer.find(FOOTER_ID).is_some());
    }
}
