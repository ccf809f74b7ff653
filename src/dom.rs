/// Live-document implementation of the extractor's page capabilities
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlImageElement};

use crate::extractor::{PageAnchor, PageDocument};

const CONTAINER_SELECTOR: &str = "div, span, li";

pub struct PageDom {
    document: Document,
}

impl PageDom {
    pub fn new(document: Document) -> PageDom {
        PageDom { document }
    }

    /// The document of the page the script is running in
    pub fn current() -> Option<PageDom> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(PageDom::new)
    }
}

pub struct DomAnchor {
    element: HtmlAnchorElement,
}

impl PageDocument for PageDom {
    type Anchor = DomAnchor;

    fn anchors(&self) -> Vec<DomAnchor> {
        let Ok(links) = self.document.query_selector_all("a[href]") else {
            return Vec::new();
        };

        // SVG <a> elements also match the selector; they have no resolved href
        (0..links.length())
            .filter_map(|i| links.item(i))
            .filter_map(|node| node.dyn_into::<HtmlAnchorElement>().ok())
            .map(|element| DomAnchor { element })
            .collect()
    }
}

impl PageAnchor for DomAnchor {
    fn resolved_href(&self) -> String {
        self.element.href()
    }

    fn first_inner_image(&self) -> Option<String> {
        first_image_src(&self.element)
    }

    fn first_container_image(&self) -> Option<String> {
        let container = self.element.closest(CONTAINER_SELECTOR).ok().flatten()?;
        first_image_src(&container)
    }
}

fn first_image_src(scope: &Element) -> Option<String> {
    scope
        .query_selector("img")
        .ok()
        .flatten()?
        .dyn_into::<HtmlImageElement>()
        .ok()
        .map(|img| img.src())
}
