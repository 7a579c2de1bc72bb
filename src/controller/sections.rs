use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// A named region of the page with a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub key: &'static str,
    pub label: &'static str,
}

/// Active section before any scroll reading has matched.
pub const DEFAULT_SECTION: &str = "home";

/// Registration order is scan order for the scroll tracker and menu order for the navbar.
pub const SECTIONS: &[Section] = &[
    Section { key: "home", label: "Home" },
    Section { key: "about", label: "About" },
    Section { key: "services", label: "Services" },
    Section { key: "process", label: "Process" },
    Section { key: "stack", label: "Tech" },
    Section { key: "portfolio", label: "Portfolio" },
    Section { key: "testimonials", label: "Testimonials" },
    Section { key: "contact", label: "Contact" },
];

pub fn find_section(sections: &[Section], key: &str) -> Option<Section> {
    sections.iter().copied().find(|section| section.key == key)
}

/// Vertical extent of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Where sections currently sit on the page. `None` means the section is not rendered.
pub trait SectionLayout {
    fn bounds(&self, key: &str) -> Option<SectionBounds>;
}

/// Reads section extents from the live DOM, by element id.
pub struct DocumentLayout {
    document: Document,
}

impl DocumentLayout {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }
}

impl SectionLayout for DocumentLayout {
    fn bounds(&self, key: &str) -> Option<SectionBounds> {
        let element = self
            .document
            .get_element_by_id(key)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            element.offset_top() as f64,
            element.offset_height() as f64,
        ))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// In-memory layout for driving the tracker and navigator without a browser.
    pub struct FixedLayout(pub Vec<(&'static str, SectionBounds)>);

    impl SectionLayout for FixedLayout {
        fn bounds(&self, key: &str) -> Option<SectionBounds> {
            self.0
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, bounds)| *bounds)
        }
    }

    pub const THREE: &[Section] = &[
        Section { key: "home", label: "Home" },
        Section { key: "about", label: "About" },
        Section { key: "services", label: "Services" },
    ];

    /// home [0,800), about [800,1600), services [1600,2400)
    pub fn stacked() -> FixedLayout {
        FixedLayout(vec![
            ("home", SectionBounds::new(0.0, 800.0)),
            ("about", SectionBounds::new(800.0, 800.0)),
            ("services", SectionBounds::new(1600.0, 800.0)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bounds_are_half_open() {
        let bounds = SectionBounds::new(800.0, 800.0);
        assert!(bounds.contains(800.0));
        assert!(bounds.contains(1599.5));
        assert!(!bounds.contains(1600.0));
        assert!(!bounds.contains(799.9));
    }

    #[test]
    fn test_registry_keys_are_unique() {
        let keys: HashSet<_> = SECTIONS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), SECTIONS.len());
    }

    #[test]
    fn test_default_section_is_registered() {
        assert!(find_section(SECTIONS, DEFAULT_SECTION).is_some());
        assert_eq!(SECTIONS[0].key, DEFAULT_SECTION);
    }

    #[test]
    fn test_find_section_unknown_key() {
        assert_eq!(find_section(SECTIONS, "pricing"), None);
        assert_eq!(find_section(SECTIONS, "contact").map(|s| s.label), Some("Contact"));
    }
}
