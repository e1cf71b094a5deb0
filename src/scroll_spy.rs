use crate::content::Section;

/// Fraction of a section that must be on screen before it takes the highlight.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// One intersection observer report for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    fn is_visible(&self) -> bool {
        self.is_intersecting && self.ratio >= VISIBILITY_THRESHOLD
    }
}

/// Tracks which navigation entry is highlighted.
///
/// The most recent section to cross the threshold wins. Sections scrolling out
/// of view never clear the highlight, so something is always marked once the
/// page has content.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    sections: &'static [Section],
    active: Option<&'static str>,
}

impl ScrollSpy {
    pub fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            active: sections.first().map(|s| s.id),
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == Some(id)
    }

    /// Feed one observer entry. Returns true when the highlight moved.
    pub fn observe(&mut self, id: &str, entry: Visibility) -> bool {
        if !entry.is_visible() {
            return false;
        }
        let Some(section) = self.sections.iter().find(|s| s.id == id) else {
            return false;
        };
        if self.active == Some(section.id) {
            return false;
        }
        self.active = Some(section.id);
        true
    }
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "font-mono transition-colors text-neutral-100 font-bold"
    } else {
        "font-mono transition-colors text-neutral-400 hover:text-neutral-200"
    }
}
