use std::fmt;

/// A named screen region of the page. The DOM id doubles as the key the
/// visibility map is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Portfolio,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.dom_id() == id)
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Portfolio => "Work",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// One entry of an intersection callback batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionReport {
    pub section: SectionId,
    pub ratio: f64,
}

impl IntersectionReport {
    pub fn new(section: SectionId, ratio: f64) -> Self {
        Self { section, ratio }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_resolve_back_to_sections() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_dom_id(section.dom_id()), Some(section));
        }
    }

    #[test]
    fn unknown_dom_id_is_not_a_section() {
        assert_eq!(SectionId::from_dom_id("footer"), None);
        assert_eq!(SectionId::from_dom_id(""), None);
        assert_eq!(SectionId::from_dom_id("About"), None);
    }

    #[test]
    fn portfolio_is_labelled_work() {
        assert_eq!(SectionId::Portfolio.nav_label(), "Work");
        assert_eq!(SectionId::Portfolio.to_string(), "portfolio");
    }
}
