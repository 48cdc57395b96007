#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// An in-page section, scrolled to by id.
    Section(&'static str),
    /// Opens in a new browsing context.
    External(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub const fn section(label: &'static str, id: &'static str) -> Self {
        Self {
            label,
            target: NavTarget::Section(id),
        }
    }

    pub const fn external(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            target: NavTarget::External(href),
        }
    }

    pub fn href(&self) -> String {
        match self.target {
            NavTarget::Section(id) => format!("#{id}"),
            NavTarget::External(href) => href.to_string(),
        }
    }

    pub fn section_id(&self) -> Option<&'static str> {
        match self.target {
            NavTarget::Section(id) => Some(id),
            NavTarget::External(_) => None,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.target, NavTarget::External(_))
    }

    pub fn is_active(&self, active: Option<&str>) -> bool {
        self.section_id().is_some_and(|id| Some(id) == active)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::external("V1", "https://v1.thewhiz.me"),
    NavItem::external("V2", "https://thewhiz.me"),
    NavItem::section("Projects", "projects"),
    NavItem::section("Experience", "experience"),
    NavItem::section("Skills", "skills"),
    NavItem::section("Certifications", "certifications"),
];

/// Ids the tracker registers, in page order.
pub fn section_ids() -> impl Iterator<Item = &'static str> {
    NAV_ITEMS.iter().filter_map(NavItem::section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_in_page_order() {
        let ids = section_ids().collect::<Vec<_>>();
        assert_eq!(ids, vec!["projects", "experience", "skills", "certifications"]);
    }

    #[test]
    fn test_href_and_active() {
        let skills = NavItem::section("Skills", "skills");
        assert_eq!(skills.href(), "#skills");
        assert!(skills.is_active(Some("skills")));
        assert!(!skills.is_active(Some("projects")));
        assert!(!skills.is_active(None));

        let v1 = NAV_ITEMS[0];
        assert!(v1.is_external());
        assert_eq!(v1.href(), "https://v1.thewhiz.me");
        // external links never highlight
        assert!(!v1.is_active(Some("https://v1.thewhiz.me")));
    }
}
