//! Section registry for in-page navigation.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Navigable page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// DOM id of the section element.
    #[must_use]
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// `#id` form for anchor hrefs, so links still work without WASM.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }

    #[must_use]
    pub fn from_anchor(id: &str) -> Option<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL.into_iter().find(|s| s.anchor_id() == id)
    }
}
