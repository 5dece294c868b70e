use std::fmt;

use serde::{Deserialize, Serialize};

/// One full-viewport page of the portfolio book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    Cover,
    Contents,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl SectionId {
    #[cfg(test)]
    pub const ALL: [SectionId; 7] = [
        SectionId::Cover,
        SectionId::Contents,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Sections reachable from the nav bar and progress dots, in display order.
    pub const NAVIGABLE: [SectionId; 6] = [
        SectionId::Contents,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Cover => "cover",
            SectionId::Contents => "contents",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Label on the nav bar. The table of contents doubles as "Home".
    pub fn nav_label(&self) -> &'static str {
        match self {
            SectionId::Contents => "Home",
            other => other.title(),
        }
    }

    /// Capitalized name, used as the progress-dot tooltip.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Cover => "Cover",
            SectionId::Contents => "Contents",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
