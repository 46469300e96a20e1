//! Landing page section order.

use std::fmt;

/// A presentational region of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Brand bar and in-page navigation
    Header,
    /// Headline and the claim checker
    Hero,
    /// Three-step explainer
    HowItWorks,
    /// Currently trending misinformation topics
    Trends,
    /// Media literacy primers
    Education,
    /// Closing call to action
    FinalCta,
    /// Links and copyright
    Footer,
}

/// Sections rendered by the landing page, top to bottom.
///
/// The page iterates this list; there is no other source of order.
pub const LANDING_SECTIONS: [Section; 7] = [
    Section::Header,
    Section::Hero,
    Section::HowItWorks,
    Section::Trends,
    Section::Education,
    Section::FinalCta,
    Section::Footer,
];

impl Section {
    /// Stable kebab-case id, used as the DOM `id` and `data-section` value.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::HowItWorks => "how-it-works",
            Section::Trends => "trends",
            Section::Education => "education",
            Section::FinalCta => "final-cta",
            Section::Footer => "footer",
        }
    }

    /// Whether the section sits inside `<main>` (header and footer frame it).
    pub fn in_main(&self) -> bool {
        !matches!(self, Section::Header | Section::Footer)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
