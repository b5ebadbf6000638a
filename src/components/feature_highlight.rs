use crate::content::FeatureEntry;
use maud::{Markup, Render, html};

/// Icon, title and description shown as a card.
///
/// Every field is optional; an absent field renders as an empty element so
/// the card layout never changes shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureHighlight<'a> {
    /// A glyph such as an emoji.
    pub icon: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl<'a> FeatureHighlight<'a> {
    pub fn new(icon: &'a str, title: &'a str, description: &'a str) -> Self {
        Self {
            icon: Some(icon),
            title: Some(title),
            description: Some(description),
        }
    }
}

impl<'a> From<&'a FeatureEntry> for FeatureHighlight<'a> {
    fn from(entry: &'a FeatureEntry) -> Self {
        Self::new(entry.icon, entry.title, entry.description)
    }
}

impl Render for FeatureHighlight<'_> {
    fn render(&self) -> Markup {
        html! {
            div.feature-highlight {
                span.feature-icon aria-hidden="true" { @if let Some(icon) = self.icon { (icon) } }
                h3.feature-title { @if let Some(title) = self.title { (title) } }
                p.feature-description { @if let Some(desc) = self.description { (desc) } }
            }
        }
    }
}
