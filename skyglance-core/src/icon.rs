//! Inline SVG icons for weather conditions.

use crate::classify::IconId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    #[default]
    Normal,
    /// Used in the forecast strip.
    Compact,
}

impl IconSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            IconSize::Normal => "icon",
            IconSize::Compact => "icon tiny",
        }
    }
}

const SVG_ATTRS: &str = r#"xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

fn shapes(icon: IconId) -> &'static str {
    match icon {
        IconId::Sun => concat!(
            r#"<circle cx="12" cy="12" r="5"></circle>"#,
            r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
            r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
            r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
            r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
            r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
            r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
            r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
            r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#,
        ),
        IconId::Cloud => r#"<path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"></path>"#,
        IconId::Rain => concat!(
            r#"<line x1="16" y1="13" x2="16" y2="21"></line>"#,
            r#"<line x1="8" y1="13" x2="8" y2="21"></line>"#,
            r#"<line x1="12" y1="15" x2="12" y2="23"></line>"#,
            r#"<path d="M20 16.58A5 5 0 0 0 18 7h-1.26A8 8 0 1 0 4 15.25"></path>"#,
        ),
        IconId::Snow => concat!(
            r#"<path d="M20 17.58A5 5 0 0 0 18 8h-1.26A8 8 0 1 0 4 16.25"></path>"#,
            r#"<line x1="8" y1="16" x2="8.01" y2="16"></line>"#,
            r#"<line x1="8" y1="20" x2="8.01" y2="20"></line>"#,
            r#"<line x1="12" y1="18" x2="12.01" y2="18"></line>"#,
            r#"<line x1="12" y1="22" x2="12.01" y2="22"></line>"#,
            r#"<line x1="16" y1="16" x2="16.01" y2="16"></line>"#,
            r#"<line x1="16" y1="20" x2="16.01" y2="20"></line>"#,
        ),
        IconId::Thunder => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"></polygon>"#,
        IconId::Default => concat!(
            r#"<circle cx="12" cy="12" r="10"></circle>"#,
            r#"<line x1="12" y1="8" x2="12" y2="12"></line>"#,
            r#"<line x1="12" y1="16" x2="12.01" y2="16"></line>"#,
        ),
    }
}

/// Render `icon` as an inline `<svg>` element at the given size.
pub fn render_icon(icon: IconId, size: IconSize) -> String {
    format!(
        r#"<svg class="{} {}" {}>{}</svg>"#,
        size.css_class(),
        icon.as_str(),
        SVG_ATTRS,
        shapes(icon)
    )
}
