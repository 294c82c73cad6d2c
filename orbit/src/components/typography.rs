// Typography Components
// Text primitive plus the heading/paragraph presets built on it

use super::primitive::{Primitive, Props};
use crate::element::{Element, Tag};
use crate::props::{StyleProps, TEXT_PROPS};
use crate::tokens::*;

/// A `p` that understands color, margin and typography props.
pub fn create_text(theme: &Theme) -> Primitive<'_> {
    Primitive::new("Text", theme, TEXT_PROPS).default_tag(Tag::P)
}

fn preset(theme: &Theme, tag: Tag, size: FontSize, weight: FontWeight, color: ColorToken, text: String) -> Element {
    create_text(theme).render(
        Props::new()
            .tag(tag)
            .style(
                StyleProps::new()
                    .font_size(size)
                    .font_weight(weight)
                    .color(color),
            )
            .child(text),
    )
}

// Heading Components
pub fn h1(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::H1, FontSize::Xxxxl, FontWeight::Bold, ColorToken::Text, text.into())
}

pub fn h2(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::H2, FontSize::Xxxl, FontWeight::Bold, ColorToken::Text, text.into())
}

pub fn h3(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::H3, FontSize::Xxl, FontWeight::Semibold, ColorToken::Text, text.into())
}

pub fn h4(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::H4, FontSize::Xl, FontWeight::Semibold, ColorToken::Text, text.into())
}

pub fn h5(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::H5, FontSize::Lg, FontWeight::Medium, ColorToken::Text, text.into())
}

pub fn h6(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::H6, FontSize::Base, FontWeight::Medium, ColorToken::Text, text.into())
}

pub fn paragraph(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::P, FontSize::Base, FontWeight::Normal, ColorToken::Text, text.into())
}

// Lead Text Component (larger paragraph)
pub fn lead(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::P, FontSize::Lg, FontWeight::Normal, ColorToken::Text, text.into())
}

pub fn small(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::Small, FontSize::Sm, FontWeight::Normal, ColorToken::TextSecondary, text.into())
}

pub fn muted(theme: &Theme, text: impl Into<String>) -> Element {
    preset(theme, Tag::P, FontSize::Sm, FontWeight::Normal, ColorToken::TextSecondary, text.into())
}

// Code uses a plain class for the monospace family, which has no token
pub fn code(theme: &Theme, text: impl Into<String>) -> Element {
    create_text(theme).render(
        Props::new()
            .tag(Tag::Code)
            .style(
                StyleProps::new()
                    .font_size(FontSize::Sm)
                    .background_color(ColorToken::Card)
                    .color(ColorToken::Text),
            )
            .class_name("font-mono rounded px-1.5 py-0.5")
            .child(text.into()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_defaults_to_paragraph() {
        let theme = Theme::orbit();
        let element = create_text(&theme)
            .render_json(&json!({ "fontWeight": "medium", "children": "Plan" }))
            .unwrap();
        assert_eq!(element.to_html(), r#"<p class="font-medium">Plan</p>"#);
    }

    #[test]
    fn text_forwards_padding_untouched() {
        let theme = Theme::orbit();
        let element = create_text(&theme)
            .render_json(&json!({ "padding": "spacing-3", "textAlign": "center" }))
            .unwrap();
        assert_eq!(element.class_name().as_str(), "text-center");
        assert_eq!(element.attribute("padding"), Some("spacing-3"));
    }

    #[test]
    fn headings_use_their_tag_and_scale() {
        let theme = Theme::orbit();
        let heading = h2(&theme, "Subscriptions");
        assert_eq!(heading.tag(), Tag::H2);
        assert_eq!(
            heading.class_name().as_str(),
            "text-gray-900 dark:text-white text-3xl font-bold"
        );
    }

    #[test]
    fn code_appends_plain_classes_after_tokens() {
        let theme = Theme::orbit();
        let element = code(&theme, "orbit-showcase build");
        assert!(element.class_name().as_str().ends_with("text-sm font-mono rounded px-1.5 py-0.5"));
        assert_eq!(element.tag(), Tag::Code);
    }
}
